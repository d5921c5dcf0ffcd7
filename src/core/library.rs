use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("{message}")]
    NotFound {
        message: String,
    },
    // A request that is well-formed but breaks a catalog rule, e.g. checking out
    // a book that has no copies left or omitting a required parameter.
    #[error("{message} {reason_code:?}")]
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    #[error("{message}")]
    Serialization {
        message: String,
    },
    #[error("{message} {reason_code:?}")]
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // message without the reason code, suitable for returning to callers
    pub fn message(&self) -> &str {
        match self {
            LibraryError::NotFound { message } => message,
            LibraryError::Validation { message, .. } => message,
            LibraryError::Serialization { message } => message,
            LibraryError::Runtime { message, .. } => message,
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io error {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;
