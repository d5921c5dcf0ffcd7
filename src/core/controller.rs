use std::sync::Arc;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use crate::books::factory::create_book_repository;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory::create_checkout_service;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) catalog_service: Arc<dyn CatalogService>,
    pub(crate) checkout_service: Arc<dyn CheckoutService>,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        let book_repository = create_book_repository(&config);
        AppState::with_book_repository(config, book_repository)
    }

    // both services share the same book repository
    pub(crate) fn with_book_repository(config: Configuration, book_repository: Arc<dyn BookRepository>) -> AppState {
        AppState {
            catalog_service: create_catalog_service(&config, book_repository.clone()),
            checkout_service: create_checkout_service(&config, book_repository),
            config,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }
}

// Message is the body of every non-record response.
#[derive(Debug, Serialize)]
pub(crate) struct MessageResponse {
    #[serde(rename = "Message")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct ServerError {
    pub status: StatusCode,
    pub message: String,
}

impl ServerError {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }
}

// first value of a query parameter; repeated keys after the first are ignored
pub(crate) fn first_query_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

pub(crate) fn json_to_server_error(err: serde_json::Error) -> ServerError {
    ServerError::new(StatusCode::BAD_REQUEST, format!("Invalid book payload: {}", err).as_str())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::NotFound { .. } => StatusCode::NOT_FOUND,
            CommandError::Runtime { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CommandError::Serialization { .. } => StatusCode::BAD_REQUEST,
            CommandError::Validation { .. } => StatusCode::BAD_REQUEST,
        };
        ServerError::new(status, err.message())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageResponse::new(self.message.as_str()))).into_response()
    }
}
