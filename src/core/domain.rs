use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BOOKS_FILE: &str = "books.json";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}


// Configuration abstracts config options for the inventory service. The listening
// address is fixed; only the location of the books file can be overridden.
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub host: String,
    pub port: u16,
    pub books_file: PathBuf,
}

impl Configuration {
    pub fn new(books_file: impl Into<PathBuf>) -> Self {
        Configuration {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            books_file: books_file.into(),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_BOOKS_FILE)
    }
}
