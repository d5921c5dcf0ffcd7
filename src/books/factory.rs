use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::books::repository::json_book_repository::JsonBookRepository;
use crate::core::domain::Configuration;

pub(crate) fn create_book_repository(config: &Configuration) -> Arc<dyn BookRepository> {
    Arc::new(JsonBookRepository::load(config.books_file.as_path()))
}
