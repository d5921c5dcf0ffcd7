use tempfile::TempDir;
use crate::books::domain::model::BookEntity;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::utils::json_file::{read_json, write_json};

pub(crate) fn seeded_config(dir: &TempDir, books: &[BookEntity]) -> Configuration {
    let path = dir.path().join("books.json");
    write_json(&path, books).expect("should seed books");
    Configuration::new(path)
}

pub(crate) fn seeded_state(dir: &TempDir, books: &[BookEntity]) -> AppState {
    AppState::new(seeded_config(dir, books))
}

pub(crate) fn saved_books(config: &Configuration) -> Vec<BookEntity> {
    read_json(config.books_file.as_path()).expect("should read books").expect("should find books file")
}
