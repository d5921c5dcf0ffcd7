use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::books::domain::model::BookEntity;
use crate::books::repository::{BookMutation, BookRepository};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::json_file::{load_or_default, write_json};

pub(crate) const BOOK_NOT_FOUND: &str = "Book not found";

// JsonBookRepository keeps the catalog in memory, in insertion order, and rewrites the
// whole json file after every change. The mutex covers both the vector and the file.
#[derive(Debug)]
pub struct JsonBookRepository {
    path: PathBuf,
    books: Mutex<Vec<BookEntity>>,
}

impl JsonBookRepository {
    pub(crate) fn load(path: &Path) -> Self {
        let books: Vec<BookEntity> = load_or_default(path);
        info!(path = %path.display(), count = books.len(), "loaded books");
        Self {
            path: path.to_path_buf(),
            books: Mutex::new(books),
        }
    }

    // write failures are logged and otherwise ignored, the in-memory change stands
    fn persist(&self, books: &[BookEntity]) {
        match write_json(&self.path, books) {
            Ok(_) => debug!(path = %self.path.display(), count = books.len(), "saved books"),
            Err(err) => error!(path = %self.path.display(), error = %err, "failed to save books"),
        }
    }
}

fn not_found(id: &str) -> LibraryError {
    debug!(book_id = id, "book not found");
    LibraryError::not_found(BOOK_NOT_FOUND)
}

fn matches_predicate(book: &BookEntity, predicate: &HashMap<String, String>) -> bool {
    predicate.iter().all(|(k, v)| book.field(k.as_str()) == Some(v.as_str()))
}

#[async_trait]
impl Repository<BookEntity> for JsonBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.lock().await;
        books.push(entity.clone());
        self.persist(&books);
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.lock().await;
        books.iter().find(|b| b.id == id).cloned().ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.books.lock().await;
        let ndx = books.iter().position(|b| b.id == id).ok_or_else(|| not_found(id))?;
        books.remove(ndx);
        self.persist(&books);
        Ok(1)
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<BookEntity>> {
        if let Some(k) = predicate.keys().find(|k| !BookEntity::is_field(k.as_str())) {
            return Err(LibraryError::validation(format!("unsupported book filter {}", k).as_str(), None));
        }
        let books = self.books.lock().await;
        Ok(books.iter().filter(|b| matches_predicate(b, predicate)).cloned().collect())
    }
}

#[async_trait]
impl BookRepository for JsonBookRepository {
    async fn modify(&self, id: &str, mutation: BookMutation) -> LibraryResult<BookEntity> {
        let mut books = self.books.lock().await;
        let book = books.iter_mut().find(|b| b.id == id).ok_or_else(|| not_found(id))?;
        let mut updated = book.clone();
        mutation(&mut updated)?;
        *book = updated.clone();
        self.persist(&books);
        Ok(updated)
    }

    async fn count(&self) -> usize {
        self.books.lock().await.len()
    }
}
