pub mod json_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// BookMutation changes a single book in place; returning an error leaves the book untouched.
pub(crate) type BookMutation = Box<dyn FnOnce(&mut BookEntity) -> LibraryResult<()> + Send>;

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // applies the mutation to the first book with the id and persists on success
    async fn modify(&self, id: &str, mutation: BookMutation) -> LibraryResult<BookEntity>;

    async fn count(&self) -> usize;
}
