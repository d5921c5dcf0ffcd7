pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: &str) -> LibraryResult<()>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    // exact match on title and author, an empty or missing filter matches everything
    async fn find_books(&self, title: Option<&str>, author: Option<&str>) -> LibraryResult<Vec<BookDto>>;
}
