pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// CheckoutService moves single copies of a book off and back onto the shelf.
#[async_trait]
pub(crate) trait CheckoutService: Sync + Send {
    // takes one copy, fails with a validation error when none are left
    async fn checkout(&self, book_id: &str) -> LibraryResult<BookDto>;
    // puts one copy back, there is no upper bound on the quantity
    async fn returned(&self, book_id: &str) -> LibraryResult<BookDto>;
}
