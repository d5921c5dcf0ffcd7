use std::sync::Arc;
use async_trait::async_trait;
use tracing::info;
use crate::books::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::checkout::domain::CheckoutService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) const BOOK_NOT_AVAILABLE: &str = "Book not available";

pub(crate) struct CheckoutServiceImpl {
    book_repository: Arc<dyn BookRepository>,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

fn take_copy(book: &mut BookEntity) -> LibraryResult<()> {
    if !book.is_available() {
        return Err(LibraryError::validation(BOOK_NOT_AVAILABLE, Some("400".to_string())));
    }
    book.quantity -= 1;
    Ok(())
}

fn put_back_copy(book: &mut BookEntity) -> LibraryResult<()> {
    book.quantity = book.quantity.checked_add(1).ok_or_else(|| LibraryError::validation(
        format!("quantity overflow for book {}", book.id()).as_str(), Some("400".to_string())))?;
    Ok(())
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn checkout(&self, book_id: &str) -> LibraryResult<BookDto> {
        let book = self.book_repository.modify(book_id, Box::new(take_copy)).await?;
        info!(book_id, quantity = book.quantity, "checked out book");
        Ok(BookDto::from(&book))
    }

    async fn returned(&self, book_id: &str) -> LibraryResult<BookDto> {
        let book = self.book_repository.modify(book_id, Box::new(put_back_copy)).await?;
        info!(book_id, quantity = book.quantity, "returned book");
        Ok(BookDto::from(&book))
    }
}
