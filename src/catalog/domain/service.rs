use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::LibraryResult;

pub(crate) struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

fn add_filter(predicate: &mut HashMap<String, String>, name: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        predicate.insert(name.to_string(), value.to_string());
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.create(&BookEntity::from(book)).await?;
        info!(book_id = %book.id(), quantity = book.quantity, "added book");
        Ok(book.clone())
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        let _ = self.book_repository.delete(id).await?;
        info!(book_id = id, "removed book");
        Ok(())
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn find_books(&self, title: Option<&str>, author: Option<&str>) -> LibraryResult<Vec<BookDto>> {
        let mut predicate = HashMap::new();
        add_filter(&mut predicate, "title", title);
        add_filter(&mut predicate, "author", author);
        let res = self.book_repository.query(&predicate).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }
}
