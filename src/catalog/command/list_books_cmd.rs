use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ListBooksCommandRequest {
    pub(crate) title: Option<String>,
    pub(crate) author: Option<String>,
}

impl ListBooksCommandRequest {
    pub fn new(title: Option<&str>, author: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            author: author.map(str::to_string),
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct ListBooksCommandResponse {
    books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.find_books(req.title.as_deref(), req.author.as_deref())
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::core::command::Command;
    use crate::utils::testing::seeded_state;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let dir = TempDir::new().expect("should create dir");
        let state = seeded_state(&dir, &[
            BookEntity::new("1", "A", "X", 1),
            BookEntity::new("2", "B", "X", 1),
            BookEntity::new("3", "A", "Y", 1),
        ]);
        let list_cmd = ListBooksCommand::new(state.catalog_service);

        let all = list_cmd.execute(ListBooksCommandRequest::default()).await.expect("should list books");
        assert_eq!(3, all.books.len());

        let by_author = list_cmd.execute(ListBooksCommandRequest::new(None, Some("X"))).await.expect("should list books");
        assert_eq!(vec!["1", "2"], by_author.books.iter().map(|b| b.id.as_str()).collect::<Vec<_>>());

        let both = list_cmd.execute(ListBooksCommandRequest::new(Some("A"), Some("Y"))).await.expect("should list books");
        assert_eq!(1, both.books.len());
        assert_eq!("[{\"id\":\"3\",\"title\":\"A\",\"author\":\"Y\",\"quantity\":1}]",
                   serde_json::to_string(&both).expect("should serialize"));
    }
}
