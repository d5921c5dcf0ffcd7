use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) quantity: i64,
}

impl AddBookCommandRequest {
    // Field names match without regard to case. A null leaves the field at its default.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let fields: Map<String, Value> = serde_json::from_slice(body)?;
        // keys iterate in sorted order, so an exact lowercase key overwrites its other spellings
        let normalized: Map<String, Value> = fields.into_iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        serde_json::from_value(Value::Object(normalized))
    }

    #[cfg(test)]
    pub fn new(id: &str, title: &str, author: &str, quantity: i64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            quantity,
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.id.as_str(), self.title.as_str(), self.author.as_str(), self.quantity)
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::core::command::Command;
    use crate::utils::testing::seeded_state;

    #[tokio::test]
    async fn test_should_run_add_book() {
        let dir = TempDir::new().expect("should create dir");
        let state = seeded_state(&dir, &[]);
        let cmd = AddBookCommand::new(state.catalog_service.clone());

        let res = cmd.execute(AddBookCommandRequest::new("1", "test book", "author", 2))
            .await.expect("should add book");
        assert_eq!("1", res.book.id.as_str());
        assert_eq!(2, res.book.quantity);
        assert_eq!(1, state.catalog_service.find_books(None, None).await.expect("should list").len());
    }

    #[tokio::test]
    async fn test_should_serialize_bare_book() {
        let req: AddBookCommandRequest = serde_json::from_str(r#"{"id":"1","title":"A","author":"X","quantity":1}"#)
            .expect("should parse request");
        let dir = TempDir::new().expect("should create dir");
        let cmd = AddBookCommand::new(seeded_state(&dir, &[]).catalog_service);
        let res = cmd.execute(req).await.expect("should add book");
        let json = serde_json::to_value(&res).expect("should serialize");
        assert_eq!(serde_json::json!({"id": "1", "title": "A", "author": "X", "quantity": 1}), json);
    }

    #[tokio::test]
    async fn test_should_match_fields_without_case() {
        let req = AddBookCommandRequest::from_json(br#"{"ID":"9","Title":"T","AUTHOR":"U","Quantity":3}"#)
            .expect("should parse request");
        assert_eq!("9", req.id.as_str());
        assert_eq!("T", req.title.as_str());
        assert_eq!("U", req.author.as_str());
        assert_eq!(3, req.quantity);
    }

    #[tokio::test]
    async fn test_should_prefer_lowercase_field() {
        let req = AddBookCommandRequest::from_json(br#"{"id":"a","ID":"b","Id":"c","title":null}"#)
            .expect("should parse request");
        assert_eq!("a", req.id.as_str());
        assert_eq!("", req.title.as_str());
        assert_eq!(0, req.quantity);
    }

    #[tokio::test]
    async fn test_should_reject_non_object_payload() {
        assert!(AddBookCommandRequest::from_json(br#"["1","A","X",1]"#).is_err());
        assert!(AddBookCommandRequest::from_json(b"null").is_err());
        assert!(AddBookCommandRequest::from_json(br#"{"Quantity":"three"}"#).is_err());
    }
}
