use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub(crate) const MISSING_BOOK_ID: &str = "Missing id query parameter";

pub(crate) struct CheckoutBookCommand {
    checkout_service: Arc<dyn CheckoutService>,
}

impl CheckoutBookCommand {
    pub(crate) fn new(checkout_service: Arc<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

// Built from the `id` query parameter; an empty `id=` is still a value.
#[derive(Debug)]
pub(crate) struct CheckoutBookCommandRequest {
    book_id: Option<String>,
}

impl CheckoutBookCommandRequest {
    pub fn new(book_id: Option<String>) -> Self {
        Self {
            book_id,
        }
    }

    pub(crate) fn required_book_id(self) -> Result<String, CommandError> {
        self.book_id.ok_or_else(|| CommandError::Validation {
            message: MISSING_BOOK_ID.to_string(),
            reason_code: Some("400".to_string()),
        })
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct CheckoutBookCommandResponse {
    book: BookDto,
}

impl CheckoutBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    async fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        let book_id = req.required_book_id()?;
        self.checkout_service.checkout(book_id.as_str())
            .await.map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use crate::books::domain::model::BookEntity;
    use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::utils::testing::seeded_state;

    #[tokio::test]
    async fn test_should_run_checkout_book() {
        let dir = TempDir::new().expect("should create dir");
        let state = seeded_state(&dir, &[BookEntity::new("1", "test book", "author", 3)]);
        let checkout_cmd = CheckoutBookCommand::new(state.checkout_service);

        let res = checkout_cmd.execute(CheckoutBookCommandRequest::new(Some("1".to_string())))
            .await.expect("should checkout book");
        assert_eq!("1", res.book.id.as_str());
        assert_eq!(2, res.book.quantity);
    }

    #[tokio::test]
    async fn test_should_require_book_id() {
        let dir = TempDir::new().expect("should create dir");
        let checkout_cmd = CheckoutBookCommand::new(seeded_state(&dir, &[]).checkout_service);
        let err = checkout_cmd.execute(CheckoutBookCommandRequest::new(None)).await.expect_err("should fail");
        assert!(matches!(err, CommandError::Validation{ .. }));
        assert_eq!("Missing id query parameter", err.message());
    }

    #[tokio::test]
    async fn test_should_treat_empty_id_as_lookup() {
        let dir = TempDir::new().expect("should create dir");
        let checkout_cmd = CheckoutBookCommand::new(seeded_state(&dir, &[]).checkout_service);
        let res = checkout_cmd.execute(CheckoutBookCommandRequest::new(Some("".to_string()))).await;
        assert!(matches!(res, Err(CommandError::NotFound{ .. })));
    }
}
