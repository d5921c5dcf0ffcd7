use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::checkout::command::checkout_book_cmd::CheckoutBookCommandRequest;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ReturnBookCommand {
    checkout_service: Arc<dyn CheckoutService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(checkout_service: Arc<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

// returns are addressed the same way as checkouts
pub(crate) type ReturnBookCommandRequest = CheckoutBookCommandRequest;

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct ReturnBookCommandResponse {
    book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let book_id = req.required_book_id()?;
        self.checkout_service.returned(book_id.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
