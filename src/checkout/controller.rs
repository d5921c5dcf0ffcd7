use axum::{
    extract::{Query, State},
    response::Json,
};
use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest, CheckoutBookCommandResponse};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, first_query_value, ServerError};

pub(crate) async fn checkout_book(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>) -> Result<Json<CheckoutBookCommandResponse>, ServerError> {
    let req = CheckoutBookCommandRequest::new(first_query_value(&params, "id").map(str::to_string));
    let res = CheckoutBookCommand::new(state.checkout_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn return_book(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>) -> Result<Json<ReturnBookCommandResponse>, ServerError> {
    let req = ReturnBookCommandRequest::new(first_query_value(&params, "id").map(str::to_string));
    let res = ReturnBookCommand::new(state.checkout_service).execute(req).await?;
    Ok(Json(res))
}
