use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, first_query_value, json_to_server_error, ServerError};

pub(crate) async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let req = ListBooksCommandRequest::new(first_query_value(&params, "title"), first_query_value(&params, "author"));
    let res = ListBooksCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

// the body is decoded here rather than by the Json extractor so that bad payloads
// get the same {"Message": ...} shape as every other error
pub(crate) async fn add_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let req = AddBookCommandRequest::from_json(&body).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog_service).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(book_id);
    let res = GetBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest::new(book_id);
    let res = RemoveBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}
