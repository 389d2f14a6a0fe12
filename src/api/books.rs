//! Book (catalog) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ResponseStatus},
    models::book::{Book, BookPayload, BookQuery, BookShort},
};

use super::{AppJson, ListQuery};

/// Acknowledgment with a message and no data
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: ResponseStatus,
    pub message: String,
}

impl MessageResponse {
    fn success(message: &str) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.to_string(),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBook {
    pub book_id: String,
}

#[derive(Serialize, ToSchema)]
pub struct CreatedBookResponse {
    pub status: ResponseStatus,
    pub message: String,
    pub data: CreatedBook,
}

#[derive(Serialize, ToSchema)]
pub struct BookList {
    pub books: Vec<BookShort>,
}

#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub status: ResponseStatus,
    pub data: BookList,
}

#[derive(Serialize, ToSchema)]
pub struct BookDetail {
    pub book: Book,
}

#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub status: ResponseStatus,
    pub data: BookDetail,
}

/// Add a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book added", body = CreatedBookResponse),
        (status = 400, description = "Missing name or readPage above pageCount", body = crate::error::ErrorResponse),
        (status = 500, description = "Book could not be stored", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AppJson(payload): AppJson<BookPayload>,
) -> AppResult<(StatusCode, Json<CreatedBookResponse>)> {
    let book_id = state.services.catalog.create_book(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedBookResponse {
            status: ResponseStatus::Success,
            message: "Book added successfully".to_string(),
            data: CreatedBook { book_id },
        }),
    ))
}

/// List books, optionally filtered
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Books matching the first filter given", body = BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    ListQuery(query): ListQuery,
) -> AppResult<Json<BookListResponse>> {
    let books = state.services.catalog.list_books(&query).await?;
    Ok(Json(BookListResponse {
        status: ResponseStatus::Success,
        data: BookList { books },
    }))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.get_book(&book_id).await?;
    Ok(Json(BookResponse {
        status: ResponseStatus::Success,
        data: BookDetail { book },
    }))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = String, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Missing name or readPage above pageCount", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
    AppJson(payload): AppJson<BookPayload>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.update_book(&book_id, payload).await?;
    Ok(Json(MessageResponse::success("Book updated successfully")))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.delete_book(&book_id).await?;
    Ok(Json(MessageResponse::success("Book deleted successfully")))
}
