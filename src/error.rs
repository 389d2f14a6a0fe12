//! Error types for the bookshelf server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Response status discriminator shared by every payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// The operation completed
    Success,
    /// The caller sent something the server refuses to act on
    Fail,
    /// The server could not complete an otherwise valid request
    Error,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// `detail` is logged, only `public` reaches the client
    #[error("{public}: {detail}")]
    Internal { public: &'static str, detail: String },
}

impl AppError {
    /// Internal failure with the generic public message
    pub fn internal(detail: impl Into<String>) -> Self {
        AppError::Internal {
            public: "Internal server error",
            detail: detail.into(),
        }
    }

    /// HTTP status and payload discriminator for this error
    pub fn status(&self) -> (StatusCode, ResponseStatus) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ResponseStatus::Fail),
            AppError::Validation(_) | AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, ResponseStatus::Fail)
            }
            AppError::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, ResponseStatus::Error)
            }
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, discriminator) = self.status();
        let message = match self {
            AppError::NotFound(msg) | AppError::Validation(msg) | AppError::BadRequest(msg) => msg,
            AppError::Internal { public, detail } => {
                tracing::error!("Internal error: {}", detail);
                public.to_string()
            }
        };

        let body = Json(ErrorResponse {
            status: discriminator,
            message,
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
