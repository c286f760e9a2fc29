// ABOUTME: API error type and HTTP response mapping
// ABOUTME: Converts service errors into status codes with {"error": message} bodies

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use todos::query::QueryError;
use todos::storage::StorageError;

/// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Todo not found")]
    NotFound,

    #[error("Page {page} is not available. Total pages: {total_pages}")]
    PageOutOfRange { page: i64, total_pages: i64 },

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("Endpoint not found")]
    RouteNotFound,
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::PageOutOfRange { page, total_pages } => {
                ApiError::PageOutOfRange { page, total_pages }
            }
            QueryError::Storage(err) => ApiError::Storage(err),
        }
    }
}

/// Wire shape for every error response
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::PageOutOfRange { .. } => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if let ApiError::Storage(err) = &self {
            error!(storage_error = %err, "Storage error while handling request");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
