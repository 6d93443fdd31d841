use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status code and client-facing message for this error.
    ///
    /// Store failures are reported as 422 rather than 500; clients of this
    /// API treat any failed write as "unprocessable".
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad request"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "resource not found"),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
            AppError::Validation(_) | AppError::Database(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable")
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => tracing::error!("Database error: {:?}", e),
            AppError::Internal(ref msg) => tracing::error!("Internal error: {}", msg),
            ref other => tracing::warn!("Request rejected: {}", other),
        }

        let (status, message) = self.status_and_message();
        let body = Json(ErrorResponse::new(status, message));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_failure_maps_to_unprocessable() {
        let err = AppError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(
            err.status_and_message(),
            (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable")
        );
    }

    #[test]
    fn test_client_errors_keep_distinct_statuses() {
        assert_eq!(
            AppError::BadRequest("page".into()).status_and_message().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("question".into()).status_and_message().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("answer".into()).status_and_message().0,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Internal("bug".into()).status_and_message().0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
