//! Error handling - the single mapping from failures to HTTP responses.
//!
//! Client errors carry a small JSON body; not-found and server errors are
//! returned with an empty body so no internal detail leaks.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::error::{DomainError, RepoError};
use blog_shared::ErrorResponse;
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    BadRequest(String),
    Validation { field: &'static str, message: String },
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not found"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Validation { message, .. } => write!(f, "{}", message),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound().finish(),
            AppError::BadRequest(detail) => {
                HttpResponse::BadRequest().json(ErrorResponse::new(detail.as_str()))
            }
            AppError::Validation { field, message } => HttpResponse::BadRequest()
                .json(ErrorResponse::new(message.as_str()).with_field(*field)),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(e) => AppError::Validation {
                field: e.field,
                message: e.to_string(),
            },
            DomainError::InvalidQuery(msg) => AppError::BadRequest(msg),
            DomainError::Repository(e) => e.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => {
                AppError::Internal(format!("Database connection error: {}", msg))
            }
            RepoError::Query(msg) => AppError::Internal(format!("Database query error: {}", msg)),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::ValidationError;

    #[test]
    fn test_status_mapping() {
        let validation: AppError = DomainError::from(ValidationError::required("title")).into();
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        let query: AppError = DomainError::InvalidQuery("bad sort".to_string()).into();
        assert_eq!(query.status_code(), StatusCode::BAD_REQUEST);

        let repo: AppError =
            DomainError::Repository(RepoError::Query("syntax error".to_string())).into();
        assert_eq!(repo.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_has_empty_body() {
        let err: AppError = RepoError::Connection("refused at 10.0.0.5".to_string()).into();
        let response = err.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get("content-type").is_none());
    }
}
