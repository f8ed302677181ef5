//! Error handling middleware - maps service failures onto the
//! `{"error": "<message>"}` envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use finlearn_shared::ErrorResponse;
use std::fmt;

use finlearn_core::error::{DomainError, StoreError};

/// Application-level error type rendered as an error envelope.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Unavailable(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Unavailable(msg) => write!(f, "Unavailable: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) | AppError::Unauthorized(msg) => {
                msg.clone()
            }
            AppError::Unavailable(msg) => {
                tracing::error!("Store unavailable: {}", msg);
                "Service temporarily unavailable".to_string()
            }
            AppError::Internal(msg) => {
                // Log internal errors, keep the body generic
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(message))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Duplicate(msg) => AppError::BadRequest(msg),
            DomainError::InvalidCredentials => {
                AppError::Unauthorized("Invalid credentials".to_string())
            }
            DomainError::Credential(e) => AppError::Internal(e.to_string()),
            DomainError::Store(e) => e.into(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => AppError::Unavailable(msg),
            StoreError::Query(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_maps_to_bad_request() {
        let err: AppError = DomainError::Duplicate("Email already subscribed".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_faults_map_to_server_errors() {
        let unavailable: AppError = StoreError::Unavailable("pool exhausted".to_string()).into();
        assert_eq!(unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let query: AppError = StoreError::Query("syntax error".to_string()).into();
        assert_eq!(query.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_credentials_maps_to_unauthorized() {
        let err: AppError = DomainError::InvalidCredentials.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
