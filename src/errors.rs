//! Custom error types for the URL shortener application.
//!
//! Implements proper error handling with automatic HTTP response conversion.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::models::ErrorResponse;

/// Application-level errors
#[derive(Debug)]
pub enum AppError {
    /// URL or short code was not found
    NotFound(String),
    /// Invalid input data
    ValidationError(String),
    /// Generator could not allocate a free short code within the attempt budget
    CodeSpaceExhausted(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::CodeSpaceExhausted(msg) => write!(f, "Code space exhausted: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// ============================================================================
// Constructor Methods
// ============================================================================

impl AppError {
    /// Create a NotFound error for an unknown short code
    ///
    /// Uses the fixed message the redirect endpoint is contracted to return.
    pub fn short_code_not_found() -> Self {
        AppError::NotFound("Short code not found".to_string())
    }

    /// Create a ValidationError with a message
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError(message.into())
    }

    /// Create a CodeSpaceExhausted error after a bounded allocation loop gave up
    pub fn code_space_exhausted(attempts: u32) -> Self {
        AppError::CodeSpaceExhausted(format!(
            "Failed to allocate a unique short code after {} attempts",
            attempts
        ))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::CodeSpaceExhausted(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::ValidationError(msg) => msg.clone(),
            AppError::CodeSpaceExhausted(msg) => msg.clone(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::CodeSpaceExhausted("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_display() {
        let err = AppError::NotFound("Short code not found".into());
        assert!(err.to_string().contains("Not found"));

        let err = AppError::validation("bad url");
        assert!(err.to_string().contains("bad url"));
    }

    #[test]
    fn test_all_error_variants_have_responses() {
        // Ensure all error variants produce valid HTTP responses
        let errors = vec![
            AppError::NotFound("test".into()),
            AppError::ValidationError("test".into()),
            AppError::CodeSpaceExhausted("test".into()),
        ];

        for err in errors {
            let response = err.error_response();
            assert!(response.status().is_client_error() || response.status().is_server_error());
        }
    }

    #[test]
    fn test_constructor_methods() {
        assert!(matches!(
            AppError::short_code_not_found(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::validation("test"),
            AppError::ValidationError(_)
        ));
        assert!(matches!(
            AppError::code_space_exhausted(10),
            AppError::CodeSpaceExhausted(_)
        ));
    }

    #[test]
    fn test_constructor_messages() {
        let err = AppError::short_code_not_found();
        assert_eq!(err.to_string(), "Not found: Short code not found");

        let err = AppError::code_space_exhausted(10);
        assert!(err.to_string().contains("10 attempts"));
    }
}
