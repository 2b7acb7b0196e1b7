//! Data models and DTOs (Data Transfer Objects) for the URL shortener.
//!
//! Contains structures for API request/response types and service results.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// API Request DTOs
// ============================================================================

/// Request body for creating a new short URL
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten (must be a valid absolute URL)
    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(max = 2048, message = "URL is too long (max 2048 characters)"))]
    pub url: String,
}

// ============================================================================
// API Response DTOs
// ============================================================================

/// Response for a successfully created short URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenResponse {
    /// The allocated short code (e.g., "aB3xZ9")
    pub short_code: String,
    /// Fully-qualified short link (base URL + short code)
    pub short_url: String,
    /// The normalized original URL the code resolves to
    pub original_url: String,
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure
    pub detail: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

// ============================================================================
// Service Results
// ============================================================================

/// A freshly stored short-code mapping, returned by the shorten service
#[derive(Debug, Clone)]
pub struct CreatedMapping {
    /// The short code now present in the store
    pub short_code: String,
    /// The normalized target URL it maps to
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_URL_LENGTH;

    #[test]
    fn test_shorten_request_accepts_valid_url() {
        let request = ShortenRequest {
            url: "https://example.com/page".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_shorten_request_rejects_malformed_url() {
        let request = ShortenRequest {
            url: "not-a-url".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_shorten_request_rejects_oversized_url() {
        let request = ShortenRequest {
            url: format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH)),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_error_response_serializes_detail_key() {
        let body = serde_json::to_value(ErrorResponse::new("Short code not found")).unwrap();
        assert_eq!(body["detail"], "Short code not found");
    }
}
