/*
[INPUT]:  Error sources (validation, HTTP, status codes, decoding)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the lnurl.it client
#[derive(Error, Debug)]
pub enum LnurlError {
    /// Input failed local validation; no request was sent
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response received with a status code outside the accepted set
    #[error("unexpected status code {code}")]
    UnexpectedStatus { code: u16 },

    /// Response body could not be decoded
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl LnurlError {
    /// Check if the error was raised locally, before any network call
    pub fn is_validation(&self) -> bool {
        matches!(self, LnurlError::Validation { .. })
    }

    /// Check if the error came from the transport rather than the API
    pub fn is_transport(&self) -> bool {
        matches!(self, LnurlError::Http(_) | LnurlError::UrlParse(_))
    }

    /// Create a validation error with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        LnurlError::Validation {
            message: message.into(),
        }
    }

    /// Create an unexpected-status error from a response status
    pub fn unexpected_status(status: StatusCode) -> Self {
        LnurlError::UnexpectedStatus {
            code: status.as_u16(),
        }
    }
}

/// Result type alias for lnurl.it operations
pub type Result<T> = std::result::Result<T, LnurlError>;
