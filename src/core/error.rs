//! Custom error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for document requests
//! - [`StorageError`] - localStorage operations for the theme preference

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}

/// localStorage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available (private mode, sandboxed iframe).
    #[error("localStorage not available")]
    StorageUnavailable,
    /// Failed to save to localStorage.
    #[error("failed to save to localStorage")]
    SaveFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::HttpError(404).to_string(), "HTTP error: 404");
        assert_eq!(
            FetchError::NetworkError("offline".into()).to_string(),
            "Network error: offline"
        );
    }
}
