//! API Error Types
//!
//! Error taxonomy for the HTTP client layer. Transport failures are never
//! recovered here; they pass through to the caller unchanged.

use thiserror::Error;

/// Errors surfaced by API calls
#[derive(Error, Debug)]
pub enum ApiError {
    /// Failure raised by the HTTP client, passed through unchanged
    #[error(transparent)]
    Http(#[from] gloo_net::Error),

    /// Non-success response carrying the backend's message
    #[error("{message}")]
    Server { status: u16, message: String },
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_passes_through_unchanged() {
        let transport = gloo_net::Error::GlooError("request timed out".to_string());
        let original = transport.to_string();

        let err = ApiError::from(transport);

        assert!(matches!(
            err,
            ApiError::Http(gloo_net::Error::GlooError(_))
        ));
        assert_eq!(err.to_string(), original);
    }

    #[test]
    fn test_server_error_carries_backend_message() {
        let err = ApiError::Server {
            status: 401,
            message: "Login failed: bad credentials".to_string(),
        };

        assert_eq!(err.to_string(), "Login failed: bad credentials");
    }
}
