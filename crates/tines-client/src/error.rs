//! # Client Error Types
//!
//! Unified error handling for tines-client operations.

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error taxonomy for client operations.
///
/// Every runtime failure is surfaced to the caller exactly once; nothing is
/// retried. Only [`ClientError::Config`] is fatal, and only at startup.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Timeout waiting for operation: {operation}")]
    Timeout { operation: String },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Validation(String),
}

impl ClientError {
    /// Create an API error from an HTTP response
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error for a malformed or missing tool argument
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Stable snake_case code for tool-level error payloads.
    ///
    /// Timeouts are classified as network failures: both surface the same
    /// way to the calling assistant.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Config(_) => "config_error",
            ClientError::Network(_) | ClientError::Timeout { .. } => "network_error",
            ClientError::Api { .. } => "api_error",
            ClientError::Decode(_) => "decode_error",
            ClientError::Validation(_) => "validation_error",
        }
    }

    /// Check if error is recoverable (worth retrying by the caller)
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClientError::Network(e) => e.is_timeout() || e.is_connect(),
            ClientError::Timeout { .. } => true,
            ClientError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Constructor tests ----

    #[test]
    fn test_api_error_constructor() {
        let err = ClientError::api_error(404, "not found");
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            _ => panic!("Expected Api variant"),
        }
    }

    #[test]
    fn test_config_error_constructor() {
        let err = ClientError::config_error("bad config");
        match err {
            ClientError::Config(msg) => assert_eq!(msg, "bad config"),
            _ => panic!("Expected Config variant"),
        }
    }

    #[test]
    fn test_validation_error_constructor() {
        let err = ClientError::validation_error("missing story_id");
        match err {
            ClientError::Validation(msg) => assert_eq!(msg, "missing story_id"),
            _ => panic!("Expected Validation variant"),
        }
    }

    // ---- code tests ----

    #[test]
    fn test_code_api_error() {
        assert_eq!(ClientError::api_error(500, "boom").code(), "api_error");
    }

    #[test]
    fn test_code_config_error() {
        assert_eq!(ClientError::config_error("bad").code(), "config_error");
    }

    #[test]
    fn test_code_validation_error() {
        assert_eq!(
            ClientError::validation_error("bad").code(),
            "validation_error"
        );
    }

    #[test]
    fn test_code_timeout_maps_to_network() {
        let err = ClientError::Timeout {
            operation: "get_story".to_string(),
        };
        assert_eq!(err.code(), "network_error");
    }

    #[test]
    fn test_code_decode_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        assert_eq!(ClientError::Decode(json_err).code(), "decode_error");
    }

    // ---- is_recoverable tests ----

    #[test]
    fn test_timeout_is_recoverable() {
        let err = ClientError::Timeout {
            operation: "list_stories".to_string(),
        };
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_api_error_500_is_recoverable() {
        assert!(ClientError::api_error(500, "internal server error").is_recoverable());
    }

    #[test]
    fn test_api_error_502_is_recoverable() {
        assert!(ClientError::api_error(502, "bad gateway").is_recoverable());
    }

    #[test]
    fn test_api_error_400_not_recoverable() {
        assert!(!ClientError::api_error(400, "bad request").is_recoverable());
    }

    #[test]
    fn test_api_error_404_not_recoverable() {
        assert!(!ClientError::api_error(404, "not found").is_recoverable());
    }

    #[test]
    fn test_config_error_not_recoverable() {
        assert!(!ClientError::config_error("bad").is_recoverable());
    }

    #[test]
    fn test_validation_error_not_recoverable() {
        assert!(!ClientError::validation_error("bad input").is_recoverable());
    }

    #[test]
    fn test_decode_error_not_recoverable() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        assert!(!ClientError::Decode(json_err).is_recoverable());
    }

    // ---- Display tests ----

    #[test]
    fn test_display_api_error() {
        let err = ClientError::api_error(503, "service down");
        assert_eq!(format!("{err}"), "API error: 503 - service down");
    }

    #[test]
    fn test_display_config_error() {
        let err = ClientError::config_error("missing TINES_API_TOKEN");
        assert_eq!(
            format!("{err}"),
            "Configuration error: missing TINES_API_TOKEN"
        );
    }

    #[test]
    fn test_display_timeout() {
        let err = ClientError::Timeout {
            operation: "get_story".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Timeout waiting for operation: get_story"
        );
    }

    #[test]
    fn test_display_validation_error() {
        let err = ClientError::validation_error("empty content");
        assert_eq!(format!("{err}"), "Invalid input: empty content");
    }

    // ---- From impls ----

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad}}").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_debug_impl() {
        let err = ClientError::api_error(500, "boom");
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("Api"));
    }
}
