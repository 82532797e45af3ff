//! HTTP transport seam.
//!
//! [`ApiTransport`] is the trait boundary between the typed client surface and
//! the wire; [`HttpTransport`] is the reqwest implementation used in
//! production. Tests substitute a recording mock behind the same trait.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::config::TinesConfig;
use crate::error::{ClientError, ClientResult};

/// One authenticated request/response exchange with the Tines API.
///
/// Implementations hold no per-call state: every invocation is independent,
/// bounded by the configured timeout, and never retried.
#[async_trait]
pub trait ApiTransport: Send + Sync + std::fmt::Debug {
    /// Issue a single request against a relative API path.
    ///
    /// Returns the parsed JSON body on 2xx (`Value::Null` for empty 204
    /// responses), [`ClientError::Api`] on non-2xx, [`ClientError::Network`]
    /// on connection/timeout failures, and [`ClientError::Decode`] when a 2xx
    /// body is not valid JSON.
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> ClientResult<Value>;
}

/// reqwest-backed transport sharing one connection pool and timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    config: Arc<TinesConfig>,
}

impl HttpTransport {
    /// Build the transport from an immutable configuration.
    pub fn new(config: Arc<TinesConfig>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> ClientResult<Value> {
        let url = self.config.endpoint(path);
        debug!(%method, %url, has_body = body.is_some(), "Tines API request");

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(self.config.api_token());
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), %url, "Tines API response");

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_u16(),
                extract_error_message(&text),
            ));
        }

        if text.trim().is_empty() {
            // 204 No Content and friends
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Pull a human-readable message out of a remote error body.
///
/// The API usually returns `{"message": …}` or `{"error": …}`; anything else
/// is surfaced verbatim.
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no error body".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_extract_error_message_from_message_field() {
        assert_eq!(
            extract_error_message(r#"{"message":"Story not found"}"#),
            "Story not found"
        );
    }

    #[test]
    fn test_extract_error_message_from_error_field() {
        assert_eq!(
            extract_error_message(r#"{"error":"Unauthorized"}"#),
            "Unauthorized"
        );
    }

    #[test]
    fn test_extract_error_message_prefers_message_over_error() {
        assert_eq!(
            extract_error_message(r#"{"message":"first","error":"second"}"#),
            "first"
        );
    }

    #[test]
    fn test_extract_error_message_falls_back_to_raw_body() {
        assert_eq!(extract_error_message("<html>502</html>"), "<html>502</html>");
    }

    #[test]
    fn test_extract_error_message_empty_body() {
        assert_eq!(extract_error_message("   "), "no error body");
    }

    #[test]
    fn test_http_transport_construction() {
        let config = Arc::new(
            TinesConfig::new(
                "https://tenant.tines.com/api/v1",
                "token",
                Duration::from_secs(5),
            )
            .unwrap(),
        );
        let transport = HttpTransport::new(config).unwrap();
        assert!(format!("{transport:?}").contains("HttpTransport"));
    }
}
