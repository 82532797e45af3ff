//! Immutable client configuration resolved once at process start.
//!
//! The token and base URL are read from the environment, validated, and then
//! never mutated; the config is shared into the transport behind an `Arc`.

use std::time::Duration;

use url::Url;

use crate::error::{ClientError, ClientResult};

/// Environment variable holding the API token (required).
pub const ENV_API_TOKEN: &str = "TINES_API_TOKEN";
/// Environment variable holding the API base URL (required).
pub const ENV_API_URL: &str = "TINES_API_URL";
/// Environment variable overriding the request timeout in seconds (optional).
pub const ENV_API_TIMEOUT_SECS: &str = "TINES_API_TIMEOUT_SECS";

/// Resolved Tines API configuration.
///
/// Construct with [`TinesConfig::from_env`] at startup; a missing or invalid
/// environment is a fatal [`ClientError::Config`].
#[derive(Clone)]
pub struct TinesConfig {
    api_url: Url,
    api_token: String,
    timeout: Duration,
}

impl TinesConfig {
    /// Default per-request timeout (30 seconds).
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Build a configuration from explicit values.
    ///
    /// The URL must be absolute http(s), e.g.
    /// `https://your-tenant.tines.com/api/v1`.
    pub fn new(
        api_url: &str,
        api_token: impl Into<String>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let api_token = api_token.into();
        if api_token.trim().is_empty() {
            return Err(ClientError::config_error("API token must not be empty"));
        }

        let api_url = Url::parse(api_url.trim()).map_err(|e| {
            ClientError::config_error(format!("Invalid API URL '{}': {}", api_url, e))
        })?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(ClientError::config_error(format!(
                "API URL must use http or https, got '{}'",
                api_url.scheme()
            )));
        }

        Ok(Self {
            api_url,
            api_token,
            timeout,
        })
    }

    /// Load the configuration from the environment.
    ///
    /// `TINES_API_TOKEN` and `TINES_API_URL` are required;
    /// `TINES_API_TIMEOUT_SECS` optionally overrides the default timeout.
    pub fn from_env() -> ClientResult<Self> {
        let token = require_env(ENV_API_TOKEN, "TINES_API_TOKEN=your_api_token_here")?;
        let url = require_env(
            ENV_API_URL,
            "TINES_API_URL=https://your-tenant.tines.com/api/v1",
        )?;

        let timeout_secs = match std::env::var(ENV_API_TIMEOUT_SECS) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ClientError::config_error(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_API_TIMEOUT_SECS, raw
                ))
            })?,
            Err(_) => Self::DEFAULT_TIMEOUT_SECS,
        };

        Self::new(&url, token, Duration::from_secs(timeout_secs))
    }

    /// The configured base URL.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// The bearer token presented on every request.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// Per-request timeout bound.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Absolute endpoint URL for a relative API path.
    ///
    /// Joins with explicit slash handling so a base of `.../api/v1` keeps its
    /// final path segment (plain `Url::join` would replace it).
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

// Token is deliberately redacted from debug output.
impl std::fmt::Debug for TinesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TinesConfig")
            .field("api_url", &self.api_url.as_str())
            .field("api_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn require_env(name: &str, example: &str) -> ClientResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ClientError::config_error(format!(
            "{} environment variable is not set (example: {})",
            name, example
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(ENV_API_TOKEN);
        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_API_TIMEOUT_SECS);
    }

    #[test]
    fn test_new_valid() {
        let config = TinesConfig::new(
            "https://tenant.tines.com/api/v1",
            "secret-token",
            Duration::from_secs(30),
        )
        .unwrap();
        assert_eq!(config.api_url().as_str(), "https://tenant.tines.com/api/v1");
        assert_eq!(config.api_token(), "secret-token");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_new_rejects_empty_token() {
        let err = TinesConfig::new(
            "https://tenant.tines.com/api/v1",
            "  ",
            Duration::from_secs(30),
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let err =
            TinesConfig::new("not a url", "token", Duration::from_secs(30)).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_new_rejects_non_http_scheme() {
        let err = TinesConfig::new("ftp://tenant.tines.com", "token", Duration::from_secs(30))
            .unwrap_err();
        assert!(format!("{err}").contains("http or https"));
    }

    #[test]
    fn test_endpoint_joins_without_clobbering_base_path() {
        let config = TinesConfig::new(
            "https://tenant.tines.com/api/v1/",
            "token",
            Duration::from_secs(30),
        )
        .unwrap();
        assert_eq!(
            config.endpoint("/stories/123"),
            "https://tenant.tines.com/api/v1/stories/123"
        );
        assert_eq!(
            config.endpoint("stories"),
            "https://tenant.tines.com/api/v1/stories"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = TinesConfig::new(
            "https://tenant.tines.com/api/v1",
            "super-secret",
            Duration::from_secs(30),
        )
        .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    #[serial]
    fn test_from_env_missing_token_fails() {
        clear_env();
        std::env::set_var(ENV_API_URL, "https://tenant.tines.com/api/v1");
        let err = TinesConfig::from_env().unwrap_err();
        assert!(format!("{err}").contains(ENV_API_TOKEN));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_url_fails() {
        clear_env();
        std::env::set_var(ENV_API_TOKEN, "token");
        let err = TinesConfig::from_env().unwrap_err();
        assert!(format!("{err}").contains(ENV_API_URL));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_complete() {
        clear_env();
        std::env::set_var(ENV_API_TOKEN, "token");
        std::env::set_var(ENV_API_URL, "https://tenant.tines.com/api/v1");
        std::env::set_var(ENV_API_TIMEOUT_SECS, "10");
        let config = TinesConfig::from_env().unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout_fails() {
        clear_env();
        std::env::set_var(ENV_API_TOKEN, "token");
        std::env::set_var(ENV_API_URL, "https://tenant.tines.com/api/v1");
        std::env::set_var(ENV_API_TIMEOUT_SECS, "soon");
        let err = TinesConfig::from_env().unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_default_timeout() {
        clear_env();
        std::env::set_var(ENV_API_TOKEN, "token");
        std::env::set_var(ENV_API_URL, "https://tenant.tines.com/api/v1");
        let config = TinesConfig::from_env().unwrap();
        assert_eq!(
            config.timeout(),
            Duration::from_secs(TinesConfig::DEFAULT_TIMEOUT_SECS)
        );
        clear_env();
    }
}
