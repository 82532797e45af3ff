//! Shared helper functions for MCP tool implementations.

use serde_json::Value;
use tines_client::ClientError;

/// Build a structured error JSON string that LLMs can parse.
pub fn error_json(error_code: &str, message: &str) -> String {
    serde_json::json!({
        "error": error_code,
        "message": message,
    })
    .to_string()
}

/// Convert a client error into a tool-level error payload.
///
/// API errors keep their original HTTP status code so the calling assistant
/// can distinguish not-found from auth or server failures.
pub fn client_error_json(err: &ClientError) -> String {
    match err {
        ClientError::Api { status, message } => serde_json::json!({
            "error": err.code(),
            "status": status,
            "message": message,
        })
        .to_string(),
        _ => error_json(err.code(), &err.to_string()),
    }
}

/// Parse an optional enum-valued string parameter.
pub fn parse_opt<T>(value: Option<&str>) -> Result<Option<T>, ClientError>
where
    T: std::str::FromStr<Err = ClientError>,
{
    value.map(str::parse).transpose()
}

/// Pretty-print a JSON value for tool output.
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| error_json("serialization_error", &e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_json_shape() {
        let payload: Value = serde_json::from_str(&error_json("validation_error", "bad")).unwrap();
        assert_eq!(payload["error"], "validation_error");
        assert_eq!(payload["message"], "bad");
    }

    #[test]
    fn test_client_error_json_keeps_api_status() {
        let err = ClientError::api_error(422, "Unprocessable");
        let payload: Value = serde_json::from_str(&client_error_json(&err)).unwrap();
        assert_eq!(payload["error"], "api_error");
        assert_eq!(payload["status"], 422);
        assert_eq!(payload["message"], "Unprocessable");
    }

    #[test]
    fn test_client_error_json_validation() {
        let err = ClientError::validation_error("missing story_id");
        let payload: Value = serde_json::from_str(&client_error_json(&err)).unwrap();
        assert_eq!(payload["error"], "validation_error");
        assert!(payload.get("status").is_none());
    }

    #[test]
    fn test_parse_opt() {
        use tines_client::types::StoryMode;
        assert_eq!(parse_opt::<StoryMode>(None).unwrap(), None);
        assert_eq!(
            parse_opt::<StoryMode>(Some("test")).unwrap(),
            Some(StoryMode::Test)
        );
        assert!(parse_opt::<StoryMode>(Some("bogus")).is_err());
    }

    #[test]
    fn test_client_error_json_timeout_is_network() {
        let err = ClientError::Timeout {
            operation: "GET stories".into(),
        };
        let payload: Value = serde_json::from_str(&client_error_json(&err)).unwrap();
        assert_eq!(payload["error"], "network_error");
    }
}
