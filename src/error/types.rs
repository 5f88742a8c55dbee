//! Core error type and message extraction.

use serde_json::Value;
use thiserror::Error;

use crate::defaults::UNKNOWN_ERROR_MESSAGE;

/// Boxed cause carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The single error type surfaced by this crate.
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// The endpoint name is not present in the registry.
    #[error("Unknown endpoint \"{0}\"")]
    UnknownEndpoint(String),

    /// A `{placeholder}` in the path template had no matching parameter.
    #[error("Missing path parameter \"{0}\"")]
    MissingPathParameter(String),

    /// A parameter had a JSON type that cannot be used where it was placed.
    #[error("Invalid type for parameter \"{key}\": expected a scalar, got {actual}")]
    InvalidParameterType { key: String, actual: &'static str },

    /// The request body could not be encoded.
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// A file referenced by a multipart field could not be read.
    #[error("Failed to read \"{path}\": {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid client configuration (bad header names, proxy URL, ...).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The server answered with a status code >= 400.
    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        /// Raw response body as received.
        body: String,
    },

    /// The transport failed before a response was available.
    #[error("Transport error: {message}")]
    TransportError {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// A streamed `data:` payload was not valid JSON.
    #[error("Stream decode error: {0}")]
    StreamDecodeError(String),
}

impl OpenAiError {
    /// Build an API error from a raw response body and HTTP status.
    pub fn api(raw: Option<&str>, code: u16) -> Self {
        Self::ApiError {
            code,
            message: extract_error_message(raw),
            body: raw.unwrap_or_default().to_string(),
        }
    }

    /// Build a transport error, keeping the underlying cause.
    pub fn transport(raw: Option<&str>, code: u16, source: Option<BoxError>) -> Self {
        Self::TransportError {
            code,
            message: extract_error_message(raw),
            source,
        }
    }

    pub fn invalid_type(key: impl Into<String>, value: &Value) -> Self {
        Self::InvalidParameterType {
            key: key.into(),
            actual: json_type_name(value),
        }
    }

    /// Human-readable message without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            Self::ApiError { message, .. } | Self::TransportError { message, .. } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }

    /// HTTP status for API errors, the propagated code for transport errors,
    /// `0` otherwise.
    pub fn code(&self) -> u16 {
        match self {
            Self::ApiError { code, .. } | Self::TransportError { code, .. } => *code,
            _ => 0,
        }
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }

    /// True when the error was raised while building the request, before any
    /// network I/O took place.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            Self::UnknownEndpoint(_)
                | Self::MissingPathParameter(_)
                | Self::InvalidParameterType { .. }
                | Self::EncodingError(_)
                | Self::FileReadError { .. }
                | Self::ConfigurationError(_)
        )
    }
}

/// Pick the message shown to callers from a raw error payload.
///
/// An absent or empty payload yields the default text. A JSON object with a
/// string at `error.message` yields that string. Anything else is returned
/// verbatim.
pub fn extract_error_message(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return UNKNOWN_ERROR_MESSAGE.to_string(),
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(decoded) => decoded
            .get("error")
            .and_then(|error| error.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

/// JSON type name used in `InvalidParameterType` errors.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_or_missing_message_uses_default_text() {
        assert_eq!(extract_error_message(None), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(extract_error_message(Some("")), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(OpenAiError::api(None, 500).message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn nested_error_message_is_extracted() {
        let raw = json!({
            "error": {
                "message": "Invalid API key provided.",
                "type": "authentication_error",
                "param": null,
                "code": "invalid_api_key"
            }
        })
        .to_string();
        assert_eq!(extract_error_message(Some(&raw)), "Invalid API key provided.");
    }

    #[test]
    fn non_json_text_is_kept_verbatim() {
        assert_eq!(extract_error_message(Some("not json")), "not json");
    }

    #[test]
    fn json_without_error_message_is_kept_verbatim() {
        let raw = json!({"error": {"type": "invalid_request_error", "code": "invalid_model"}})
            .to_string();
        assert_eq!(extract_error_message(Some(&raw)), raw);

        let missing_error_key = json!({"message": "A general error occurred."}).to_string();
        assert_eq!(
            extract_error_message(Some(&missing_error_key)),
            missing_error_key
        );
    }

    #[test]
    fn non_string_error_message_is_kept_verbatim() {
        let raw = json!({"error": {"message": ["This", "is", "an", "array"]}}).to_string();
        assert_eq!(extract_error_message(Some(&raw)), raw);
    }

    #[test]
    fn malformed_json_is_kept_verbatim() {
        let raw = r#"{"error": {"message": "Invalid JSON",}"#;
        assert_eq!(extract_error_message(Some(raw)), raw);
    }

    #[test]
    fn json_scalar_is_kept_verbatim() {
        assert_eq!(extract_error_message(Some("42")), "42");
    }

    #[test]
    fn api_error_carries_code_and_raw_body() {
        let err = OpenAiError::api(Some(r#"{"error":{"message":"boom"}}"#), 400);
        match &err {
            OpenAiError::ApiError { code, message, body } => {
                assert_eq!(*code, 400);
                assert_eq!(message, "boom");
                assert!(body.contains("boom"));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
        assert!(err.is_api_error());
        assert!(!err.is_client_side());
    }

    #[test]
    fn transport_error_keeps_cause() {
        use std::error::Error as _;

        let cause: BoxError = Box::new(std::io::Error::other("connection reset"));
        let err = OpenAiError::transport(Some("connection reset"), 0, Some(cause));
        assert_eq!(err.code(), 0);
        assert_eq!(err.message(), "connection reset");
        assert!(err.source().is_some());
    }

    #[test]
    fn client_side_errors_report_zero_code() {
        let err = OpenAiError::invalid_type("id", &json!([1, 2]));
        assert_eq!(err.code(), 0);
        assert!(err.is_client_side());
        assert!(err.message().contains("array"));
    }
}
