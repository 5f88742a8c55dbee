//! HTTP Headers Utility
//!
//! Builds the header set of a request: credentials first, then the caller's
//! custom headers, then the content type chosen by the body builder.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::error::OpenAiError;
use crate::types::Params;

pub const ORGANIZATION_HEADER: &str = "openai-organization";
pub const PROJECT_HEADER: &str = "openai-project";

/// HTTP header builder for API requests
#[derive(Debug, Default)]
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add Bearer token authorization
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self, OpenAiError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            OpenAiError::ConfigurationError(format!("Invalid API key format: {e}"))
        })?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Add a header unless the value is absent or empty.
    pub fn with_optional_header(self, name: &str, value: Option<&str>) -> Result<Self, OpenAiError> {
        match value {
            Some(value) if !value.is_empty() => self.with_header(name, value),
            _ => Ok(self),
        }
    }

    /// Add a custom header
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, OpenAiError> {
        let (name, value) = parse_header(name, value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Apply caller-supplied headers. They replace defaults of the same name,
    /// except `Content-Type`, which belongs to the body encoding.
    pub fn with_custom_headers(mut self, custom: &[(String, String)]) -> Result<Self, OpenAiError> {
        for (name, value) in custom {
            let (name, value) = parse_header(name, value)?;
            if name == CONTENT_TYPE {
                tracing::debug!("Ignoring custom Content-Type header; the body encoding sets it");
                continue;
            }
            self.headers.insert(name, value);
        }
        Ok(self)
    }

    pub fn with_content_type(mut self, content_type: &str) -> Result<Self, OpenAiError> {
        let value = HeaderValue::from_str(content_type).map_err(|e| {
            OpenAiError::ConfigurationError(format!("Invalid content type '{content_type}': {e}"))
        })?;
        self.headers.insert(CONTENT_TYPE, value);
        Ok(self)
    }

    pub fn with_event_stream_accept(mut self) -> Self {
        self.headers
            .insert(ACCEPT, HeaderValue::from_static("text/event-stream"));
        self
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), OpenAiError> {
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
        OpenAiError::ConfigurationError(format!("Invalid header name '{name}': {e}"))
    })?;
    let header_value = HeaderValue::from_str(value).map_err(|e| {
        OpenAiError::ConfigurationError(format!("Invalid header value for '{name}': {e}"))
    })?;
    Ok((header_name, header_value))
}

/// Remove the custom-headers entry from `options` and return its pairs.
///
/// The entry must be an object of strings.
pub fn take_custom_headers(
    options: &mut Params,
    key: &str,
) -> Result<Vec<(String, String)>, OpenAiError> {
    let Some(raw) = options.remove(key) else {
        return Ok(Vec::new());
    };
    let Value::Object(map) = raw else {
        return Err(OpenAiError::invalid_type(key, &raw));
    };
    map.into_iter()
        .map(|(name, value)| match value {
            Value::String(value) => Ok((name, value)),
            other => Err(OpenAiError::invalid_type(format!("{key}.{name}"), &other)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_auth_and_optional_headers() {
        let headers = HttpHeaderBuilder::new()
            .with_bearer_auth("sk-test")
            .unwrap()
            .with_optional_header(ORGANIZATION_HEADER, Some("org-1"))
            .unwrap()
            .with_optional_header(PROJECT_HEADER, Some(""))
            .unwrap()
            .build();

        assert_eq!(headers[AUTHORIZATION], "Bearer sk-test");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[ORGANIZATION_HEADER], "org-1");
        assert!(!headers.contains_key(PROJECT_HEADER));
    }

    #[test]
    fn custom_headers_override_but_not_content_type() {
        let custom = vec![
            ("OpenAI-Beta".to_string(), "assistants=v2".to_string()),
            ("OpenAI-Organization".to_string(), "org-override".to_string()),
            ("Content-Type".to_string(), "text/plain".to_string()),
        ];
        let headers = HttpHeaderBuilder::new()
            .with_optional_header(ORGANIZATION_HEADER, Some("org-1"))
            .unwrap()
            .with_custom_headers(&custom)
            .unwrap()
            .with_content_type("application/json")
            .unwrap()
            .build();

        assert_eq!(headers["openai-beta"], "assistants=v2");
        assert_eq!(headers[ORGANIZATION_HEADER], "org-override");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let err = HttpHeaderBuilder::new()
            .with_header("Invalid Header Name", "value")
            .unwrap_err();
        assert!(matches!(err, OpenAiError::ConfigurationError(_)));
    }

    #[test]
    fn take_custom_headers_strips_the_entry() {
        let mut options = json!({
            "model": "m",
            "customHeaders": {"OpenAI-Beta": "assistants=v2"}
        })
        .as_object()
        .cloned()
        .unwrap();

        let headers = take_custom_headers(&mut options, "customHeaders").unwrap();
        assert_eq!(
            headers,
            vec![("OpenAI-Beta".to_string(), "assistants=v2".to_string())]
        );
        assert!(!options.contains_key("customHeaders"));
        assert!(options.contains_key("model"));
    }

    #[test]
    fn take_custom_headers_rejects_non_string_values() {
        let mut options = json!({"customHeaders": {"X-Retry": 3}})
            .as_object()
            .cloned()
            .unwrap();
        let err = take_custom_headers(&mut options, "customHeaders").unwrap_err();
        assert!(matches!(
            err,
            OpenAiError::InvalidParameterType { ref key, actual: "number" } if key == "customHeaders.X-Retry"
        ));

        let mut options = json!({"customHeaders": "nope"}).as_object().cloned().unwrap();
        assert!(take_custom_headers(&mut options, "customHeaders").is_err());
    }
}
