//! Per-call arguments.

use serde_json::{Map, Value};

use crate::error::OpenAiError;

/// JSON object used for path parameters and request options.
pub type Params = Map<String, Value>;

/// Key under which callers pass extra request headers inside the options.
pub const CUSTOM_HEADERS_KEY: &str = "customHeaders";

/// Arguments of a single endpoint call.
///
/// `path_params` fill the `{placeholders}` of the endpoint path; for GET
/// endpoints the leftovers become query parameters. `options` become the
/// request body (or the query string for GET endpoints).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArguments {
    pub path_params: Params,
    pub options: Params,
}

impl CallArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one path parameter.
    pub fn with_path_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.path_params.insert(key.into(), value.into());
        self
    }

    /// Set one option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Merge all fields of a JSON object into the options.
    pub fn with_options(mut self, options: Params) -> Self {
        self.options.extend(options);
        self
    }

    /// Merge a JSON value into the options; the value must be an object.
    pub fn with_json_options(self, options: Value) -> Result<Self, OpenAiError> {
        match options {
            Value::Object(map) => Ok(self.with_options(map)),
            other => Err(OpenAiError::invalid_type("options", &other)),
        }
    }

    /// Add a request header sent with this call only.
    ///
    /// A `customHeaders` option that is not an object is replaced.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let (name, value) = (name.into(), Value::String(value.into()));
        match self.options.get_mut(CUSTOM_HEADERS_KEY) {
            Some(Value::Object(headers)) => {
                headers.insert(name, value);
            }
            _ => {
                let mut headers = Map::new();
                headers.insert(name, value);
                self.options
                    .insert(CUSTOM_HEADERS_KEY.to_string(), Value::Object(headers));
            }
        }
        self
    }

    /// True when the options explicitly ask for a streamed response.
    pub fn requests_stream(&self) -> bool {
        matches!(self.options.get("stream"), Some(Value::Bool(true)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_collects_params_and_options() {
        let args = CallArguments::new()
            .with_path_param("thread_id", "thread_abc123")
            .with_option("model", "gpt-4o-mini")
            .with_header("OpenAI-Beta", "assistants=v2");

        assert_eq!(args.path_params["thread_id"], "thread_abc123");
        assert_eq!(args.options["model"], "gpt-4o-mini");
        assert_eq!(
            args.options[CUSTOM_HEADERS_KEY],
            json!({"OpenAI-Beta": "assistants=v2"})
        );
    }

    #[test]
    fn header_replaces_non_object_custom_headers() {
        let args = CallArguments::new()
            .with_option(CUSTOM_HEADERS_KEY, "X-Stale: 1")
            .with_header("OpenAI-Beta", "assistants=v2")
            .with_header("X-Trace", "abc");

        assert_eq!(
            args.options[CUSTOM_HEADERS_KEY],
            json!({"OpenAI-Beta": "assistants=v2", "X-Trace": "abc"})
        );
    }

    #[test]
    fn json_options_must_be_an_object() {
        let err = CallArguments::new()
            .with_json_options(json!(["not", "an", "object"]))
            .unwrap_err();
        assert!(matches!(
            err,
            OpenAiError::InvalidParameterType { actual: "array", .. }
        ));
    }

    #[test]
    fn stream_flag_must_be_literal_true() {
        assert!(!CallArguments::new().requests_stream());
        assert!(!CallArguments::new().with_option("stream", "true").requests_stream());
        assert!(CallArguments::new().with_option("stream", true).requests_stream());
    }
}
