//! Request body selection and encoding.
//!
//! A body is either JSON or multipart, never both. Multipart is chosen when
//! the options name a file-like field and carry no structured (array/object)
//! value; a structured value means the request is JSON-only even if it happens
//! to use one of the file-like keys.

use bytes::Bytes;
use serde_json::Value;

use crate::error::OpenAiError;
use crate::execution::multipart::Part;
use crate::types::Params;

/// Option keys whose value is a path to a file to upload.
pub const FILE_FIELDS: &[&str] = &["file", "image", "mask", "data"];

/// File-like fields whose content is sent base64-encoded.
pub const BASE64_FIELDS: &[&str] = &["data"];

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Which encoding a body uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Multipart,
}

/// Request body as handed to the transport.
///
/// Multipart bodies stay as parts; the transport owns the wire encoding and
/// the boundary in `Content-Type`.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Bytes),
    Multipart(Vec<Part>),
}

impl RequestBody {
    pub fn kind(&self) -> BodyKind {
        match self {
            Self::Json(_) => BodyKind::Json,
            Self::Multipart(_) => BodyKind::Multipart,
        }
    }

    /// Content type the client sets itself. `None` for multipart.
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Json(_) => Some(JSON_CONTENT_TYPE),
            Self::Multipart(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Json(bytes) => bytes.is_empty(),
            Self::Multipart(parts) => parts.is_empty(),
        }
    }

    /// Encoded JSON, if this is a JSON body.
    pub fn as_json(&self) -> Option<&Bytes> {
        match self {
            Self::Json(bytes) => Some(bytes),
            Self::Multipart(_) => None,
        }
    }
}

impl Default for RequestBody {
    fn default() -> Self {
        Self::Json(Bytes::new())
    }
}

/// Decide how `options` should be encoded.
pub fn body_kind(options: &Params) -> BodyKind {
    let has_file_field = FILE_FIELDS.iter().any(|key| options.contains_key(*key));
    let has_structured_value = options
        .values()
        .any(|value| matches!(value, Value::Array(_) | Value::Object(_)));

    if has_file_field && !has_structured_value {
        BodyKind::Multipart
    } else {
        BodyKind::Json
    }
}

/// Encode `options` as the request body.
pub async fn build_body(options: &Params) -> Result<RequestBody, OpenAiError> {
    match body_kind(options) {
        BodyKind::Json => json_body(options),
        BodyKind::Multipart => multipart_body(options).await,
    }
}

/// JSON body; an empty map yields an empty body.
pub fn json_body(options: &Params) -> Result<RequestBody, OpenAiError> {
    if options.is_empty() {
        return Ok(RequestBody::default());
    }
    Ok(RequestBody::Json(Bytes::from(serde_json::to_vec(options)?)))
}

/// Multipart body; file-like fields are read from disk.
pub async fn multipart_body(options: &Params) -> Result<RequestBody, OpenAiError> {
    let mut parts = Vec::with_capacity(options.len());

    for (key, value) in options {
        let part = if FILE_FIELDS.contains(&key.as_str()) {
            let Value::String(path) = value else {
                return Err(OpenAiError::invalid_type(key, value));
            };
            Part::from_path(key, path, BASE64_FIELDS.contains(&key.as_str())).await?
        } else {
            Part::text(key, text_value(key, value)?)
        };
        parts.push(part);
    }

    Ok(RequestBody::Multipart(parts))
}

fn text_value(key: &str, value: &Value) -> Result<String, OpenAiError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(String::new()),
        Value::Bool(_) | Value::Number(_) => Ok(value.to_string()),
        other => Err(OpenAiError::invalid_type(key, other)),
    }
}
