//! URL construction
//!
//! Resolves `{placeholder}` segments of an endpoint path from the call's path
//! parameters and composes `scheme://origin/base_path/path[?query]`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::defaults;
use crate::endpoints::{EndpointDefinition, HttpMethod};
use crate::error::OpenAiError;
use crate::types::Params;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// Names of the placeholders in `template`, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// A path with its placeholders substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPath {
    pub path: String,
    /// Parameters that did not match any placeholder.
    pub unused: Params,
}

/// Substitute every placeholder of `template` from `params`.
///
/// Values must be scalars; they are percent-encoded as one path segment.
pub fn resolve_path(template: &str, params: &Params) -> Result<ResolvedPath, OpenAiError> {
    let mut path = String::with_capacity(template.len());
    let mut last = 0;
    let mut consumed = Vec::new();

    for caps in PLACEHOLDER.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let key = name.as_str();
        let value = params
            .get(key)
            .ok_or_else(|| OpenAiError::MissingPathParameter(key.to_string()))?;
        let segment = scalar_to_string(key, value)?;

        path.push_str(&template[last..whole.start()]);
        path.push_str(&urlencoding::encode(&segment));
        last = whole.end();
        consumed.push(key);
    }
    path.push_str(&template[last..]);

    let unused = params
        .iter()
        .filter(|(key, _)| !consumed.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(ResolvedPath { path, unused })
}

/// Build the absolute URL of a call.
///
/// For GET endpoints the path parameters that were not consumed by the
/// template, followed by `extra_query`, become the query string. Other
/// methods never carry a query string.
pub fn build_url(
    definition: &EndpointDefinition,
    path_params: &Params,
    origin: &str,
    base_path: &str,
    extra_query: &Params,
) -> Result<String, OpenAiError> {
    let resolved = resolve_path(definition.path_template, path_params)?;
    let mut url = join_url(&origin_url(origin), base_path, &resolved.path);

    if definition.http_method == HttpMethod::Get {
        let mut query = resolved.unused;
        query.extend(extra_query.iter().map(|(k, v)| (k.clone(), v.clone())));
        let query = encode_query(&query)?;
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
    } else if !resolved.unused.is_empty() {
        tracing::debug!(
            endpoint = definition.name,
            ignored = ?resolved.unused.keys().collect::<Vec<_>>(),
            "Ignoring path parameters without a placeholder"
        );
    }

    Ok(url)
}

/// `https://host` for a bare host, or the origin itself when it already
/// carries a scheme.
fn origin_url(origin: &str) -> String {
    let origin = origin.trim().trim_end_matches('/');
    let origin = if origin.is_empty() {
        defaults::api::ORIGIN
    } else {
        origin
    };
    if origin.starts_with("http://") || origin.starts_with("https://") {
        origin.to_string()
    } else {
        format!("{}://{}", defaults::api::SCHEME, origin)
    }
}

fn join_url(origin: &str, base_path: &str, path: &str) -> String {
    let base_path = base_path.trim_matches('/');
    let base_path = if base_path.is_empty() {
        defaults::api::BASE_PATH
    } else {
        base_path
    };
    format!("{}/{}/{}", origin, base_path, path.trim_start_matches('/'))
}

/// `application/x-www-form-urlencoded` query string.
///
/// Scalars encode as `key=value`, arrays of scalars as repeated `key[]=value`,
/// nulls are skipped.
pub fn encode_query(params: &Params) -> Result<String, OpenAiError> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let array_key = format!("{key}[]");
                for item in items {
                    if item.is_null() {
                        continue;
                    }
                    pairs.push(encode_pair(&array_key, &scalar_to_string(key, item)?));
                }
            }
            other => pairs.push(encode_pair(key, &scalar_to_string(key, other)?)),
        }
    }
    Ok(pairs.join("&"))
}

fn encode_pair(key: &str, value: &str) -> String {
    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
}

/// Text form of a scalar JSON value.
pub(crate) fn scalar_to_string(key: &str, value: &Value) -> Result<String, OpenAiError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(OpenAiError::invalid_type(key, other)),
    }
}
