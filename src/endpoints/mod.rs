//! Endpoint Registry
//!
//! Maps operation names (`createChatCompletion`, `retrieveModel`, ...) to their
//! HTTP method and path template. The table is built once on first use and
//! is read-only afterwards.

mod catalog;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::error::OpenAiError;

/// HTTP methods used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A named remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDefinition {
    pub name: &'static str,
    pub http_method: HttpMethod,
    /// Path below the base path; may contain `{placeholder}` segments.
    pub path_template: &'static str,
}

impl EndpointDefinition {
    pub const fn new(name: &'static str, http_method: HttpMethod, path_template: &'static str) -> Self {
        Self {
            name,
            http_method,
            path_template,
        }
    }
}

static REGISTRY: LazyLock<EndpointRegistry> = LazyLock::new(EndpointRegistry::from_catalog);

/// Read-only lookup table of endpoint definitions.
#[derive(Debug)]
pub struct EndpointRegistry {
    by_name: HashMap<&'static str, &'static EndpointDefinition>,
}

impl EndpointRegistry {
    /// The process-wide registry.
    pub fn global() -> &'static EndpointRegistry {
        &REGISTRY
    }

    fn from_catalog() -> Self {
        let by_name = catalog::ENDPOINTS
            .iter()
            .map(|definition| (definition.name, definition))
            .collect();
        Self { by_name }
    }

    pub fn lookup(&self, name: &str) -> Result<&'static EndpointDefinition, OpenAiError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| OpenAiError::UnknownEndpoint(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// All definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &'static EndpointDefinition> {
        catalog::ENDPOINTS.iter()
    }
}

/// Shorthand for `EndpointRegistry::global().lookup(name)`.
pub fn lookup(name: &str) -> Result<&'static EndpointDefinition, OpenAiError> {
    EndpointRegistry::global().lookup(name)
}
