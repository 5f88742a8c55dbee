//! HTTP client builder utilities

use crate::error::OpenAiError;
use crate::types::HttpConfig;

/// Build a `reqwest::Client` from `HttpConfig`.
///
/// # Example
/// ```rust,ignore
/// use openai_endpoints::types::HttpConfig;
/// use openai_endpoints::execution::http::client::build_http_client_from_config;
///
/// let client = build_http_client_from_config(&HttpConfig::default())?;
/// ```
pub fn build_http_client_from_config(config: &HttpConfig) -> Result<reqwest::Client, OpenAiError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| OpenAiError::ConfigurationError(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    builder
        .build()
        .map_err(|e| OpenAiError::ConfigurationError(format!("Failed to create HTTP client: {e}")))
}
