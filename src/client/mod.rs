//! OpenAI client
//!
//! [`OpenAiClient`] dispatches any cataloged endpoint by name. A call resolves
//! the endpoint, builds URL, headers and body, hands the request to the
//! transport and classifies the response. Streaming calls decode the
//! server-sent events into JSON values, either pulled as a [`Stream`] or
//! pushed to a callback.
//!
//! ```rust,ignore
//! use openai_endpoints::{CallArguments, ClientConfig, OpenAiClient};
//!
//! let client = OpenAiClient::new(ClientConfig::new(std::env::var("OPENAI_API_KEY")?))?;
//! let response = client
//!     .call("retrieveModel", CallArguments::new().with_path_param("model", "gpt-4o-mini"))
//!     .await?;
//! println!("{}", response.text());
//! ```
//!
//! [`Stream`]: futures_util::Stream

mod operations;

use std::sync::Arc;

use futures_util::StreamExt;
use secrecy::ExposeSecret;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::endpoints::{self, HttpMethod};
use crate::error::OpenAiError;
use crate::execution::body::{build_body, json_body};
use crate::execution::http::headers::{
    HttpHeaderBuilder, ORGANIZATION_HEADER, PROJECT_HEADER, take_custom_headers,
};
use crate::execution::http::transport::{
    HttpRequest, HttpResponse, HttpStreamingResponse, HttpTransport, ReqwestTransport,
};
use crate::execution::url::build_url;
use crate::streaming::{JsonEventStream, stream_sse_json_values};
use crate::types::{CUSTOM_HEADERS_KEY, CallArguments, Params};

/// Result of [`OpenAiClient::call_with_callback`].
#[derive(Debug)]
pub enum CallOutcome {
    /// The call was not streamed; the buffered response is returned as-is.
    Response(HttpResponse),
    /// Every event was delivered to the callback.
    Streamed,
}

/// Client for the OpenAI REST API.
///
/// Cheap to clone; clones share configuration and transport.
#[derive(Clone)]
pub struct OpenAiClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Create a client using the default `reqwest` transport.
    pub fn new(config: ClientConfig) -> Result<Self, OpenAiError> {
        let transport = ReqwestTransport::from_config(&config.http_config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client that sends every request through `transport`.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, OpenAiError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the request for `endpoint` without sending it.
    ///
    /// `customHeaders` is removed from the options and applied as headers.
    /// For GET endpoints the options become query parameters and the body
    /// stays empty. Streaming requests always carry a JSON body.
    pub async fn prepare_request(
        &self,
        endpoint: &str,
        args: &CallArguments,
        streaming: bool,
    ) -> Result<HttpRequest, OpenAiError> {
        let definition = endpoints::lookup(endpoint)?;

        let mut options = args.options.clone();
        let custom_headers = take_custom_headers(&mut options, CUSTOM_HEADERS_KEY)?;

        let (query, body_options) = if definition.http_method == HttpMethod::Get {
            (options, Params::new())
        } else {
            (Params::new(), options)
        };

        let url = build_url(
            definition,
            &args.path_params,
            &self.config.origin,
            &self.config.base_path,
            &query,
        )?;

        let body = if streaming {
            json_body(&body_options)?
        } else {
            build_body(&body_options).await?
        };

        let mut headers = HttpHeaderBuilder::new()
            .with_bearer_auth(self.config.api_key.expose_secret())?
            .with_optional_header(ORGANIZATION_HEADER, self.config.organization.as_deref())?
            .with_optional_header(PROJECT_HEADER, self.config.project.as_deref())?
            .with_custom_headers(&custom_headers)?;
        if let Some(content_type) = body.content_type() {
            headers = headers.with_content_type(content_type)?;
        }
        if streaming {
            headers = headers.with_event_stream_accept();
        }

        tracing::debug!(
            endpoint = definition.name,
            method = %definition.http_method,
            url = %url,
            body_kind = ?body.kind(),
            streaming,
            "Prepared OpenAI request"
        );

        Ok(HttpRequest {
            method: definition.http_method,
            url,
            headers: headers.build(),
            body,
        })
    }

    /// Call `endpoint` and return the raw response.
    ///
    /// A status of 400 or above becomes [`OpenAiError::ApiError`].
    pub async fn call(
        &self,
        endpoint: &str,
        args: CallArguments,
    ) -> Result<HttpResponse, OpenAiError> {
        let request = self.prepare_request(endpoint, &args, false).await?;
        let response = self.transport.send(request).await.inspect_err(|e| {
            tracing::warn!(endpoint, error = %e, "OpenAI request failed");
        })?;

        if response.status >= 400 {
            return Err(api_error(endpoint, response.status, &response.text()));
        }
        Ok(response)
    }

    /// Call a streaming endpoint and return its events as a stream.
    ///
    /// The options are sent with `"stream": true`, replacing any value the
    /// caller set. The status is checked before any event is read.
    pub async fn stream(
        &self,
        endpoint: &str,
        mut args: CallArguments,
    ) -> Result<JsonEventStream, OpenAiError> {
        args.options.insert("stream".to_string(), Value::Bool(true));

        let request = self.prepare_request(endpoint, &args, true).await?;
        let response = self
            .transport
            .send_streaming(request)
            .await
            .inspect_err(|e| {
                tracing::warn!(endpoint, error = %e, "OpenAI streaming request failed");
            })?;

        if response.status >= 400 {
            let status = response.status;
            let body = read_error_body(response).await;
            return Err(api_error(endpoint, status, &body));
        }
        Ok(stream_sse_json_values(response.body))
    }

    /// Call `endpoint`, delivering streamed events to `on_event`.
    ///
    /// Streaming happens only when the options contain `"stream": true`;
    /// otherwise the buffered response is returned and `on_event` is never
    /// called. Events are delivered in order on the calling task. An error
    /// status is reported before any event.
    pub async fn call_with_callback<F>(
        &self,
        endpoint: &str,
        args: CallArguments,
        mut on_event: F,
    ) -> Result<CallOutcome, OpenAiError>
    where
        F: FnMut(Value),
    {
        if !args.requests_stream() {
            return self.call(endpoint, args).await.map(CallOutcome::Response);
        }

        let mut events = self.stream(endpoint, args).await?;
        while let Some(event) = events.next().await {
            on_event(event?);
        }
        Ok(CallOutcome::Streamed)
    }
}

fn api_error(endpoint: &str, status: u16, body: &str) -> OpenAiError {
    let error = OpenAiError::api(Some(body), status);
    tracing::warn!(endpoint, status, message = %error.message(), "OpenAI API error");
    error
}

async fn read_error_body(response: HttpStreamingResponse) -> String {
    match response.collect_body().await {
        Ok(body) => String::from_utf8_lossy(&body).into_owned(),
        Err(e) => {
            tracing::debug!(error = %e, "Failed to read error response body");
            String::new()
        }
    }
}
