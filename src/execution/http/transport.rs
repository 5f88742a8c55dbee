//! HTTP transport abstraction.
//!
//! The client never talks to the network directly: it hands a fully built
//! [`HttpRequest`] to an injected [`HttpTransport`] and normalizes whatever
//! comes back. [`ReqwestTransport`] is the default implementation; tests and
//! embedders can plug in their own.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::{Stream, StreamExt, stream};
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;

use crate::endpoints::HttpMethod;
use crate::error::OpenAiError;
use crate::execution::body::RequestBody;
use crate::execution::http::client::build_http_client_from_config;
use crate::execution::multipart::build_form;
use crate::types::HttpConfig;

/// A fully built request, consumed once by the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

/// A buffered response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Body as UTF-8 text (lossy).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, OpenAiError> {
        serde_json::from_slice(&self.body).map_err(|e| {
            OpenAiError::EncodingError(format!("Failed to decode response body: {e}"))
        })
    }
}

/// Incremental response body.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, OpenAiError>> + Send>>;

/// A response whose body is read incrementally.
pub struct HttpStreamingResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: ByteStream,
}

impl HttpStreamingResponse {
    /// Read the remaining body into memory.
    pub async fn collect_body(mut self) -> Result<Bytes, OpenAiError> {
        let mut out = Vec::new();
        while let Some(chunk) = self.body.next().await {
            out.extend_from_slice(&chunk?);
        }
        Ok(Bytes::from(out))
    }
}

impl std::fmt::Debug for HttpStreamingResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpStreamingResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

impl From<HttpResponse> for HttpStreamingResponse {
    fn from(response: HttpResponse) -> Self {
        Self {
            status: response.status,
            headers: response.headers,
            body: Box::pin(stream::once(async move {
                Ok::<_, OpenAiError>(response.body)
            })),
        }
    }
}

/// Sends requests built by the client.
///
/// Implementations report connection-level failures as
/// [`OpenAiError::TransportError`]; HTTP error statuses are returned as
/// ordinary responses and classified by the client.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, OpenAiError>;

    /// Send a request whose response body is consumed incrementally.
    ///
    /// The default buffers the whole response through [`send`](Self::send).
    async fn send_streaming(
        &self,
        request: HttpRequest,
    ) -> Result<HttpStreamingResponse, OpenAiError> {
        self.send(request).await.map(HttpStreamingResponse::from)
    }
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build the underlying client from timeout/proxy/user-agent settings.
    pub fn from_config(config: &HttpConfig) -> Result<Self, OpenAiError> {
        Ok(Self::new(build_http_client_from_config(config)?))
    }

    async fn execute(&self, request: HttpRequest) -> Result<reqwest::Response, OpenAiError> {
        let mut headers = request.headers;
        let builder = match request.body {
            RequestBody::Json(bytes) => {
                let builder = self.client.request(request.method.into(), &request.url);
                if bytes.is_empty() {
                    builder.headers(headers)
                } else {
                    builder.headers(headers).body(bytes)
                }
            }
            RequestBody::Multipart(parts) => {
                // reqwest appends its own boundary-bearing Content-Type.
                headers.remove(CONTENT_TYPE);
                self.client
                    .request(request.method.into(), &request.url)
                    .headers(headers)
                    .multipart(build_form(parts)?)
            }
        };
        builder.send().await.map_err(OpenAiError::from)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, OpenAiError> {
        let response = self.execute(request).await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    async fn send_streaming(
        &self,
        request: HttpRequest,
    ) -> Result<HttpStreamingResponse, OpenAiError> {
        let response = self.execute(request).await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes_stream().map(|chunk| chunk.map_err(OpenAiError::from));
        Ok(HttpStreamingResponse {
            status,
            headers,
            body: Box::pin(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    struct Canned(u16, &'static str);

    #[async_trait]
    impl HttpTransport for Canned {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, OpenAiError> {
            Ok(HttpResponse::new(self.0, self.1))
        }
    }

    fn request() -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: "http://example.invalid/v1/models".to_string(),
            headers: HeaderMap::new(),
            body: RequestBody::default(),
        }
    }

    #[tokio::test]
    async fn default_streaming_buffers_through_send() {
        let response = Canned(200, "data: {}\n").send_streaming(request()).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(&response.collect_body().await.unwrap()[..], b"data: {}\n");
    }

    #[test]
    fn response_helpers_decode_body() {
        let mut response = HttpResponse::new(200, r#"{"object":"list","data":[]}"#);
        response
            .headers
            .insert(CONTENT_TYPE, "application/json".parse().unwrap());

        assert!(response.is_success());
        assert_eq!(response.content_type(), Some("application/json"));
        let value: Value = response.json().unwrap();
        assert_eq!(value["object"], "list");
        assert!(response.text().starts_with('{'));
    }

    #[test]
    fn json_decode_failure_is_an_encoding_error() {
        let response = HttpResponse::new(200, "not json");
        let err = response.json::<Value>().unwrap_err();
        assert!(matches!(err, OpenAiError::EncodingError(_)));
    }

    #[tokio::test]
    async fn multipart_body_replaces_preset_content_type() {
        use crate::execution::multipart::Part;
        use reqwest::header::HeaderValue;
        use wiremock::matchers::{body_string_contains, header_regex, method};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header_regex("content-type", r"^multipart/form-data; boundary=.+$"))
            .and(body_string_contains("fine-tune"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/v1/files", server.uri()),
            headers,
            body: RequestBody::Multipart(vec![Part::text("purpose", "fine-tune")]),
        };
        let transport = ReqwestTransport::from_config(&HttpConfig::default()).unwrap();
        assert_eq!(transport.send(request).await.unwrap().status, 200);

        let received = server.received_requests().await.unwrap();
        assert_eq!(received[0].headers.get_all("content-type").iter().count(), 1);
    }

    #[tokio::test]
    async fn reqwest_transport_wraps_connection_failures() {
        let transport = ReqwestTransport::from_config(&HttpConfig::default()).unwrap();
        let mut req = request();
        req.url = "http://127.0.0.1:1/v1/models".to_string();
        let err = transport.send(req).await.unwrap_err();
        assert!(matches!(err, OpenAiError::TransportError { .. }));
    }
}
