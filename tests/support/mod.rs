//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use openai_endpoints::{
    ClientConfig, HttpRequest, HttpResponse, HttpTransport, OpenAiClient, OpenAiError,
};
use wiremock::MockServer;

pub const API_KEY: &str = "sk-test-key";

/// Client pointed at a wiremock server.
pub fn client_for(server: &MockServer) -> OpenAiClient {
    OpenAiClient::new(config_for(server)).expect("client")
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(API_KEY)
        .with_organization("org-test")
        .with_origin(server.uri())
}

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn read_fixture(relative: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(relative)).expect("read fixture text")
}

/// In-memory transport that records requests and replies with a canned
/// response.
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    status: u16,
    body: String,
}

impl RecordingTransport {
    pub fn new(status: u16, body: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            status,
            body: body.into(),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, OpenAiError> {
        self.requests.lock().unwrap().push(request);
        Ok(HttpResponse::new(self.status, self.body.clone()))
    }
}
