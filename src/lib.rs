//! # openai-endpoints - Name-addressed OpenAI REST client
//!
//! Every OpenAI REST operation is registered under its API name
//! (`createChatCompletion`, `retrieveFile`, `listRuns`, ...) together with its
//! HTTP method and path template. A single client dispatches any of them.
//!
#![deny(unsafe_code)]

//! ## Features
//!
//! - **Endpoint Registry**: one static catalog maps names to method and path.
//! - **Automatic Encoding**: path placeholders, GET query strings, JSON or
//!   multipart bodies are derived from the call arguments.
//! - **Streaming**: server-sent events decoded into JSON values, pulled as a
//!   stream or pushed to a callback.
//! - **Pluggable Transport**: requests go through the [`HttpTransport`] trait;
//!   the default is backed by `reqwest`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use openai_endpoints::{CallArguments, ClientConfig, OpenAiClient};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAiClient::new(ClientConfig::new("your-api-key"))?;
//!
//!     let response = client
//!         .create_chat_completion(json!({
//!             "messages": [{"role": "user", "content": "Hello, world!"}]
//!         }))
//!         .await?;
//!     println!("{}", response.text());
//!
//!     // Any cataloged endpoint by name
//!     let runs = client
//!         .call(
//!             "listRuns",
//!             CallArguments::new()
//!                 .with_path_param("thread_id", "thread_abc123")
//!                 .with_option("limit", 20),
//!         )
//!         .await?;
//!     println!("{}", runs.text());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod defaults;
pub mod endpoints;
pub mod error;
pub mod execution;
pub mod observability;
pub mod streaming;
pub mod types;

pub use client::{CallOutcome, OpenAiClient};
pub use config::ClientConfig;
pub use endpoints::{EndpointDefinition, EndpointRegistry, HttpMethod};
pub use error::OpenAiError;
pub use execution::http::transport::{
    HttpRequest, HttpResponse, HttpStreamingResponse, HttpTransport, ReqwestTransport,
};
pub use streaming::JsonEventStream;
pub use types::{CallArguments, HttpConfig, Params};

/// Common imports
pub mod prelude {
    pub use crate::{
        CallArguments, CallOutcome, ClientConfig, HttpTransport, OpenAiClient, OpenAiError,
        Params,
    };
}
