//! Error Handling Module
//!
//! Every failure the client can produce converges on [`OpenAiError`], so
//! callers need a single match arm per concern:
//! - caller-input failures raised before any I/O (`UnknownEndpoint`,
//!   `MissingPathParameter`, `InvalidParameterType`, `EncodingError`,
//!   `FileReadError`, `ConfigurationError`)
//! - remote failures (`ApiError`, `TransportError`, `StreamDecodeError`)
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_endpoints::error::OpenAiError;
//!
//! let error = OpenAiError::api(Some(r#"{"error":{"message":"Invalid API key provided."}}"#), 401);
//! assert_eq!(error.message(), "Invalid API key provided.");
//! assert_eq!(error.code(), 401);
//! ```

mod conversions;
pub mod types;

pub use types::*;
