//! Shared data types.

pub mod call;
pub mod http;

pub use call::{CUSTOM_HEADERS_KEY, CallArguments, Params};
pub use http::{HttpConfig, HttpConfigBuilder};
