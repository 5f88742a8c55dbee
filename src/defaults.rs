//! Default Configuration Values
//!
//! Centralizes the defaults used by the client, the URL builder and the
//! default transport.

use std::time::Duration;

/// API location defaults
pub mod api {
    /// Host used when the configured origin is empty.
    pub const ORIGIN: &str = "api.openai.com";

    /// Path prefix placed in front of every endpoint path.
    pub const BASE_PATH: &str = "v1";

    /// Scheme used when the origin does not carry one.
    pub const SCHEME: &str = "https";
}

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default request timeout for HTTP requests
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Default connection timeout for establishing HTTP connections
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("openai-endpoints/", env!("CARGO_PKG_VERSION"));
}

/// Models injected by the typed helpers when the caller leaves `model` unset
pub mod models {
    pub const CHAT: &str = "gpt-4o-mini";
    pub const COMPLETION: &str = "gpt-3.5-turbo-instruct";
}

/// Text used when an error carries no message at all.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";
