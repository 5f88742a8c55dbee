//! HTTP plumbing: client construction, header assembly and the transport seam.

pub mod client;
pub mod headers;
pub mod transport;

pub use client::build_http_client_from_config;
pub use headers::HttpHeaderBuilder;
pub use transport::{
    ByteStream, HttpRequest, HttpResponse, HttpStreamingResponse, HttpTransport, ReqwestTransport,
};
