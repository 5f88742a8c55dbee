//! Request execution
//!
//! Everything between an endpoint name and bytes on the wire: URL
//! resolution, body encoding and the HTTP transport.

pub mod body;
pub mod http;
pub mod multipart;
pub mod url;
