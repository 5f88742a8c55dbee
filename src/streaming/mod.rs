//! Streaming response decoding.

pub mod sse;
pub mod sse_json;

pub use sse::{DONE_MARKER, SseLine, SseLineDecoder};
pub use sse_json::{JsonEventStream, stream_sse_json_values};
