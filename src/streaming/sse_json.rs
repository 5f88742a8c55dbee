//! SSE JSON streaming helpers
//!
//! Turns a raw response body into a stream of JSON values, one per `data:`
//! payload. The stream ends at `[DONE]` or at the end of the body, and aborts
//! after the first error.

use std::pin::Pin;

use futures_util::{Stream, StreamExt};
use serde_json::Value;

use crate::error::OpenAiError;
use crate::execution::http::transport::ByteStream;
use crate::streaming::sse::{SseLine, SseLineDecoder};

/// Stream of decoded event payloads.
pub type JsonEventStream = Pin<Box<dyn Stream<Item = Result<Value, OpenAiError>> + Send>>;

/// Convert a body stream into a JSON stream by parsing SSE `data:` payloads.
///
/// - Body read errors are yielded as-is and end the stream.
/// - `[DONE]` ends the stream without an item.
/// - A payload that is not valid JSON yields
///   [`OpenAiError::StreamDecodeError`] and ends the stream.
pub fn stream_sse_json_values(mut body: ByteStream) -> JsonEventStream {
    let out = async_stream::stream! {
        let mut decoder = SseLineDecoder::new();
        let mut events = 0usize;

        loop {
            let (lines, last) = match body.next().await {
                Some(Ok(chunk)) => (decoder.feed(&chunk), false),
                Some(Err(e)) => {
                    yield Err(e);
                    return;
                }
                None => (decoder.finish().into_iter().collect::<Vec<_>>(), true),
            };

            for line in lines {
                match line {
                    SseLine::Done => {
                        tracing::trace!(events, "SSE stream completed");
                        return;
                    }
                    SseLine::Data(payload) => match serde_json::from_slice::<Value>(&payload) {
                        Ok(value) => {
                            events += 1;
                            tracing::trace!(event = events, "SSE event decoded");
                            yield Ok(value);
                        }
                        Err(e) => {
                            yield Err(OpenAiError::StreamDecodeError(format!(
                                "Failed to parse SSE JSON payload: {e}"
                            )));
                            return;
                        }
                    },
                }
            }

            if last {
                tracing::trace!(events, "SSE body ended without [DONE]");
                return;
            }
        }
    };

    Box::pin(out)
}
