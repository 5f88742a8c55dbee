//! Line-oriented SSE decoding
//!
//! The body arrives in arbitrary chunks. Complete lines are split on `\n`
//! (a trailing `\r` is dropped) and the incomplete tail is carried over to the
//! next chunk. Only `data: ` lines are meaningful; blank lines, comments and
//! other fields are skipped.

const DATA_PREFIX: &[u8] = b"data: ";

/// Payload that terminates a stream.
pub const DONE_MARKER: &str = "[DONE]";

/// A meaningful line of an SSE body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseLine {
    /// Payload of a `data: ` line, as received.
    Data(Vec<u8>),
    /// The `[DONE]` sentinel.
    Done,
}

/// Incremental decoder that turns body chunks into [`SseLine`]s.
#[derive(Debug, Default)]
pub struct SseLineDecoder {
    buffer: Vec<u8>,
}

impl SseLineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk and return the lines it completed.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<SseLine> {
        self.buffer.extend_from_slice(chunk);

        let mut lines = Vec::new();
        let mut start = 0;
        while let Some(offset) = self.buffer[start..].iter().position(|b| *b == b'\n') {
            let end = start + offset;
            if let Some(line) = parse_line(&self.buffer[start..end]) {
                lines.push(line);
            }
            start = end + 1;
        }
        self.buffer.drain(..start);
        lines
    }

    /// Flush a trailing line that had no terminating newline.
    pub fn finish(&mut self) -> Option<SseLine> {
        let rest = std::mem::take(&mut self.buffer);
        parse_line(&rest)
    }

    /// Bytes waiting for a newline.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

fn parse_line(raw: &[u8]) -> Option<SseLine> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    if raw.is_empty() {
        return None;
    }
    let payload = raw.strip_prefix(DATA_PREFIX)?.trim_ascii();
    if payload == DONE_MARKER.as_bytes() {
        Some(SseLine::Done)
    } else {
        Some(SseLine::Data(payload.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(payload: &str) -> SseLine {
        SseLine::Data(payload.as_bytes().to_vec())
    }

    #[test]
    fn splits_lines_across_chunks() {
        let mut decoder = SseLineDecoder::new();
        assert!(decoder.feed(b"data: {\"a\"").is_empty());
        assert_eq!(decoder.pending(), 10);

        let lines = decoder.feed(b":1}\n\ndata: {\"b\":2}\n");
        assert_eq!(
            lines,
            vec![
                data("{\"a\":1}"),
                data("{\"b\":2}"),
            ]
        );
        assert_eq!(decoder.pending(), 0);
    }

    #[test]
    fn strips_carriage_returns_and_ignores_other_fields() {
        let mut decoder = SseLineDecoder::new();
        let lines = decoder.feed(b": keep-alive\r\nevent: message\r\ndata: {}\r\n\r\ndata: [DONE]\r\n");
        assert_eq!(lines, vec![data("{}"), SseLine::Done]);
    }

    #[test]
    fn finish_flushes_trailing_partial_line() {
        let mut decoder = SseLineDecoder::new();
        assert!(decoder.feed(b"data: {\"last\":true}").is_empty());
        assert_eq!(
            decoder.finish(),
            Some(data("{\"last\":true}"))
        );
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn invalid_utf8_is_passed_through_untouched() {
        let mut decoder = SseLineDecoder::new();
        let lines = decoder.feed(b"data: {\"c\":\"ab\xff\xfecd\"}\n");
        assert_eq!(
            lines,
            vec![SseLine::Data(b"{\"c\":\"ab\xff\xfecd\"}".to_vec())]
        );
    }

    #[test]
    fn multibyte_characters_split_between_chunks() {
        let text = "data: {\"t\":\"é\"}\n".as_bytes();
        let (head, tail) = text.split_at(13);
        let mut decoder = SseLineDecoder::new();
        assert!(decoder.feed(head).is_empty());
        assert_eq!(
            decoder.feed(tail),
            vec![data("{\"t\":\"é\"}")]
        );
    }
}
