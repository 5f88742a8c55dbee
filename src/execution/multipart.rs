//! `multipart/form-data` parts
//!
//! Requests carry their form as plain [`Part`] values so any
//! [`HttpTransport`](crate::execution::http::transport::HttpTransport) can
//! inspect them. The reqwest transport turns them into a
//! [`reqwest::multipart::Form`] with [`build_form`].

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;

use crate::error::OpenAiError;

/// MIME type sent for every file part.
pub const FILE_MIME: &str = "application/octet-stream";

/// Content of a single part.
#[derive(Debug, Clone, PartialEq)]
pub enum PartBody {
    Text(String),
    File { filename: String, data: Bytes },
}

/// A named form field.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub body: PartBody,
}

impl Part {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: PartBody::Text(value.into()),
        }
    }

    pub fn file(name: impl Into<String>, filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            body: PartBody::File {
                filename: filename.into(),
                data: data.into(),
            },
        }
    }

    /// Read `path` from disk into a file part with a random filename that
    /// keeps the original extension. With `base64` set the content is sent
    /// base64-encoded.
    pub async fn from_path(name: impl Into<String>, path: &str, base64: bool) -> Result<Self, OpenAiError> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|source| OpenAiError::FileReadError {
                path: path.to_string(),
                source,
            })?;
        let data = if base64 {
            Bytes::from(BASE64.encode(&data))
        } else {
            Bytes::from(data)
        };
        Ok(Self::file(name, random_filename(path), data))
    }

    fn into_reqwest(self) -> Result<(String, reqwest::multipart::Part), OpenAiError> {
        let part = match self.body {
            PartBody::Text(value) => reqwest::multipart::Part::text(value),
            PartBody::File { filename, data } => reqwest::multipart::Part::bytes(data.to_vec())
                .file_name(filename)
                .mime_str(FILE_MIME)
                .map_err(|e| OpenAiError::EncodingError(format!("Invalid part MIME type: {e}")))?,
        };
        Ok((self.name, part))
    }
}

/// Random filename preserving the extension of `path`.
pub fn random_filename(path: &str) -> String {
    let stem = uuid::Uuid::new_v4().simple().to_string();
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if !ext.is_empty() => format!("{stem}.{ext}"),
        _ => stem,
    }
}

/// Build a reqwest form, keeping part order.
pub fn build_form(parts: Vec<Part>) -> Result<reqwest::multipart::Form, OpenAiError> {
    parts
        .into_iter()
        .try_fold(reqwest::multipart::Form::new(), |form, part| {
            let (name, part) = part.into_reqwest()?;
            Ok(form.part(name, part))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_TYPE;
    use std::io::Write;

    #[test]
    fn form_sets_boundary_content_type() {
        let form = build_form(vec![
            Part::text("purpose", "fine-tune"),
            Part::file("file", "abc.jsonl", Bytes::from_static(b"{\"a\":1}")),
        ])
        .unwrap();
        let boundary = form.boundary().to_string();
        assert!(!boundary.is_empty());

        let request = reqwest::Client::new()
            .post("http://example.invalid/v1/files")
            .multipart(form)
            .build()
            .unwrap();
        assert_eq!(
            request.headers()[CONTENT_TYPE].to_str().unwrap(),
            format!("multipart/form-data; boundary={boundary}")
        );
    }

    #[test]
    fn random_filename_keeps_extension() {
        let name = random_filename("/tmp/data/mydata.jsonl");
        assert!(name.ends_with(".jsonl"));
        assert!(!name.contains("mydata"));
        assert_ne!(name, random_filename("/tmp/data/mydata.jsonl"));

        assert!(!random_filename("/tmp/no_extension").contains('.'));
    }

    #[tokio::test]
    async fn from_path_reads_file_contents() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"\x89PNG raw").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let part = Part::from_path("image", &path, false).await.unwrap();
        match part.body {
            PartBody::File { filename, data } => {
                assert!(filename.ends_with(".png"));
                assert_eq!(&data[..], b"\x89PNG raw");
            }
            other => panic!("unexpected part: {other:?}"),
        }

        let part = Part::from_path("data", &path, true).await.unwrap();
        match part.body {
            PartBody::File { data, .. } => assert_eq!(&data[..], BASE64.encode(b"\x89PNG raw").as_bytes()),
            other => panic!("unexpected part: {other:?}"),
        }
    }

    #[tokio::test]
    async fn from_path_reports_missing_file() {
        let err = Part::from_path("file", "/definitely/not/here.bin", false)
            .await
            .unwrap_err();
        assert!(matches!(err, OpenAiError::FileReadError { ref path, .. } if path == "/definitely/not/here.bin"));
    }
}
