//! Type Conversions for OpenAiError
//!
//! From implementations for the error types the client handles.

use super::types::OpenAiError;

impl From<reqwest::Error> for OpenAiError {
    fn from(err: reqwest::Error) -> Self {
        let code = err.status().map(|s| s.as_u16()).unwrap_or(0);
        let message = err.to_string();
        Self::transport(Some(&message), code, Some(Box::new(err)))
    }
}

impl From<serde_json::Error> for OpenAiError {
    fn from(err: serde_json::Error) -> Self {
        Self::EncodingError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: OpenAiError = json_err.into();
        assert!(matches!(err, OpenAiError::EncodingError(_)));
    }

    #[tokio::test]
    async fn test_from_reqwest_error() {
        // Port 1 on localhost refuses connections.
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .unwrap_err();
        let err: OpenAiError = err.into();
        match err {
            OpenAiError::TransportError { code, source, .. } => {
                assert_eq!(code, 0);
                assert!(source.is_some());
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
