//! Typed shortcuts for common endpoints.
//!
//! Each method is a thin wrapper over [`OpenAiClient::call`] or
//! [`OpenAiClient::stream`]; anything not covered here is reachable through
//! the generic entry points by endpoint name.

use serde_json::Value;

use super::OpenAiClient;
use crate::defaults;
use crate::error::OpenAiError;
use crate::execution::http::transport::HttpResponse;
use crate::streaming::JsonEventStream;
use crate::types::CallArguments;

impl OpenAiClient {
    /// `POST /chat/completions`. `model` defaults to the chat default.
    pub async fn create_chat_completion(&self, request: Value) -> Result<HttpResponse, OpenAiError> {
        let args = with_default_model(request, defaults::models::CHAT)?;
        self.call("createChatCompletion", args).await
    }

    /// Streaming variant of [`create_chat_completion`](Self::create_chat_completion).
    pub async fn create_chat_completion_stream(
        &self,
        request: Value,
    ) -> Result<JsonEventStream, OpenAiError> {
        let args = with_default_model(request, defaults::models::CHAT)?;
        self.stream("createChatCompletion", args).await
    }

    /// `POST /completions`. `model` defaults to the completion default.
    pub async fn create_completion(&self, request: Value) -> Result<HttpResponse, OpenAiError> {
        let args = with_default_model(request, defaults::models::COMPLETION)?;
        self.call("createCompletion", args).await
    }

    pub async fn create_embedding(&self, request: Value) -> Result<HttpResponse, OpenAiError> {
        self.call("createEmbedding", options(request)?).await
    }

    pub async fn create_moderation(&self, request: Value) -> Result<HttpResponse, OpenAiError> {
        self.call("createModeration", options(request)?).await
    }

    pub async fn create_image(&self, request: Value) -> Result<HttpResponse, OpenAiError> {
        self.call("createImage", options(request)?).await
    }

    /// Returns the audio bytes in the response body.
    pub async fn create_speech(&self, request: Value) -> Result<HttpResponse, OpenAiError> {
        self.call("createSpeech", options(request)?).await
    }

    /// `file` must be a path to the audio file.
    pub async fn create_transcription(&self, request: Value) -> Result<HttpResponse, OpenAiError> {
        self.call("createTranscription", options(request)?).await
    }

    pub async fn list_models(&self) -> Result<HttpResponse, OpenAiError> {
        self.call("listModels", CallArguments::new()).await
    }

    pub async fn retrieve_model(&self, model: &str) -> Result<HttpResponse, OpenAiError> {
        self.call(
            "retrieveModel",
            CallArguments::new().with_path_param("model", model),
        )
        .await
    }

    /// Delete a fine-tuned model.
    pub async fn delete_model(&self, model: &str) -> Result<HttpResponse, OpenAiError> {
        self.call(
            "deleteModel",
            CallArguments::new().with_path_param("model", model),
        )
        .await
    }

    /// Upload the file at `path` as multipart form data.
    pub async fn upload_file(&self, path: &str, purpose: &str) -> Result<HttpResponse, OpenAiError> {
        let args = CallArguments::new()
            .with_option("file", path)
            .with_option("purpose", purpose);
        self.call("uploadFile", args).await
    }

    /// `query` is sent as query parameters (`purpose`, `limit`, `after`, ...).
    pub async fn list_files(&self, query: Value) -> Result<HttpResponse, OpenAiError> {
        self.call("listFiles", options(query)?).await
    }

    pub async fn retrieve_file(&self, file_id: &str) -> Result<HttpResponse, OpenAiError> {
        self.call("retrieveFile", file_args(file_id)).await
    }

    pub async fn retrieve_file_content(&self, file_id: &str) -> Result<HttpResponse, OpenAiError> {
        self.call("retrieveFileContent", file_args(file_id)).await
    }

    pub async fn delete_file(&self, file_id: &str) -> Result<HttpResponse, OpenAiError> {
        self.call("deleteFile", file_args(file_id)).await
    }
}

fn options(request: Value) -> Result<CallArguments, OpenAiError> {
    match request {
        Value::Null => Ok(CallArguments::new()),
        other => CallArguments::new().with_json_options(other),
    }
}

fn with_default_model(request: Value, model: &str) -> Result<CallArguments, OpenAiError> {
    let mut args = options(request)?;
    if !args.options.contains_key("model") {
        args.options
            .insert("model".to_string(), Value::String(model.to_string()));
    }
    Ok(args)
}

fn file_args(file_id: &str) -> CallArguments {
    CallArguments::new().with_path_param("file_id", file_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_model_is_injected_only_when_missing() {
        let args = with_default_model(json!({"messages": []}), "gpt-4o-mini").unwrap();
        assert_eq!(args.options["model"], "gpt-4o-mini");

        let args = with_default_model(json!({"model": "o3"}), "gpt-4o-mini").unwrap();
        assert_eq!(args.options["model"], "o3");
    }

    #[test]
    fn null_request_means_no_options() {
        assert!(options(Value::Null).unwrap().options.is_empty());
        assert!(matches!(
            options(json!([1, 2])),
            Err(OpenAiError::InvalidParameterType { actual: "array", .. })
        ));
    }
}
