//! Client Configuration
//!
//! Credentials and API location for an [`OpenAiClient`](crate::OpenAiClient).

use secrecy::{ExposeSecret, SecretString};

use crate::defaults;
use crate::error::OpenAiError;
use crate::types::HttpConfig;

/// Client configuration.
///
/// # Example
/// ```rust,ignore
/// use openai_endpoints::ClientConfig;
///
/// let config = ClientConfig::new("sk-...")
///     .with_organization("org-123")
///     .with_origin("http://127.0.0.1:8080");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key (securely stored)
    pub api_key: SecretString,

    /// Sent as `OpenAI-Organization` when non-empty
    pub organization: Option<String>,

    /// Sent as `OpenAI-Project` when non-empty
    pub project: Option<String>,

    /// Host, or a full `scheme://host[:port]` origin
    pub origin: String,

    /// Path prefix in front of every endpoint path
    pub base_path: String,

    /// HTTP configuration for the default transport
    pub http_config: HttpConfig,
}

impl ClientConfig {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            organization: None,
            project: None,
            origin: defaults::api::ORIGIN.to_string(),
            base_path: defaults::api::BASE_PATH.to_string(),
            http_config: HttpConfig::default(),
        }
    }

    pub fn with_organization<S: Into<String>>(mut self, organization: S) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_project<S: Into<String>>(mut self, project: S) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_origin<S: Into<String>>(mut self, origin: S) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_base_path<S: Into<String>>(mut self, base_path: S) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), OpenAiError> {
        if self.api_key.expose_secret().is_empty() {
            return Err(OpenAiError::ConfigurationError(
                "API key cannot be empty".to_string(),
            ));
        }

        if self.origin.chars().any(char::is_whitespace) {
            return Err(OpenAiError::ConfigurationError(format!(
                "Origin must not contain whitespace: \"{}\"",
                self.origin
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = ClientConfig::new("test-key");
        assert_eq!(config.api_key.expose_secret(), "test-key");
        assert_eq!(config.origin, "api.openai.com");
        assert_eq!(config.base_path, "v1");
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::new("test-key");
        assert!(config.validate().is_ok());

        config.api_key = SecretString::from(String::new());
        assert!(config.validate().is_err());

        let config = ClientConfig::new("test-key").with_origin("bad host");
        assert!(matches!(
            config.validate(),
            Err(OpenAiError::ConfigurationError(_))
        ));
    }

    #[test]
    fn debug_output_does_not_leak_the_key() {
        let config = ClientConfig::new("sk-very-secret");
        assert!(!format!("{config:?}").contains("sk-very-secret"));
    }
}
