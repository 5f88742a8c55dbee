//! Tracing subscriber setup
//!
//! The library only emits `tracing` events. Applications that have no
//! subscriber of their own can install one from here.
//!
//! ```rust,ignore
//! use openai_endpoints::observability::{OutputFormat, TracingConfig};
//!
//! TracingConfig::default()
//!     .with_level(tracing::Level::DEBUG)
//!     .with_output_format(OutputFormat::Json)
//!     .try_init()?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::error::OpenAiError;

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Subscriber configuration
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level applied to this crate's events when `RUST_LOG` is unset
    pub level: tracing::Level,
    pub output_format: OutputFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            output_format: OutputFormat::Text,
        }
    }
}

impl TracingConfig {
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Parse a level name (`trace`, `debug`, `info`, `warn`, `error`).
    pub fn with_level_str(self, level: &str) -> Result<Self, OpenAiError> {
        let level = level.parse::<tracing::Level>().map_err(|_| {
            OpenAiError::ConfigurationError(format!(
                "Invalid log level: {level}. Valid options: trace, debug, info, warn, error"
            ))
        })?;
        Ok(self.with_level(level))
    }

    /// Filter used by the subscriber: `RUST_LOG` if set, else this crate at
    /// the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = self.level.as_str().to_ascii_lowercase();
            EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME")))
        })
    }

    /// Install the global subscriber.
    ///
    /// Succeeds without changes when a global subscriber is already set.
    pub fn try_init(&self) -> Result<(), OpenAiError> {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_target(true);

        let result = match self.output_format {
            OutputFormat::Text => builder.try_init(),
            OutputFormat::Json => builder.json().try_init(),
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) if e.to_string().contains("global default trace dispatcher has already been set") => {
                Ok(())
            }
            Err(e) => Err(OpenAiError::ConfigurationError(format!(
                "Failed to initialize tracing: {e}"
            ))),
        }
    }
}
