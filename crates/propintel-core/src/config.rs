//! Configuration for the Groq chat-completion backend
//!
//! The API key is read from the `GROQ_API_KEY` environment variable and
//! gates all functionality: operations fail fast without it, before any
//! network call is made.

use crate::error::{IntelError, IntelResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default Groq API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Preferred models in fallback order
pub const DEFAULT_MODELS: [&str; 5] = [
    "compound-beta",
    "llama-3.3-70b-versatile",
    "deepseek-r1-distill-llama-70b",
    "llama-3.1-8b-instant",
    "qwen/qwen3-32b",
];

/// Timeout configuration for chat-completion requests
///
/// - **Connection timeout**: time allowed to establish a connection
/// - **Request timeout**: time allowed for one complete request/response
///   cycle; also used as the per-attempt budget in the fallback loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Connection timeout in seconds
    #[serde(default = "TimeoutConfig::default_connection_timeout")]
    pub connection_timeout_secs: u64,

    /// Request timeout in seconds
    #[serde(default = "TimeoutConfig::default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl TimeoutConfig {
    const fn default_connection_timeout() -> u64 {
        30
    }

    const fn default_request_timeout() -> u64 {
        60
    }

    /// Create a new timeout configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set connection timeout in seconds
    pub fn with_connection_timeout_secs(mut self, secs: u64) -> Self {
        self.connection_timeout_secs = secs;
        self
    }

    /// Set request timeout in seconds
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Get connection timeout as Duration
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate timeout configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.connection_timeout_secs == 0 {
            return Err("Connection timeout must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }
        if self.request_timeout_secs < self.connection_timeout_secs {
            return Err(
                "Request timeout must be greater than or equal to connection timeout".to_string(),
            );
        }
        Ok(())
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connection_timeout_secs: Self::default_connection_timeout(),
            request_timeout_secs: Self::default_request_timeout(),
        }
    }
}

/// Configuration for the Groq backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    /// API key for authentication; missing key fails every operation fast
    pub api_key: Option<String>,
    /// API endpoint base URL
    pub base_url: String,
    /// Models to try, in fallback order
    pub models: Vec<String>,
    /// Connection/request timeouts
    #[serde(default)]
    pub timeouts: TimeoutConfig,
    /// Total time budget for one operation across all fallback attempts
    #[serde(default = "GroqConfig::default_total_budget")]
    pub total_budget_secs: u64,
}

impl GroqConfig {
    const fn default_total_budget() -> u64 {
        150
    }

    /// Create a configuration from the process environment.
    ///
    /// Reads `GROQ_API_KEY` and (optionally) `GROQ_BASE_URL`. The key is
    /// read once here and never mutated afterwards.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = env::var("GROQ_API_KEY") {
            if !key.trim().is_empty() {
                config.api_key = Some(key);
            }
        }
        if let Ok(url) = env::var("GROQ_BASE_URL") {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        config
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the model fallback list
    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models = models.into_iter().map(Into::into).collect();
        self
    }

    /// Set timeout configuration
    pub fn with_timeouts(mut self, timeouts: TimeoutConfig) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Set the total per-operation time budget in seconds
    pub fn with_total_budget_secs(mut self, secs: u64) -> Self {
        self.total_budget_secs = secs;
        self
    }

    /// Check whether an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate the configuration.
    ///
    /// A missing API key is not a validation error: the service reports it
    /// per-operation so callers get the tagged failure value they expect.
    pub fn validate(&self) -> IntelResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(IntelError::config("base URL must not be empty"));
        }
        if self.models.is_empty() {
            return Err(IntelError::config("at least one model must be configured"));
        }
        self.timeouts.validate().map_err(IntelError::config)?;
        if self.total_budget_secs == 0 {
            return Err(IntelError::config("total budget must be greater than 0"));
        }
        Ok(())
    }
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            timeouts: TimeoutConfig::default(),
            total_budget_secs: Self::default_total_budget(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GroqConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.models.len(), 5);
        assert_eq!(config.models[0], "compound-beta");
        assert!(!config.has_api_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = GroqConfig::default()
            .with_api_key("test-key")
            .with_base_url("http://localhost:8080/v1")
            .with_models(["m1", "m2"])
            .with_total_budget_secs(30);

        assert!(config.has_api_key());
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.models, vec!["m1", "m2"]);
        assert_eq!(config.total_budget_secs, 30);
    }

    #[test]
    fn test_blank_api_key_is_not_configured() {
        let config = GroqConfig::default().with_api_key("   ");
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_validate_rejects_empty_model_list() {
        let config = GroqConfig::default().with_models(Vec::<String>::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_timeout_config_validation() {
        assert!(TimeoutConfig::default().validate().is_ok());

        let zero_request = TimeoutConfig::new().with_request_timeout_secs(0);
        assert!(zero_request.validate().is_err());

        let inverted = TimeoutConfig::new()
            .with_connection_timeout_secs(60)
            .with_request_timeout_secs(10);
        assert!(inverted.validate().is_err());
    }
}
