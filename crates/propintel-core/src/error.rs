//! Error types for PropIntel operations

use thiserror::Error;

/// Result type alias for PropIntel operations
pub type IntelResult<T> = Result<T, IntelError>;

/// Main error type for the PropIntel analysis engine
#[derive(Error, Debug, Clone)]
pub enum IntelError {
    /// Configuration related errors (missing credential, bad settings)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Chat completion API errors (non-success status from a model)
    #[error("API error: {message}")]
    Api {
        message: String,
        model: Option<String>,
        status_code: Option<u16>,
    },

    /// HTTP transport errors (connection failures, client build failures)
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        status_code: Option<u16>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// Request timed out
    #[error("Request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    /// Every configured model was tried and failed
    #[error("All models failed after {attempts} attempts")]
    Exhausted { attempts: usize },
}

impl IntelError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new API error for a specific model
    pub fn api(message: impl Into<String>, model: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            model: Some(model.into()),
            status_code: None,
        }
    }

    /// Create an API error carrying the HTTP status code
    pub fn api_with_status(
        message: impl Into<String>,
        model: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self::Api {
            message: message.into(),
            model: Some(model.into()),
            status_code: Some(status_code),
        }
    }

    /// Create a new HTTP transport error
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }

    /// Create a new timeout error
    pub fn timeout(seconds: u64) -> Self {
        Self::Timeout { seconds }
    }

    /// Create a new exhaustion error
    pub fn exhausted(attempts: usize) -> Self {
        Self::Exhausted { attempts }
    }

    /// Get the HTTP status code associated with this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } | Self::Http { status_code, .. } => *status_code,
            _ => None,
        }
    }

    /// Check if this error indicates the model rate limited the request
    pub fn is_rate_limited(&self) -> bool {
        self.status_code() == Some(429)
    }

    /// Check if this error indicates the model rejected the request
    pub fn is_bad_request(&self) -> bool {
        self.status_code() == Some(400)
    }

    /// Check if the fallback loop should advance to the next model.
    ///
    /// Rate limits, bad requests, other non-success statuses, transport
    /// failures, unparseable bodies, and per-attempt timeouts are all
    /// recoverable by trying the next model in the list. Configuration
    /// errors and exhaustion are terminal.
    pub fn should_try_next_model(&self) -> bool {
        !matches!(self, Self::Config { .. } | Self::Exhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            IntelError::config("missing key").to_string(),
            "Configuration error: missing key"
        );
        assert_eq!(
            IntelError::exhausted(3).to_string(),
            "All models failed after 3 attempts"
        );
        assert_eq!(
            IntelError::timeout(60).to_string(),
            "Request timed out after 60 seconds"
        );
    }

    #[test]
    fn test_status_code_classifiers() {
        let rate_limited = IntelError::api_with_status("too many requests", "m1", 429);
        assert!(rate_limited.is_rate_limited());
        assert!(!rate_limited.is_bad_request());

        let bad_request = IntelError::api_with_status("model decommissioned", "m1", 400);
        assert!(bad_request.is_bad_request());
        assert_eq!(bad_request.status_code(), Some(400));
    }

    #[test]
    fn test_recoverable_errors_advance_the_cursor() {
        assert!(IntelError::api_with_status("rate limited", "m1", 429).should_try_next_model());
        assert!(IntelError::api_with_status("bad request", "m1", 400).should_try_next_model());
        assert!(IntelError::api("server error", "m1").should_try_next_model());
        assert!(IntelError::http("connection refused").should_try_next_model());
        assert!(IntelError::json("unexpected body").should_try_next_model());
        assert!(IntelError::timeout(5).should_try_next_model());
    }

    #[test]
    fn test_terminal_errors_do_not_advance() {
        assert!(!IntelError::config("no credential").should_try_next_model());
        assert!(!IntelError::exhausted(5).should_try_next_model());
    }
}
