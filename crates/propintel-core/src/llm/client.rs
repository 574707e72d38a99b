//! Model fallback client
//!
//! Tries each configured model in order until one returns usable content.
//! The cursor into the model list is local to each call, so concurrent
//! operations always start from the first model and cannot perturb each
//! other.

use crate::error::{IntelError, IntelResult};
use crate::llm::messages::{ChatRequest, SamplingParams};
use crate::llm::transport::ChatTransport;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, timeout};
use tracing::{debug, warn};

/// Successful completion from the first model that answered
#[derive(Debug, Clone)]
pub struct Completion {
    /// Response text
    pub content: String,
    /// Model that produced the response
    pub model: String,
    /// Number of attempts made, including the successful one
    pub attempts: usize,
}

/// Client that walks an ordered model list until one attempt succeeds
pub struct FallbackClient {
    models: Vec<String>,
    transport: Arc<dyn ChatTransport>,
    attempt_timeout: Duration,
    total_budget: Duration,
}

impl FallbackClient {
    /// Create a new fallback client.
    ///
    /// Fails if the model list is empty.
    pub fn new(
        models: Vec<String>,
        transport: Arc<dyn ChatTransport>,
        attempt_timeout: Duration,
        total_budget: Duration,
    ) -> IntelResult<Self> {
        if models.is_empty() {
            return Err(IntelError::config("no models configured for fallback"));
        }
        Ok(Self {
            models,
            transport,
            attempt_timeout,
            total_budget,
        })
    }

    /// Models in fallback order
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Send the prompt to each model in order until one returns non-empty
    /// content.
    ///
    /// Makes at most `models.len()` strictly sequential attempts. A rate
    /// limit, bad request, other non-success status, transport failure,
    /// empty response, or per-attempt timeout advances to the next model;
    /// the first success returns immediately. When every model fails the
    /// whole call fails with a single exhaustion error.
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        sampling: &SamplingParams,
    ) -> IntelResult<Completion> {
        let deadline = Instant::now() + self.total_budget;
        let mut attempts = 0;

        for model in &self.models {
            if Instant::now() >= deadline {
                warn!(attempts, "call budget exhausted before trying all models");
                return Err(IntelError::timeout(self.total_budget.as_secs()));
            }

            attempts += 1;
            let request = ChatRequest::new(model.as_str(), system, user, sampling);
            debug!(model = %model, attempt = attempts, "trying model");

            let result = match timeout(self.attempt_timeout, self.transport.send(&request)).await {
                Ok(result) => result,
                Err(_) => Err(IntelError::timeout(self.attempt_timeout.as_secs())),
            };

            match result {
                Ok(response) => match response.content() {
                    Some(content) if !content.trim().is_empty() => {
                        if attempts > 1 {
                            debug!(model = %model, attempts, "fallback model succeeded");
                        }
                        return Ok(Completion {
                            content: content.to_string(),
                            model: model.clone(),
                            attempts,
                        });
                    }
                    _ => {
                        warn!(model = %model, "empty response content, trying next model");
                    }
                },
                Err(error) => {
                    if !error.should_try_next_model() {
                        return Err(error);
                    }
                    warn!(model = %model, error = %error, "model attempt failed, trying next model");
                }
            }
        }

        Err(IntelError::exhausted(attempts))
    }
}
