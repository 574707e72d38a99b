//! Real estate intelligence service
//!
//! The five public operations mirror the dashboard contract: each resolves
//! to a tagged success/failure value (`IntelResponse`) and never returns an
//! `Err` to the caller. A missing API key fails every operation before any
//! network call.

use crate::analysis::extract;
use crate::analysis::prompts::{self, Intent};
use crate::analysis::types::{
    DealAnalysis, DealData, IntelResponse, InvestmentReport, InvestorCriteria, MarketQuery,
    MarketReport, PortfolioReport, RecommendationReport,
};
use crate::config::GroqConfig;
use crate::error::{IntelError, IntelResult};
use crate::llm::client::{Completion, FallbackClient};
use crate::llm::transport::{ChatTransport, HttpTransport};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const MISSING_KEY_ERROR: &str =
    "Groq API key not configured. Please set GROQ_API_KEY environment variable.";

/// Service wrapping the model fallback client with the five analysis
/// intents
pub struct IntelService {
    config: GroqConfig,
    client: FallbackClient,
}

impl IntelService {
    /// Create a service backed by the real HTTP transport
    pub fn new(config: GroqConfig) -> IntelResult<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Self::with_transport(config, transport)
    }

    /// Create a service with an injected transport (used by tests)
    pub fn with_transport(
        config: GroqConfig,
        transport: Arc<dyn ChatTransport>,
    ) -> IntelResult<Self> {
        config.validate()?;
        let client = FallbackClient::new(
            config.models.clone(),
            transport,
            config.timeouts.request_timeout(),
            Duration::from_secs(config.total_budget_secs),
        )?;
        Ok(Self { config, client })
    }

    /// The configuration this service was built with
    pub fn config(&self) -> &GroqConfig {
        &self.config
    }

    /// Analyze a single property deal
    pub async fn analyze_deal(&self, deal: &DealData) -> IntelResponse<DealAnalysis> {
        let prompt = prompts::deal_analysis_prompt(deal);
        match self.complete(Intent::DealAnalysis, &prompt).await {
            Ok(completion) => IntelResponse::ok(extract::deal_analysis(&completion.content)),
            Err(error) => IntelResponse::failure(error.to_string()),
        }
    }

    /// Generate market insights for a location
    pub async fn market_insights(&self, query: &MarketQuery) -> IntelResponse<MarketReport> {
        let prompt = prompts::market_insights_prompt(query);
        match self.complete(Intent::MarketInsights, &prompt).await {
            Ok(completion) => IntelResponse::ok(MarketReport {
                market_insights: extract::market_insights(&completion.content),
                raw_response: completion.content,
                requested_market: query.clone(),
            }),
            Err(error) => IntelResponse::failure(error.to_string()),
        }
    }

    /// Generate a comprehensive investment report
    pub async fn investment_report(&self, property_data: &Value) -> IntelResponse<InvestmentReport> {
        let prompt = prompts::investment_report_prompt(property_data);
        match self.complete(Intent::InvestmentReport, &prompt).await {
            Ok(completion) => IntelResponse::ok(InvestmentReport {
                report_analysis: extract::report_analysis(&completion.content),
                raw_response: completion.content,
                property_data: property_data.clone(),
            }),
            Err(error) => IntelResponse::failure(error.to_string()),
        }
    }

    /// Generate personalized property recommendations
    pub async fn property_recommendations(
        &self,
        criteria: &InvestorCriteria,
    ) -> IntelResponse<RecommendationReport> {
        let prompt = prompts::recommendations_prompt(criteria);
        match self.complete(Intent::PropertyRecommendations, &prompt).await {
            Ok(completion) => IntelResponse::ok(RecommendationReport {
                recommendations: extract::recommendations(&completion.content),
                raw_response: completion.content,
                investor_profile: criteria.clone(),
            }),
            Err(error) => IntelResponse::failure(error.to_string()),
        }
    }

    /// Analyze a portfolio and produce optimization recommendations
    pub async fn optimize_portfolio(&self, portfolio: &Value) -> IntelResponse<PortfolioReport> {
        let prompt = prompts::portfolio_prompt(portfolio);
        match self.complete(Intent::PortfolioOptimization, &prompt).await {
            Ok(completion) => IntelResponse::ok(PortfolioReport {
                portfolio_analysis: extract::portfolio_analysis(&completion.content),
                raw_response: completion.content,
                current_portfolio: portfolio.clone(),
            }),
            Err(error) => IntelResponse::failure(error.to_string()),
        }
    }

    /// Run one intent through the fallback loop.
    ///
    /// The credential gate runs first so that a missing key makes zero
    /// network calls.
    async fn complete(&self, intent: Intent, prompt: &str) -> IntelResult<Completion> {
        if !self.config.has_api_key() {
            warn!(intent = intent.name(), "request rejected: no API key configured");
            return Err(IntelError::config(MISSING_KEY_ERROR));
        }

        match self
            .client
            .complete(intent.system_prompt(), prompt, &intent.sampling())
            .await
        {
            Ok(completion) => {
                info!(
                    intent = intent.name(),
                    model = %completion.model,
                    attempts = completion.attempts,
                    "analysis completed"
                );
                Ok(completion)
            }
            Err(error) => {
                warn!(intent = intent.name(), error = %error, "analysis failed");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::RiskLevel;
    use crate::error::{IntelError, IntelResult};
    use crate::llm::messages::{ChatRequest, ChatResponse};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedTransport {
        replies: Mutex<VecDeque<IntelResult<ChatResponse>>>,
        calls: AtomicUsize,
    }

    impl ScriptedTransport {
        fn new(replies: Vec<IntelResult<ChatResponse>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatTransport for ScriptedTransport {
        async fn send(&self, request: &ChatRequest) -> IntelResult<ChatResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(IntelError::api("script exhausted", request.model.clone())))
        }
    }

    fn config_with_key(models: &[&str]) -> GroqConfig {
        GroqConfig::default()
            .with_api_key("test-key")
            .with_models(models.to_vec())
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_fast_with_zero_calls() {
        let transport = ScriptedTransport::new(vec![]);
        let config = GroqConfig::default().with_models(["m1"]);
        let service = IntelService::with_transport(config, transport.clone()).unwrap();

        let response = service.analyze_deal(&DealData::default()).await;
        assert!(!response.is_success());
        assert!(response.error.unwrap().contains("API key"));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_key_failure_names_the_env_variable() {
        let transport = ScriptedTransport::new(vec![]);
        let config = GroqConfig::default().with_models(["m1"]);
        let service = IntelService::with_transport(config, transport).unwrap();

        let response = service.optimize_portfolio(&serde_json::json!({})).await;
        let message = response.error.unwrap();
        assert!(message.contains("GROQ_API_KEY"));
        assert!(message.contains("Configuration error"));
    }

    #[tokio::test]
    async fn test_deal_analysis_falls_back_then_extracts_fields() {
        let transport = ScriptedTransport::new(vec![
            Err(IntelError::api_with_status("rate limited", "m1", 429)),
            Ok(ChatResponse::from_content(
                "Investment score: 82/100. ROI: 14.5%. Risk: medium.",
            )),
        ]);
        let config = config_with_key(&["m1", "m2"]);
        let service = IntelService::with_transport(config, transport.clone()).unwrap();

        let response = service.analyze_deal(&DealData::default()).await;
        assert!(response.is_success());
        let analysis = response.data.unwrap();
        assert_eq!(analysis.score, 82);
        assert_eq!(analysis.roi, 14.5);
        assert_eq!(analysis.risk_level, RiskLevel::Medium);
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_single_model_bad_request_exhausts_after_one_attempt() {
        let transport = ScriptedTransport::new(vec![Err(IntelError::api_with_status(
            "model unavailable",
            "m1",
            400,
        ))]);
        let config = config_with_key(&["m1"]);
        let service = IntelService::with_transport(config, transport.clone()).unwrap();

        let response = service.analyze_deal(&DealData::default()).await;
        assert!(!response.is_success());
        assert!(response.error.unwrap().contains("All models failed"));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_market_insights_wraps_raw_response_and_echoes_request() {
        let transport = ScriptedTransport::new(vec![Ok(ChatResponse::from_content(
            "An emerging opportunity in Austin. The best strategy is patience.",
        ))]);
        let config = config_with_key(&["m1"]);
        let service = IntelService::with_transport(config, transport).unwrap();

        let query = MarketQuery {
            location: Some("Austin".to_string()),
            ..Default::default()
        };
        let response = service.market_insights(&query).await;
        assert!(response.is_success());
        let report = response.data.unwrap();
        assert!(report.raw_response.contains("Austin"));
        assert_eq!(report.requested_market, query);
        assert_eq!(report.market_insights.opportunities.len(), 1);
    }

    #[tokio::test]
    async fn test_investment_report_echoes_payload() {
        let transport = ScriptedTransport::new(vec![Ok(ChatResponse::from_content(
            "EXECUTIVE SUMMARY\n- We recommend buying. Risk is manageable.",
        ))]);
        let config = config_with_key(&["m1"]);
        let service = IntelService::with_transport(config, transport).unwrap();

        let payload = serde_json::json!({"budget": 500000});
        let response = service.investment_report(&payload).await;
        assert!(response.is_success());
        let report = response.data.unwrap();
        assert_eq!(report.property_data, payload);
        assert!(!report.report_analysis.key_findings.is_empty());
    }

    #[tokio::test]
    async fn test_portfolio_optimization_extracts_actions() {
        let transport = ScriptedTransport::new(vec![Ok(ChatResponse::from_content(
            "Sell the condo.\nHold the rentals.",
        ))]);
        let config = config_with_key(&["m1"]);
        let service = IntelService::with_transport(config, transport).unwrap();

        let response = service.optimize_portfolio(&serde_json::json!({})).await;
        assert!(response.is_success());
        let report = response.data.unwrap();
        assert_eq!(report.portfolio_analysis.optimization_actions.len(), 2);
    }

    #[tokio::test]
    async fn test_recommendations_echo_investor_profile() {
        let transport = ScriptedTransport::new(vec![Ok(ChatResponse::from_content(
            "1. Duplex in Austin\n2. Condo in Tampa",
        ))]);
        let config = config_with_key(&["m1"]);
        let service = IntelService::with_transport(config, transport).unwrap();

        let criteria = InvestorCriteria {
            budget: Some("$500k".to_string()),
            ..Default::default()
        };
        let response = service.property_recommendations(&criteria).await;
        assert!(response.is_success());
        let report = response.data.unwrap();
        assert_eq!(report.investor_profile, criteria);
        assert_eq!(report.recommendations.top_recommendations.len(), 2);
    }
}
