//! PropIntel Core Library
//!
//! This crate provides the AI analysis engine behind the PropIntel real
//! estate dashboard: a chat-completion client that tries an ordered list of
//! Groq models until one answers, plus best-effort extraction of structured
//! investment fields from the model's free-text response.

pub mod analysis;
pub mod config;
pub mod error;
pub mod llm;
pub mod service;

// Re-export commonly used types
pub use analysis::{
    DealAnalysis, DealData, IntelResponse, InvestorCriteria, MarketQuery, RiskLevel,
};
pub use config::{GroqConfig, TimeoutConfig};
pub use error::{IntelError, IntelResult};
pub use llm::{ChatMessage, ChatRequest, ChatResponse, ChatTransport, FallbackClient};
pub use service::IntelService;
