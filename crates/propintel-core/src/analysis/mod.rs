//! Request intents, payload/result types, and response-text extraction

pub mod extract;
pub mod prompts;
pub mod types;

pub use prompts::Intent;
pub use types::{
    DealAnalysis, DealData, IntelResponse, InvestmentReport, InvestorCriteria, MarketInsights,
    MarketQuery, MarketReport, PortfolioAnalysis, PortfolioReport, Recommendations,
    RecommendationReport, ReportAnalysis, RiskLevel,
};
