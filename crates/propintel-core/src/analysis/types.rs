//! Payload and result types for the analysis intents
//!
//! Result shapes serialize in camelCase because the dashboard consumes
//! them as JSON. Payload fields are all optional; missing values are
//! substituted with placeholders when prompts are built.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller-visible outcome of every operation.
///
/// Operations never surface an `Err` past the service boundary; failure is
/// a tagged value so the UI can substitute canned content deterministically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> IntelResponse<T> {
    /// Successful response carrying extracted data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed response carrying a descriptive message
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Check whether the response carries data
    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// A property deal to analyze
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealData {
    pub description: Option<String>,
    pub location: Option<String>,
    pub price: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub context: Option<String>,
}

/// A market insights request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketQuery {
    pub location: Option<String>,
    pub market_type: Option<String>,
    pub time_frame: Option<String>,
    pub focus_areas: Option<String>,
}

/// An investor profile for property recommendations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorCriteria {
    pub budget: Option<String>,
    pub location: Option<String>,
    pub strategy: Option<String>,
    pub risk_tolerance: Option<String>,
    pub timeline: Option<String>,
    pub property_type: Option<String>,
    pub expected_roi: Option<String>,
}

/// Risk level extracted from the response text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(format!("unknown risk level: {}", other)),
        }
    }
}

/// Structured-ish fields recovered from a deal analysis response.
///
/// Fields the text did not contain are backfilled with plausible defaults;
/// treat them as best-effort annotation, not validated data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealAnalysis {
    /// Investment score out of 100
    pub score: u8,
    /// Projected return on investment, percent
    pub roi: f64,
    pub risk_level: RiskLevel,
    /// Profit potential, percent
    pub profit_potential: f64,
    pub market_trend: String,
    pub recommendations: Vec<String>,
    /// Full response text
    pub analysis: String,
}

/// Keyword-filtered highlights from a market insights response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsights {
    pub trend: String,
    pub opportunities: Vec<String>,
    pub strategies: Vec<String>,
    pub risk_factors: Vec<String>,
}

/// Market insights wrapped with the raw response and the echoed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketReport {
    pub raw_response: String,
    pub market_insights: MarketInsights,
    pub requested_market: MarketQuery,
}

/// Sections recovered from an investment report response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportAnalysis {
    pub executive_summary: String,
    pub key_findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_assessment: Vec<String>,
}

/// Investment report wrapped with the raw response and the input payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentReport {
    pub raw_response: String,
    pub report_analysis: ReportAnalysis,
    pub property_data: Value,
}

/// Recommendation highlights from a property recommendation response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub top_recommendations: Vec<String>,
    pub strategies: Vec<String>,
    pub market_opportunities: Vec<String>,
}

/// Recommendations wrapped with the raw response and the investor profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub raw_response: String,
    pub recommendations: Recommendations,
    pub investor_profile: InvestorCriteria,
}

/// Action items recovered from a portfolio optimization response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalysis {
    pub optimization_actions: Vec<String>,
    pub diversification_tips: Vec<String>,
    pub performance_improvements: Vec<String>,
}

/// Portfolio analysis wrapped with the raw response and the input payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub raw_response: String,
    pub portfolio_analysis: PortfolioAnalysis,
    pub current_portfolio: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_tagging() {
        let ok: IntelResponse<u32> = IntelResponse::ok(7);
        assert!(ok.is_success());
        assert_eq!(ok.data, Some(7));
        assert_eq!(ok.error, None);

        let failed: IntelResponse<u32> = IntelResponse::failure("nope");
        assert!(!failed.is_success());
        assert_eq!(failed.data, None);
        assert_eq!(failed.error.as_deref(), Some("nope"));
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = IntelResponse::ok(DealAnalysis {
            score: 80,
            roi: 12.0,
            risk_level: RiskLevel::Low,
            profit_potential: 20.0,
            market_trend: "stable".to_string(),
            recommendations: vec![],
            analysis: String::new(),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["riskLevel"], "low");
        assert_eq!(json["data"]["profitPotential"], 20.0);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_risk_level_parsing() {
        assert_eq!("Low".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
        assert_eq!("HIGH".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert!("severe".parse::<RiskLevel>().is_err());
        assert_eq!(RiskLevel::default(), RiskLevel::Medium);
    }

    #[test]
    fn test_deal_data_uses_type_field_name() {
        let deal = DealData {
            property_type: Some("duplex".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&deal).unwrap();
        assert_eq!(json["type"], "duplex");
    }
}
