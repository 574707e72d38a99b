//! Prompt templates and sampling parameters for each request intent

use crate::analysis::types::{DealData, InvestorCriteria, MarketQuery};
use crate::llm::messages::SamplingParams;
use serde_json::Value;

/// Category of request, each with its own prompt template, sampling
/// parameters, and extraction shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    DealAnalysis,
    MarketInsights,
    InvestmentReport,
    PropertyRecommendations,
    PortfolioOptimization,
}

impl Intent {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Intent::DealAnalysis => "deal-analysis",
            Intent::MarketInsights => "market-insights",
            Intent::InvestmentReport => "investment-report",
            Intent::PropertyRecommendations => "property-recommendations",
            Intent::PortfolioOptimization => "portfolio-optimization",
        }
    }

    /// Fixed system message for this intent
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Intent::DealAnalysis => DEAL_SYSTEM_PROMPT,
            Intent::MarketInsights => MARKET_SYSTEM_PROMPT,
            Intent::InvestmentReport => REPORT_SYSTEM_PROMPT,
            Intent::PropertyRecommendations => RECOMMENDATION_SYSTEM_PROMPT,
            Intent::PortfolioOptimization => PORTFOLIO_SYSTEM_PROMPT,
        }
    }

    /// Fixed sampling parameters for this intent
    pub fn sampling(&self) -> SamplingParams {
        match self {
            Intent::DealAnalysis => SamplingParams::new(0.3, 1500).with_top_p(0.9),
            Intent::MarketInsights => SamplingParams::new(0.4, 1400),
            Intent::InvestmentReport => SamplingParams::new(0.3, 1600),
            Intent::PropertyRecommendations => SamplingParams::new(0.4, 1200),
            Intent::PortfolioOptimization => SamplingParams::new(0.3, 1300),
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

const DEAL_SYSTEM_PROMPT: &str = "You are RealEstate AI Agent v3.0, an expert real estate \
investment advisor with deep market knowledge, financial analysis expertise, and strategic \
investment planning capabilities. Provide comprehensive, actionable insights for real estate \
investors.";

const MARKET_SYSTEM_PROMPT: &str = "You are a real estate market intelligence analyst with \
expertise in market trends, investment opportunities, and economic factors affecting real \
estate markets.";

const REPORT_SYSTEM_PROMPT: &str = "You are a senior real estate investment analyst \
specializing in comprehensive property investment reports and due diligence analysis.";

const RECOMMENDATION_SYSTEM_PROMPT: &str = "You are an expert real estate investment advisor \
and property recommendation specialist. Provide detailed, personalized investment \
recommendations based on client criteria.";

const PORTFOLIO_SYSTEM_PROMPT: &str = "You are a real estate portfolio optimization expert \
specializing in maximizing returns and minimizing risk through strategic asset allocation \
and management.";

/// Build the user prompt for a deal analysis request
pub fn deal_analysis_prompt(deal: &DealData) -> String {
    format!(
        "You are an expert real estate AI agent with deep knowledge of market analysis, \
investment strategies, and property valuation. Analyze this real estate opportunity and \
provide comprehensive insights:

PROPERTY DETAILS:
- Description: {description}
- Location: {location}
- Price: {price}
- Property Type: {property_type}
- Context: {context}

ANALYSIS FRAMEWORK:
Please provide a detailed analysis as a real estate expert would, covering:

PROPERTY EVALUATION:
- Location analysis and neighborhood assessment
- Property condition and value assessment
- Market positioning and competitiveness

FINANCIAL ANALYSIS:
- Investment score (0-100) with detailed explanation
- ROI calculations and projections
- Cash flow analysis potential
- Break-even analysis timeframes

RISK ASSESSMENT:
- Risk level (Low/Medium/High) with specific factors
- Market volatility considerations
- Mitigation strategies

MARKET INTELLIGENCE:
- Current market trends affecting this property
- Comparable sales and rental data insights
- Growth potential and appreciation forecasts

STRATEGIC RECOMMENDATIONS:
- Investment strategy recommendations
- Optimal financing approaches
- Value-add opportunities and exit strategy options

ACTIONABLE INSIGHTS:
- Immediate next steps for the investor
- Due diligence checklist items
- Negotiation strategies and timeline recommendations

Please write in a professional, conversational tone as an expert real estate advisor. Use \
specific numbers, percentages, and actionable insights. Structure your response with clear \
sections and bullet points for easy reading.

If the query is general or about market trends, focus on providing market intelligence and \
investment guidance relevant to real estate investors.",
        description = deal.description.as_deref().unwrap_or("N/A"),
        location = deal.location.as_deref().unwrap_or("N/A"),
        price = deal.price.as_deref().unwrap_or("N/A"),
        property_type = deal.property_type.as_deref().unwrap_or("N/A"),
        context = deal.context.as_deref().unwrap_or("Investment analysis request"),
    )
}

/// Build the user prompt for a market insights request
pub fn market_insights_prompt(query: &MarketQuery) -> String {
    format!(
        "As a real estate market intelligence specialist, analyze current market conditions \
and provide comprehensive insights:

MARKET ANALYSIS REQUEST:
- Location: {location}
- Market Type: {market_type}
- Time Frame: {time_frame}
- Focus Areas: {focus_areas}

COMPREHENSIVE MARKET ANALYSIS:

1. CURRENT MARKET CONDITIONS
   - Market temperature and activity levels
   - Inventory analysis and supply/demand dynamics
   - Price trend analysis and momentum indicators

2. INVESTMENT OPPORTUNITIES
   - Emerging neighborhoods with growth potential
   - Undervalued market segments
   - Value-add and turnaround opportunities

3. MARKET DRIVERS AND CATALYSTS
   - Economic factors affecting the market
   - Infrastructure and development projects
   - Demographic shifts and population trends

4. RISK FACTORS AND CONSIDERATIONS
   - Market volatility indicators
   - Economic sensitivity factors
   - Regulatory and policy risks

5. STRATEGIC RECOMMENDATIONS
   - Optimal investment strategies for current conditions
   - Market timing recommendations
   - Property type focus areas

6. MARKET FORECAST AND OUTLOOK
   - Short-term market predictions (6-12 months)
   - Long-term growth projections (2-5 years)
   - Key indicators to monitor

Provide specific, actionable insights with data-driven recommendations for real estate \
investors.",
        location = query.location.as_deref().unwrap_or("General Market"),
        market_type = query.market_type.as_deref().unwrap_or("Residential"),
        time_frame = query.time_frame.as_deref().unwrap_or("Current"),
        focus_areas = query.focus_areas.as_deref().unwrap_or("Investment Opportunities"),
    )
}

/// Build the user prompt for an investment report request
pub fn investment_report_prompt(property_data: &Value) -> String {
    format!(
        "Generate a comprehensive real estate investment report based on the following \
criteria:

INVESTMENT PARAMETERS:
{parameters}

EXECUTIVE INVESTMENT REPORT:

Please provide a detailed investment analysis structured as follows:

EXECUTIVE SUMMARY
- Investment overview and key highlights
- Primary recommendation and rationale
- Expected returns and timeline

PROPERTY ANALYSIS
- Location scoring and market position
- Property condition and improvement needs
- Competitive advantages and unique features

FINANCIAL PROJECTIONS
- Purchase price analysis and negotiation range
- Cash flow projections (monthly/annual)
- ROI calculations and break-even analysis

MARKET CONTEXT
- Local market conditions and trends
- Comparable sales and rental analysis
- Neighborhood growth indicators

RISK ASSESSMENT
- Primary risk factors and probability
- Market risks and economic sensitivity
- Mitigation strategies and contingencies

IMPLEMENTATION STRATEGY
- Acquisition timeline and milestones
- Financing recommendations and options
- Value enhancement opportunities

CONCLUSION AND RECOMMENDATIONS
- Overall investment grade (A-F scale)
- Action plan and next steps
- Key success factors

Structure this as a professional investment report with specific numbers, percentages, and \
actionable recommendations.",
        parameters = pretty_payload(property_data),
    )
}

/// Build the user prompt for a property recommendations request
pub fn recommendations_prompt(criteria: &InvestorCriteria) -> String {
    format!(
        "As an expert real estate AI agent, analyze these investment criteria and provide \
personalized property recommendations:

INVESTOR PROFILE:
- Budget: {budget}
- Location Preferences: {location}
- Investment Strategy: {strategy}
- Risk Tolerance: {risk_tolerance}
- Investment Timeline: {timeline}
- Property Type Preference: {property_type}
- Expected ROI: {expected_roi}

PERSONALIZED RECOMMENDATIONS:

Please provide:

1. TOP 3 PROPERTY RECOMMENDATIONS with specific characteristics that match the criteria
2. INVESTMENT STRATEGIES tailored to this investor profile
3. MARKET OPPORTUNITIES currently available in preferred locations
4. FINANCING RECOMMENDATIONS based on budget and strategy
5. RISK MITIGATION STRATEGIES for the recommended investments
6. PORTFOLIO DIVERSIFICATION suggestions
7. MARKET TIMING advice for optimal entry points

Structure as a comprehensive investment advisory report with actionable recommendations.",
        budget = criteria.budget.as_deref().unwrap_or("Not specified"),
        location = criteria.location.as_deref().unwrap_or("Flexible"),
        strategy = criteria.strategy.as_deref().unwrap_or("Not specified"),
        risk_tolerance = criteria.risk_tolerance.as_deref().unwrap_or("Medium"),
        timeline = criteria.timeline.as_deref().unwrap_or("Long-term"),
        property_type = criteria.property_type.as_deref().unwrap_or("Open to all"),
        expected_roi = criteria.expected_roi.as_deref().unwrap_or("Market average"),
    )
}

/// Build the user prompt for a portfolio optimization request
pub fn portfolio_prompt(portfolio: &Value) -> String {
    format!(
        "As a real estate portfolio optimization specialist, analyze this investment \
portfolio and provide optimization recommendations:

CURRENT PORTFOLIO:
{portfolio}

PORTFOLIO OPTIMIZATION ANALYSIS:

1. CURRENT PORTFOLIO ASSESSMENT
   - Asset allocation analysis
   - Geographic diversification review
   - Risk concentration analysis

2. PERFORMANCE METRICS
   - Portfolio-wide ROI analysis
   - Cash flow optimization opportunities
   - Risk-adjusted returns assessment

3. OPTIMIZATION STRATEGIES
   - Rebalancing recommendations
   - Underperforming asset identification
   - Exit strategy recommendations

4. DIVERSIFICATION IMPROVEMENTS
   - Geographic expansion suggestions
   - Property type diversification

5. ACTIONABLE RECOMMENDATIONS
   - Specific buy/sell/hold decisions
   - Refinancing opportunities
   - Value-add project priorities

Provide specific, actionable recommendations with projected impact on portfolio \
performance.",
        portfolio = pretty_payload(portfolio),
    )
}

fn pretty_payload(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_prompt_substitutes_missing_fields() {
        let prompt = deal_analysis_prompt(&DealData::default());
        assert!(prompt.contains("- Description: N/A"));
        assert!(prompt.contains("- Context: Investment analysis request"));
    }

    #[test]
    fn test_deal_prompt_includes_payload_fields() {
        let deal = DealData {
            location: Some("Austin, TX".to_string()),
            price: Some("$450,000".to_string()),
            ..Default::default()
        };
        let prompt = deal_analysis_prompt(&deal);
        assert!(prompt.contains("- Location: Austin, TX"));
        assert!(prompt.contains("- Price: $450,000"));
    }

    #[test]
    fn test_market_prompt_defaults() {
        let prompt = market_insights_prompt(&MarketQuery::default());
        assert!(prompt.contains("- Location: General Market"));
        assert!(prompt.contains("- Market Type: Residential"));
    }

    #[test]
    fn test_report_prompt_embeds_json_payload() {
        let payload = serde_json::json!({"budget": 500000, "market": "Denver"});
        let prompt = investment_report_prompt(&payload);
        assert!(prompt.contains("\"market\": \"Denver\""));
    }

    #[test]
    fn test_sampling_per_intent() {
        assert_eq!(Intent::DealAnalysis.sampling().max_tokens, 1500);
        assert_eq!(Intent::DealAnalysis.sampling().top_p, Some(0.9));
        assert_eq!(Intent::MarketInsights.sampling().max_tokens, 1400);
        assert_eq!(Intent::InvestmentReport.sampling().max_tokens, 1600);
        assert_eq!(Intent::PropertyRecommendations.sampling().max_tokens, 1200);
        assert_eq!(Intent::PortfolioOptimization.sampling().max_tokens, 1300);
    }

    #[test]
    fn test_intent_names() {
        assert_eq!(Intent::DealAnalysis.name(), "deal-analysis");
        assert_eq!(Intent::PortfolioOptimization.name(), "portfolio-optimization");
    }
}
