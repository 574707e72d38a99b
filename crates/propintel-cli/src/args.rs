//! CLI argument definitions using clap
//!
//! One subcommand per analysis intent:
//! - propintel analyze --description "..." --location "..."
//! - propintel market --location "Austin, TX"
//! - propintel report --input @property.json
//! - propintel recommend --budget "$500k"
//! - propintel portfolio --input '{"properties": [...]}'

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "propintel")]
#[command(about = "PropIntel - AI-powered real estate investment analysis")]
#[command(version)]
pub struct Cli {
    /// Override the Groq API key (defaults to GROQ_API_KEY)
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the Groq API base URL
    #[arg(long, env = "GROQ_BASE_URL")]
    pub base_url: Option<String>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single property deal
    Analyze {
        /// Property description
        #[arg(long)]
        description: Option<String>,

        /// Property location
        #[arg(long)]
        location: Option<String>,

        /// Asking price
        #[arg(long)]
        price: Option<String>,

        /// Property type (residential, commercial, ...)
        #[arg(long = "type")]
        property_type: Option<String>,

        /// Additional context for the analysis
        #[arg(long)]
        context: Option<String>,
    },

    /// Generate market insights for a location
    Market {
        /// Market location
        #[arg(long)]
        location: Option<String>,

        /// Market segment (residential, commercial, ...)
        #[arg(long = "type")]
        market_type: Option<String>,

        /// Time frame of interest
        #[arg(long)]
        time_frame: Option<String>,

        /// Focus areas for the insights
        #[arg(long)]
        focus_areas: Option<String>,
    },

    /// Generate a comprehensive investment report for a property
    Report {
        /// Property data as inline JSON, or @path to a JSON file
        #[arg(long)]
        input: String,
    },

    /// Generate personalized property recommendations
    Recommend {
        /// Investment budget
        #[arg(long)]
        budget: Option<String>,

        /// Preferred location
        #[arg(long)]
        location: Option<String>,

        /// Investment strategy
        #[arg(long)]
        strategy: Option<String>,

        /// Risk tolerance (low, medium, high)
        #[arg(long)]
        risk_tolerance: Option<String>,

        /// Investment timeline
        #[arg(long)]
        timeline: Option<String>,

        /// Preferred property type
        #[arg(long = "type")]
        property_type: Option<String>,

        /// Expected ROI
        #[arg(long)]
        expected_roi: Option<String>,
    },

    /// Analyze a portfolio and suggest optimizations
    Portfolio {
        /// Portfolio data as inline JSON, or @path to a JSON file
        #[arg(long)]
        input: String,
    },
}
