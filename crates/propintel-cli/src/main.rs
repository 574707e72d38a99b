//! PropIntel CLI application
//!
//! Runs one analysis intent per invocation and prints the tagged JSON
//! response to stdout. The process exits non-zero when the analysis
//! failed so shell pipelines can branch on it.

mod args;

use anyhow::{Context, Result};
use clap::Parser;
use propintel_core::{
    DealData, GroqConfig, IntelResponse, IntelService, InvestorCriteria, MarketQuery,
};
use serde::Serialize;
use serde_json::Value;

pub use args::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence; --verbose bumps the default to debug.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = GroqConfig::from_env();
    if let Some(api_key) = cli.api_key.clone() {
        config = config.with_api_key(api_key);
    }
    if let Some(base_url) = cli.base_url.clone() {
        config = config.with_base_url(base_url);
    }

    let service = IntelService::new(config).context("failed to initialize analysis service")?;
    tracing::debug!(
        base_url = %service.config().base_url,
        models = service.config().models.len(),
        "analysis service initialized"
    );

    let success = match cli.command {
        Commands::Analyze {
            description,
            location,
            price,
            property_type,
            context,
        } => {
            let deal = DealData {
                description,
                location,
                price,
                property_type,
                context,
            };
            print_response(&service.analyze_deal(&deal).await)?
        }
        Commands::Market {
            location,
            market_type,
            time_frame,
            focus_areas,
        } => {
            let query = MarketQuery {
                location,
                market_type,
                time_frame,
                focus_areas,
            };
            print_response(&service.market_insights(&query).await)?
        }
        Commands::Report { input } => {
            let property_data = read_json_input(&input)?;
            print_response(&service.investment_report(&property_data).await)?
        }
        Commands::Recommend {
            budget,
            location,
            strategy,
            risk_tolerance,
            timeline,
            property_type,
            expected_roi,
        } => {
            let criteria = InvestorCriteria {
                budget,
                location,
                strategy,
                risk_tolerance,
                timeline,
                property_type,
                expected_roi,
            };
            print_response(&service.property_recommendations(&criteria).await)?
        }
        Commands::Portfolio { input } => {
            let portfolio = read_json_input(&input)?;
            print_response(&service.optimize_portfolio(&portfolio).await)?
        }
    };

    if !success {
        std::process::exit(1);
    }
    Ok(())
}

/// Parse `--input` as inline JSON, or as `@path` pointing at a JSON file
fn read_json_input(input: &str) -> Result<Value> {
    let text = match input.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file: {}", path))?,
        None => input.to_string(),
    };
    serde_json::from_str(&text).context("input is not valid JSON")
}

/// Print the tagged response as pretty JSON and report whether it succeeded
fn print_response<T: Serialize>(response: &IntelResponse<T>) -> Result<bool> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(response.is_success())
}
