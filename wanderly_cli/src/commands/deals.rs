use std::time::Duration;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use wanderly_lib::display::{locations_summary, results_title};
use wanderly_lib::{catalog, validation};
use wanderly_lib::{Config, DealClient, SearchFilters, SearchSession, WanderlyError};

use crate::output::{print_deals_csv, print_deals_markdown, print_deals_table, print_json, OutputFormat};

#[derive(Args)]
pub struct DealsArgs {
    /// Departure airport IATA code; repeat for several (e.g. --from DUB --from ORK)
    #[arg(long = "from", value_name = "CODE")]
    pub from: Vec<String>,

    /// Search from every airport in the departure catalog
    #[arg(long, conflicts_with = "from")]
    pub all_airports: bool,

    /// Trip lengths in days, comma-separated (e.g. 3,7,14)
    #[arg(long)]
    pub durations: Option<String>,

    /// How many days ahead to search
    #[arg(long)]
    pub horizon: Option<u32>,

    /// Maximum total price for the round trip
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Override the deals API base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

pub async fn run(args: &DealsArgs, config: &Config, format: &OutputFormat) -> Result<()> {
    let filters = build_filters(args, config)?;
    let client = match &args.base_url {
        Some(url) => DealClient::with_base_url(url),
        None => DealClient::from_config(config),
    };

    eprintln!(
        "From: {} | durations: {} | horizon: {} days | max price: {}",
        locations_summary(&filters.origin_airport_codes),
        filters.durations_param(),
        filters.horizon_days,
        filters.max_price
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    pb.set_message("Searching for flights...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut session = SearchSession::new(filters);
    let result = session.search_until(&client, ctrl_c()).await;
    pb.finish_and_clear();

    match result {
        Ok(_) => {}
        Err(WanderlyError::Cancelled) => {
            eprintln!("Search cancelled.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }
    let deals = session.results();

    eprintln!("{}", results_title(deals.len()));

    match format {
        OutputFormat::Table => print_deals_table(deals),
        OutputFormat::Json => print_json(&deals),
        OutputFormat::Csv => print_deals_csv(deals)?,
        OutputFormat::Markdown => print_deals_markdown(deals),
    }

    Ok(())
}

/// Merges command-line flags over the configured defaults.
fn build_filters(args: &DealsArgs, config: &Config) -> Result<SearchFilters, WanderlyError> {
    let defaults = &config.defaults;

    let origins = if args.all_airports {
        catalog::all_departure_codes()
    } else if !args.from.is_empty() {
        validation::validate_airport_codes(&args.from)?
    } else {
        validation::validate_airport_codes(&defaults.origins)?
    };
    for code in &origins {
        if catalog::departure_airport(code).is_none() {
            tracing::warn!("{} is not in the departure catalog; sending it anyway", code);
        }
    }

    let durations = match &args.durations {
        Some(raw) => validation::validate_durations(raw)?,
        None => defaults.durations.clone(),
    };
    let horizon = validation::validate_horizon(args.horizon.unwrap_or(defaults.horizon_days))?;
    let max_price = validation::validate_max_price(args.max_price.unwrap_or(defaults.max_price))?;

    Ok(SearchFilters::default()
        .with_origins(&origins)
        .with_durations(&durations)
        .with_horizon_days(horizon)
        .with_max_price(max_price))
}

async fn ctrl_c() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
