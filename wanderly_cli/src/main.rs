mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use wanderly_lib::Config;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "wanderly")]
#[command(about = "Search cheap round-trip flight deals")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for deals
    Deals(commands::deals::DealsArgs),
    /// List departure airports
    Airports,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wanderly=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let config = Config::load()?;

    match &cli.command {
        Commands::Deals(args) => commands::deals::run(args, &config, &format).await?,
        Commands::Airports => commands::airports::run(&format)?,
    }

    Ok(())
}
