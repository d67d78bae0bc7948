use anyhow::Result;
use wanderly_lib::catalog::{DEPARTURE_AIRPORTS, DURATION_CHOICES};

use crate::output::{
    print_airports_csv, print_airports_markdown, print_airports_table, print_json, OutputFormat,
};

pub fn run(format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_airports_table(DEPARTURE_AIRPORTS),
        OutputFormat::Json => print_json(&DEPARTURE_AIRPORTS),
        OutputFormat::Csv => print_airports_csv(DEPARTURE_AIRPORTS)?,
        OutputFormat::Markdown => print_airports_markdown(DEPARTURE_AIRPORTS),
    }

    let choices: Vec<String> = DURATION_CHOICES.iter().map(|d| d.to_string()).collect();
    eprintln!("Suggested durations (days): {}", choices.join(", "));
    Ok(())
}
