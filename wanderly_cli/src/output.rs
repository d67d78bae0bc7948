use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use wanderly_lib::catalog::AirportOption;
use wanderly_lib::display::{date_range_label, price_label, route_label};
use wanderly_lib::types::Deal;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct DealRow {
    #[tabled(rename = "Route")]
    #[serde(rename = "Route")]
    route: String,
    #[tabled(rename = "From")]
    #[serde(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    #[serde(rename = "To")]
    to: String,
    #[tabled(rename = "Dates")]
    #[serde(rename = "Dates")]
    dates: String,
    #[tabled(rename = "Days")]
    #[serde(rename = "Days")]
    days: u32,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
}

#[derive(Tabled, Serialize)]
struct AirportRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Airport")]
    #[serde(rename = "Airport")]
    name: String,
}

// -- Row builders --

fn build_deal_rows(deals: &[Deal]) -> Vec<DealRow> {
    deals
        .iter()
        .map(|d| DealRow {
            route: route_label(d),
            from: d.departure_airport.code.clone(),
            to: d.arrival_airport.code.clone(),
            dates: date_range_label(d),
            days: d.duration_days,
            price: price_label(&d.price),
        })
        .collect()
}

fn build_airport_rows(airports: &[AirportOption]) -> Vec<AirportRow> {
    airports
        .iter()
        .map(|a| AirportRow {
            code: a.code.to_string(),
            name: a.name.to_string(),
        })
        .collect()
}

// -- Table output --

pub fn print_deals_table(deals: &[Deal]) {
    println!("{}", Table::new(build_deal_rows(deals)));
}

pub fn print_airports_table(airports: &[AirportOption]) {
    println!("{}", Table::new(build_airport_rows(airports)));
}

// -- Markdown output --

pub fn print_deals_markdown(deals: &[Deal]) {
    let mut table = Table::new(build_deal_rows(deals));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_airports_markdown(airports: &[AirportOption]) {
    let mut table = Table::new(build_airport_rows(airports));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_deals_csv(deals: &[Deal]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_deal_rows(deals) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_airports_csv(airports: &[AirportOption]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_airport_rows(airports) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
