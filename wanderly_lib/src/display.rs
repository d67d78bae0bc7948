//! Presentation helpers. Everything here is pure and never fails: input
//! that cannot be formatted is shown as-is.

use chrono::NaiveDate;
use wanderly_api::types::{Deal, Price};

/// Reformats an ISO-8601 full date (`2025-09-01`) as `01.09.2025`.
///
/// Returns the input unchanged unless it is exactly `YYYY-MM-DD` and a
/// real calendar date.
pub fn format_display_date(date: &str) -> String {
    if !is_full_date_shape(date) {
        return date.to_string();
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d.%m.%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

// chrono accepts unpadded fields, a sign and leading whitespace.
fn is_full_date_shape(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// "Dublin → Barcelona"
pub fn route_label(deal: &Deal) -> String {
    format!(
        "{} → {}",
        deal.departure_airport.city, deal.arrival_airport.city
    )
}

/// "01.09.2025 – 08.09.2025"
pub fn date_range_label(deal: &Deal) -> String {
    format!(
        "{} – {}",
        format_display_date(&deal.departure_date),
        format_display_date(&deal.return_date)
    )
}

/// "89.99 EUR"
pub fn price_label(price: &Price) -> String {
    format!("{:.2} {}", price.value, price.currency)
}

/// Short summary of the selected departure airports.
pub fn locations_summary(codes: &[String]) -> String {
    match codes.len() {
        0 => "None selected".to_string(),
        1 | 2 => codes.join(", "),
        n => format!("{} airports selected", n),
    }
}

pub fn results_title(count: usize) -> String {
    format!("Search Results ({})", count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wanderly_api::types::Airport;

    fn sample_deal() -> Deal {
        Deal {
            id: "2f1d6c1e-8a4b-4c1f-9f7a-1d2e3f4a5b6c".to_string(),
            departure_airport: Airport {
                code: "DUB".to_string(),
                city: "Dublin".to_string(),
            },
            arrival_airport: Airport {
                code: "BCN".to_string(),
                city: "Barcelona".to_string(),
            },
            departure_date: "2025-09-01".to_string(),
            return_date: "2025-09-08".to_string(),
            duration_days: 7,
            price: Price {
                value: 89.99,
                currency: "EUR".to_string(),
            },
        }
    }

    // -- format_display_date --

    #[test]
    fn display_date_iso() {
        assert_eq!(format_display_date("2025-09-01"), "01.09.2025");
        assert_eq!(format_display_date("2024-12-31"), "31.12.2024");
    }

    #[test]
    fn display_date_unparseable_is_unchanged() {
        assert_eq!(format_display_date("not-a-date"), "not-a-date");
        assert_eq!(format_display_date(""), "");
        assert_eq!(format_display_date("2025-02-30"), "2025-02-30");
        assert_eq!(format_display_date("2025-09-01T10:00:00Z"), "2025-09-01T10:00:00Z");
    }

    #[test]
    fn display_date_requires_padded_fields() {
        assert_eq!(format_display_date("2025-9-1"), "2025-9-1");
        assert_eq!(format_display_date("2025-09-1"), "2025-09-1");
        assert_eq!(format_display_date(" 2025-09-01"), " 2025-09-01");
        assert_eq!(format_display_date("+2025-09-01"), "+2025-09-01");
        assert_eq!(format_display_date("2025/09/01"), "2025/09/01");
    }

    // -- Deal labels --

    #[test]
    fn route_and_dates() {
        let deal = sample_deal();
        assert_eq!(route_label(&deal), "Dublin → Barcelona");
        assert_eq!(date_range_label(&deal), "01.09.2025 – 08.09.2025");
    }

    #[test]
    fn date_range_keeps_bad_dates() {
        let mut deal = sample_deal();
        deal.return_date = "soon".to_string();
        assert_eq!(date_range_label(&deal), "01.09.2025 – soon");
    }

    #[test]
    fn price_two_decimals() {
        assert_eq!(price_label(&sample_deal().price), "89.99 EUR");
        let whole = Price {
            value: 132.0,
            currency: "EUR".to_string(),
        };
        assert_eq!(price_label(&whole), "132.00 EUR");
    }

    // -- Summaries --

    #[test]
    fn locations_summary_variants() {
        assert_eq!(locations_summary(&[]), "None selected");
        assert_eq!(locations_summary(&["DUB".to_string()]), "DUB");
        assert_eq!(
            locations_summary(&["DUB".to_string(), "ORK".to_string()]),
            "DUB, ORK"
        );
        assert_eq!(
            locations_summary(&["DUB".to_string(), "ORK".to_string(), "SNN".to_string()]),
            "3 airports selected"
        );
    }

    #[test]
    fn results_title_count() {
        assert_eq!(results_title(0), "Search Results (0)");
        assert_eq!(results_title(12), "Search Results (12)");
    }
}
