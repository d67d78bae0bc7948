//! Selectable departure airports and trip durations.

use serde::Serialize;

/// A departure airport the user can pick from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AirportOption {
    pub code: &'static str,
    /// City and country, e.g. "Dublin, Ireland".
    pub name: &'static str,
}

pub const DEPARTURE_AIRPORTS: &[AirportOption] = &[
    AirportOption {
        code: "DUB",
        name: "Dublin, Ireland",
    },
    AirportOption {
        code: "SNN",
        name: "Shannon, Ireland",
    },
    AirportOption {
        code: "ORK",
        name: "Cork, Ireland",
    },
    AirportOption {
        code: "NOC",
        name: "Knock, Ireland",
    },
    AirportOption {
        code: "KIR",
        name: "Kerry, Ireland",
    },
];

/// Trip lengths offered as quick choices, in days.
pub const DURATION_CHOICES: &[u32] = &[3, 5, 7, 10, 14, 21];

/// Looks up a departure airport by its IATA code (case-insensitive).
pub fn departure_airport(code: &str) -> Option<&'static AirportOption> {
    DEPARTURE_AIRPORTS
        .iter()
        .find(|a| a.code.eq_ignore_ascii_case(code.trim()))
}

/// Codes of every departure airport, in catalog order.
pub fn all_departure_codes() -> Vec<String> {
    DEPARTURE_AIRPORTS
        .iter()
        .map(|a| a.code.to_string())
        .collect()
}
