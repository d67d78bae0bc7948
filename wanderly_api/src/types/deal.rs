//! Deal records returned by the `/api/v1/deals` endpoint.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Opaque deal identifier. The server issues a fresh UUID string per result.
pub type DealID = String;

/// A round trip found by the search backend.
///
/// Dates are kept exactly as the server sent them (`YYYY-MM-DD`); display
/// formatting belongs to the presentation layer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: DealID,

    /// Airport the outbound flight leaves from.
    pub departure_airport: Airport,

    /// Destination airport of the outbound flight.
    pub arrival_airport: Airport,

    /// Outbound date, ISO-8601 full date.
    pub departure_date: String,

    /// Return date, ISO-8601 full date.
    pub return_date: String,

    /// Nights between departure and return.
    pub duration_days: u32,

    /// Total price of both legs.
    pub price: Price,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Airport {
    /// Three-letter IATA code.
    pub code: String,
    pub city: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Price {
    pub value: f64,
    /// Three-letter ISO currency code, e.g. `EUR`.
    pub currency: String,
}

impl Deal {
    /// Checks the record constraints serde cannot express: three-letter
    /// uppercase codes, a positive duration and a non-negative price.
    pub fn validate(&self) -> Result<(), Error> {
        for airport in [&self.departure_airport, &self.arrival_airport] {
            if !is_three_letter_code(&airport.code) {
                return Err(self.invalid(format!("airport code '{}'", airport.code)));
            }
        }
        if self.duration_days == 0 {
            return Err(self.invalid("durationDays 0".to_string()));
        }
        if !(self.price.value.is_finite() && self.price.value >= 0.0) {
            return Err(self.invalid(format!("price {}", self.price.value)));
        }
        if !is_three_letter_code(&self.price.currency) {
            return Err(self.invalid(format!("currency '{}'", self.price.currency)));
        }
        Ok(())
    }

    fn invalid(&self, what: String) -> Error {
        Error::Decode(format!("deal {}: invalid {}", self.id, what))
    }
}

fn is_three_letter_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal() -> Deal {
        Deal {
            id: "a1".to_string(),
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

    #[test]
    fn test_valid_deal() {
        assert!(deal().validate().is_ok());

        let mut free = deal();
        free.price.value = 0.0;
        assert!(free.validate().is_ok());
    }

    #[test]
    fn test_invalid_deals() {
        let mut d = deal();
        d.departure_airport.code = "dublin".to_string();
        assert!(matches!(d.validate(), Err(Error::Decode(_))));

        let mut d = deal();
        d.arrival_airport.code = "bcn".to_string();
        assert!(d.validate().is_err());

        let mut d = deal();
        d.duration_days = 0;
        assert!(d.validate().is_err());

        let mut d = deal();
        d.price.value = -5.0;
        assert!(d.validate().is_err());

        let mut d = deal();
        d.price.value = f64::NAN;
        assert!(d.validate().is_err());

        let mut d = deal();
        d.price.currency = "EURO".to_string();
        assert!(d.validate().is_err());
    }
}
