use crate::error::WanderlyError;

pub const MAX_HORIZON_DAYS: u32 = 365;

/// Validate an IATA airport code: trim, uppercase, exactly three ASCII letters.
pub fn validate_airport_code(input: &str) -> Result<String, WanderlyError> {
    let upper = input.trim().to_ascii_uppercase();
    if upper.len() == 3 && upper.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(upper)
    } else {
        Err(WanderlyError::InvalidInput(format!(
            "'{}' is not a three-letter IATA airport code",
            input
        )))
    }
}

/// Validate a list of airport codes, dropping repeats but keeping order.
pub fn validate_airport_codes(inputs: &[String]) -> Result<Vec<String>, WanderlyError> {
    let mut codes: Vec<String> = Vec::with_capacity(inputs.len());
    for input in inputs {
        let code = validate_airport_code(input)?;
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    Ok(codes)
}

/// Parse a comma-separated list of trip durations, e.g. `3,7,14`.
///
/// Each value must be a positive whole number of days. Repeats are
/// dropped, order is kept.
pub fn validate_durations(input: &str) -> Result<Vec<u32>, WanderlyError> {
    let mut durations: Vec<u32> = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let days = part.parse::<u32>().map_err(|_| {
            WanderlyError::InvalidInput(format!("invalid duration '{}': expected whole days", part))
        })?;
        if days == 0 {
            return Err(WanderlyError::InvalidInput(
                "duration must be at least one day".to_string(),
            ));
        }
        if !durations.contains(&days) {
            durations.push(days);
        }
    }
    if durations.is_empty() {
        return Err(WanderlyError::InvalidInput(
            "at least one duration is required".to_string(),
        ));
    }
    Ok(durations)
}

/// Validate the search horizon in days.
pub fn validate_horizon(days: u32) -> Result<u32, WanderlyError> {
    if days == 0 || days > MAX_HORIZON_DAYS {
        return Err(WanderlyError::InvalidInput(format!(
            "horizon must be between 1 and {} days, got {}",
            MAX_HORIZON_DAYS, days
        )));
    }
    Ok(days)
}

/// Validate the maximum total price.
pub fn validate_max_price(price: f64) -> Result<f64, WanderlyError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(WanderlyError::InvalidInput(format!(
            "max price must be a positive number, got {}",
            price
        )));
    }
    Ok(price)
}
