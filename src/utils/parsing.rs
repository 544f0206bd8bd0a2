use tracing::trace;

/// Parse a raw sensor reading into a finite `f64`.
///
/// Absent, empty, non-numeric and non-finite values all map to `None`.
/// Failures are never surfaced as errors: a malformed reading means
/// "no data" for that field of that record.
pub fn parse_float_or_absent(value: Option<&str>) -> Option<f64> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Some(parsed),
        Ok(parsed) => {
            trace!("Ignoring non-finite reading '{}' ({})", raw, parsed);
            None
        }
        Err(e) => {
            trace!("Ignoring unparseable reading '{}': {}", raw, e);
            None
        }
    }
}

/// Round to a fixed number of decimal places, half away from zero.
pub fn round_to(value: f64, decimal_places: i32) -> f64 {
    let factor = 10f64.powi(decimal_places);
    (value * factor).round() / factor
}
