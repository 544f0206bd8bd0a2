use crate::models::PeriodKind;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeatherError>;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("The path {} does not exist. Try entering a valid path.", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Invalid {kind} format {period}. Please use format {expected}.")]
    InvalidFormat {
        kind: PeriodKind,
        period: String,
        expected: &'static str,
    },

    #[error("Input {year} does not exist in records. Please enter a year in range: {}", format_years(.existing_years))]
    YearNotFound { year: i32, existing_years: Vec<i32> },

    #[error("Weather data related to {period} not found in records. Please enter a different date.")]
    PeriodNotFound { period: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WeatherError {
    pub fn invalid_format(kind: PeriodKind, period: impl Into<String>) -> Self {
        Self::InvalidFormat {
            kind,
            period: period.into(),
            expected: kind.expected_shape(),
        }
    }

    pub fn period_not_found(period: impl Into<String>) -> Self {
        Self::PeriodNotFound {
            period: period.into(),
        }
    }
}

fn format_years(years: &[i32]) -> String {
    let joined = years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", joined)
}
