use crate::error::{Result, WeatherError};
use crate::utils::constants::{MAX_MONTH, MIN_MONTH, YEAR_MONTH_SHAPE, YEAR_SHAPE};
use crate::utils::dates::{extract_year, extract_year_month};
use chrono::Month;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which shape of period a report is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodKind {
    Year,
    YearMonth,
}

impl PeriodKind {
    pub fn expected_shape(&self) -> &'static str {
        match self {
            PeriodKind::Year => YEAR_SHAPE,
            PeriodKind::YearMonth => YEAR_MONTH_SHAPE,
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodKind::Year => f.write_str("year"),
            PeriodKind::YearMonth => f.write_str("month"),
        }
    }
}

/// A calendar filter key. Never stored with the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Year(i32),
    YearMonth { year: i32, month: u32 },
}

impl Period {
    pub fn parse_year(input: &str) -> Result<Self> {
        input
            .trim()
            .parse::<i32>()
            .map(Period::Year)
            .map_err(|_| WeatherError::invalid_format(PeriodKind::Year, input))
    }

    pub fn parse_year_month(input: &str) -> Result<Self> {
        match extract_year_month(input) {
            Some((year, month)) if (MIN_MONTH..=MAX_MONTH).contains(&month) => {
                Ok(Period::YearMonth { year, month })
            }
            _ => Err(WeatherError::invalid_format(PeriodKind::YearMonth, input)),
        }
    }

    pub fn parse(input: &str, kind: PeriodKind) -> Result<Self> {
        match kind {
            PeriodKind::Year => Self::parse_year(input),
            PeriodKind::YearMonth => Self::parse_year_month(input),
        }
    }

    pub fn kind(&self) -> PeriodKind {
        match self {
            Period::Year(_) => PeriodKind::Year,
            Period::YearMonth { .. } => PeriodKind::YearMonth,
        }
    }

    pub fn year(&self) -> i32 {
        match *self {
            Period::Year(year) | Period::YearMonth { year, .. } => year,
        }
    }

    /// Whether a record's date string falls inside this period.
    ///
    /// Dates that cannot be read as a year (or year-month) never match.
    pub fn contains_date(&self, date: &str) -> bool {
        match *self {
            Period::Year(year) => extract_year(date) == Some(year),
            Period::YearMonth { year, month } => extract_year_month(date) == Some((year, month)),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Period::Year(year) => write!(f, "{}", year),
            Period::YearMonth { year, month } => {
                match u8::try_from(month).ok().and_then(|m| Month::try_from(m).ok()) {
                    Some(name) => write!(f, "{} {}", name.name(), year),
                    None => write!(f, "{}-{:02}", year, month),
                }
            }
        }
    }
}
