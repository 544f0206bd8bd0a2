use crate::error::Result;
use crate::models::PeriodKind;
use crate::utils::constants::{MAX_MONTH, MIN_MONTH, YEAR_MONTH_PATTERN, YEAR_PATTERN};
use crate::utils::dates::extract_year_month;
use regex::Regex;

/// Lexical checks for user supplied periods (`YYYY` / `YYYY-MM`).
#[derive(Debug, Clone)]
pub struct PeriodValidator {
    year: Regex,
    year_month: Regex,
}

impl PeriodValidator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            year: Regex::new(YEAR_PATTERN)?,
            year_month: Regex::new(YEAR_MONTH_PATTERN)?,
        })
    }

    pub fn is_valid(&self, period: &str, kind: PeriodKind) -> bool {
        match kind {
            PeriodKind::Year => self.is_valid_year(period),
            PeriodKind::YearMonth => self.is_valid_year_month(period),
        }
    }

    pub fn is_valid_year(&self, period: &str) -> bool {
        self.year.is_match(period)
    }

    pub fn is_valid_year_month(&self, period: &str) -> bool {
        self.year_month.is_match(period)
            && extract_year_month(period)
                .is_some_and(|(_, month)| (MIN_MONTH..=MAX_MONTH).contains(&month))
    }
}
