use crate::error::{Result, WeatherError};
use crate::models::{Period, PeriodKind};
use crate::processors::reports::WeatherReport;
use crate::processors::year_index::YearIndex;
use crate::utils::validation::PeriodValidator;
use tracing::{debug, info};

/// Validates a requested period and runs a report for it.
///
/// Checks run in a fixed order: syntax first, then year existence. Only a
/// period that passes both reaches the report.
pub struct ReportDispatcher<'a> {
    validator: PeriodValidator,
    year_index: &'a YearIndex,
}

impl<'a> ReportDispatcher<'a> {
    pub fn new(year_index: &'a YearIndex) -> Result<Self> {
        Ok(Self {
            validator: PeriodValidator::new()?,
            year_index,
        })
    }

    pub fn process<R: WeatherReport>(&self, period: &str, report: &R) -> Result<String> {
        let kind = report.period_kind();
        let year = self.validate(period, kind)?;

        if !self.year_index.contains(year) {
            return Err(WeatherError::YearNotFound {
                year,
                existing_years: self.year_index.years(),
            });
        }

        info!("Running {} report for {}", kind, period);
        let output = report.compute(period)?;
        report.format(&output)
    }

    /// Syntax check, returning the year component on success.
    fn validate(&self, period: &str, kind: PeriodKind) -> Result<i32> {
        if !self.validator.is_valid(period, kind) {
            debug!("Rejected {} '{}'", kind, period);
            return Err(WeatherError::invalid_format(kind, period));
        }
        Ok(Period::parse(period, kind)?.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Records how often it was computed so the check order can be observed.
    struct CountingReport {
        kind: PeriodKind,
        computed: Cell<usize>,
    }

    impl CountingReport {
        fn new(kind: PeriodKind) -> Self {
            Self {
                kind,
                computed: Cell::new(0),
            }
        }
    }

    impl WeatherReport for CountingReport {
        type Output = String;

        fn period_kind(&self) -> PeriodKind {
            self.kind
        }

        fn compute(&self, period: &str) -> Result<String> {
            self.computed.set(self.computed.get() + 1);
            Ok(period.to_string())
        }

        fn format(&self, output: &String) -> Result<String> {
            Ok(format!("report for {}", output))
        }
    }

    fn index() -> YearIndex {
        let records: Vec<crate::models::ObservationRecord> = vec![
            [("PKT", "2004-8-1")].into_iter().collect(),
            [("PKT", "2005-1-1")].into_iter().collect(),
        ];
        YearIndex::from_records(&records)
    }

    #[test]
    fn test_valid_period_runs_report() {
        let index = index();
        let dispatcher = ReportDispatcher::new(&index).unwrap();
        let report = CountingReport::new(PeriodKind::YearMonth);

        let text = dispatcher.process("2004-08", &report).unwrap();

        assert_eq!(text, "report for 2004-08");
        assert_eq!(report.computed.get(), 1);
    }

    #[test]
    fn test_invalid_syntax_never_reaches_index() {
        let index = YearIndex::default();
        let dispatcher = ReportDispatcher::new(&index).unwrap();
        let report = CountingReport::new(PeriodKind::Year);

        let err = dispatcher.process("04", &report).unwrap_err();

        assert!(matches!(
            err,
            WeatherError::InvalidFormat {
                kind: PeriodKind::Year,
                expected: "YYYY",
                ..
            }
        ));
        assert_eq!(report.computed.get(), 0);
    }

    #[test]
    fn test_month_out_of_range_is_invalid() {
        let index = index();
        let dispatcher = ReportDispatcher::new(&index).unwrap();
        let report = CountingReport::new(PeriodKind::YearMonth);

        assert!(matches!(
            dispatcher.process("2004-13", &report),
            Err(WeatherError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_unknown_year_lists_existing_years() {
        let index = index();
        let dispatcher = ReportDispatcher::new(&index).unwrap();
        let report = CountingReport::new(PeriodKind::Year);

        match dispatcher.process("1999", &report).unwrap_err() {
            WeatherError::YearNotFound {
                year,
                existing_years,
            } => {
                assert_eq!(year, 1999);
                assert_eq!(existing_years, vec![2004, 2005]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(report.computed.get(), 0);
    }
}
