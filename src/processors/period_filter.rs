use crate::error::{Result, WeatherError};
use crate::models::{ObservationRecord, Period};
use tracing::debug;

fn filter_by_period(records: &[ObservationRecord], period: Period) -> Vec<&ObservationRecord> {
    records
        .iter()
        .filter(|record| record.date().is_some_and(|date| period.contains_date(date)))
        .collect()
}

/// Records whose date falls in `year` (`YYYY`).
///
/// An empty result is not an error: the caller has already checked the year
/// exists in the data.
pub fn filter_by_year<'a>(
    records: &'a [ObservationRecord],
    year: &str,
) -> Result<Vec<&'a ObservationRecord>> {
    let period = Period::parse_year(year)?;
    let filtered = filter_by_period(records, period);
    debug!("{} of {} records fall in {}", filtered.len(), records.len(), period);
    Ok(filtered)
}

/// Records whose date falls in `year_month` (`YYYY-MM`).
///
/// Fails with `PeriodNotFound` when no record matches, which is how a
/// missing month inside an existing year is detected.
pub fn filter_by_month<'a>(
    records: &'a [ObservationRecord],
    year_month: &str,
) -> Result<Vec<&'a ObservationRecord>> {
    let period = Period::parse_year_month(year_month)?;
    let filtered = filter_by_period(records, period);
    debug!("{} of {} records fall in {}", filtered.len(), records.len(), period);

    if filtered.is_empty() {
        return Err(WeatherError::period_not_found(year_month));
    }
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ObservationRecord> {
        vec![
            [("PKT", "2004-8-1"), ("Max TemperatureC", "31")].into_iter().collect(),
            [("PKT", "2004-9-1"), ("Max TemperatureC", "29")].into_iter().collect(),
            [("Max TemperatureC", "40")].into_iter().collect(),
            [("PKT", ""), ("Max TemperatureC", "41")].into_iter().collect(),
            [("PKT", "garbage"), ("Max TemperatureC", "42")].into_iter().collect(),
            [("PKT", "2005-8-1"), ("Max TemperatureC", "30")].into_iter().collect(),
        ]
    }

    #[test]
    fn test_filter_by_year() {
        let records = records();
        let filtered = filter_by_year(&records, "2004").unwrap();

        let days: Vec<_> = filtered.iter().filter_map(|r| r.date()).collect();
        assert_eq!(days, vec!["2004-8-1", "2004-9-1"]);
    }

    #[test]
    fn test_filter_by_year_empty_is_ok() {
        let records = records();
        let filtered = filter_by_year(&records, "1999").unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_by_month() {
        let records = records();
        let filtered = filter_by_month(&records, "2004-08").unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date(), Some("2004-8-1"));
    }

    #[test]
    fn test_filter_by_month_empty_is_not_found() {
        let records = records();
        let err = filter_by_month(&records, "2004-10").unwrap_err();

        match err {
            WeatherError::PeriodNotFound { period } => assert_eq!(period, "2004-10"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unparseable_key_is_invalid_format() {
        let records = records();
        assert!(matches!(
            filter_by_year(&records, "abcd"),
            Err(WeatherError::InvalidFormat { .. })
        ));
        assert!(matches!(
            filter_by_month(&records, "2004"),
            Err(WeatherError::InvalidFormat { .. })
        ));
    }
}
