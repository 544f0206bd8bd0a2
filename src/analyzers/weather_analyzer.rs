use crate::models::{
    Extreme, MonthlyAverages, MonthlyExtremeSeries, ObservationRecord, WeatherField,
    YearlyExtremes,
};
use crate::utils::constants::AVERAGE_DECIMAL_PLACES;
use crate::utils::parsing::{parse_float_or_absent, round_to};
use tracing::debug;

/// Read a numeric field from a record, `None` if absent or unusable.
fn reading(record: &ObservationRecord, field: WeatherField) -> Option<f64> {
    parse_float_or_absent(record.get(field))
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Highest,
    Lowest,
}

/// Running extreme for one field. The infinity seed never leaves this type.
#[derive(Debug)]
struct ExtremeTracker<'a> {
    direction: Direction,
    value: f64,
    day: Option<&'a str>,
}

impl<'a> ExtremeTracker<'a> {
    fn highest() -> Self {
        Self {
            direction: Direction::Highest,
            value: f64::NEG_INFINITY,
            day: None,
        }
    }

    fn lowest() -> Self {
        Self {
            direction: Direction::Lowest,
            value: f64::INFINITY,
            day: None,
        }
    }

    /// Strict improvement only, so on a tie the earliest record is kept.
    fn observe(&mut self, value: f64, day: &'a str) {
        let improves = match self.direction {
            Direction::Highest => value > self.value,
            Direction::Lowest => value < self.value,
        };
        if improves {
            self.value = value;
            self.day = Some(day);
        }
    }

    fn finish(self) -> Option<Extreme> {
        self.day.map(|day| Extreme::new(self.value, day))
    }
}

#[derive(Debug, Default)]
struct RunningMean {
    sum: f64,
    count: usize,
}

impl RunningMean {
    fn add(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn average(&self) -> Option<f64> {
        if self.count > 0 {
            Some(round_to(
                self.sum / self.count as f64,
                AVERAGE_DECIMAL_PLACES,
            ))
        } else {
            None
        }
    }
}

/// Computes the report statistics over an already filtered record set.
///
/// Every method is a pure function of its input, so repeated calls over the
/// same records give identical results.
pub struct WeatherAnalyzer;

impl WeatherAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Highest max temperature, lowest min temperature and highest max
    /// humidity, each with the day it was observed.
    pub fn compute_yearly_extremes(&self, records: &[&ObservationRecord]) -> YearlyExtremes {
        let mut max_temp = ExtremeTracker::highest();
        let mut min_temp = ExtremeTracker::lowest();
        let mut max_humidity = ExtremeTracker::highest();

        for record in records {
            let day = record.get(WeatherField::Date).unwrap_or("");

            if let Some(value) = reading(record, WeatherField::MaxTemperature) {
                max_temp.observe(value, day);
            }
            if let Some(value) = reading(record, WeatherField::MinTemperature) {
                min_temp.observe(value, day);
            }
            if let Some(value) = reading(record, WeatherField::MaxHumidity) {
                max_humidity.observe(value, day);
            }
        }

        debug!("Computed yearly extremes over {} records", records.len());

        YearlyExtremes {
            highest_temperature: max_temp.finish(),
            lowest_temperature: min_temp.finish(),
            highest_humidity: max_humidity.finish(),
        }
    }

    /// Averages of max temperature, min temperature and mean humidity.
    ///
    /// Each field only counts the records where it parsed, independently of
    /// the other fields.
    pub fn compute_monthly_averages(&self, records: &[&ObservationRecord]) -> MonthlyAverages {
        let mut max_temp = RunningMean::default();
        let mut min_temp = RunningMean::default();
        let mut mean_humidity = RunningMean::default();

        for record in records {
            max_temp.add(reading(record, WeatherField::MaxTemperature));
            min_temp.add(reading(record, WeatherField::MinTemperature));
            mean_humidity.add(reading(record, WeatherField::MeanHumidity));
        }

        debug!(
            "Monthly averages from {} records (samples: max={}, min={}, humidity={})",
            records.len(),
            max_temp.count,
            min_temp.count,
            mean_humidity.count
        );

        MonthlyAverages {
            avg_max_temp: max_temp.average(),
            avg_min_temp: min_temp.average(),
            avg_mean_humidity: mean_humidity.average(),
        }
    }

    /// One (day, high, low) entry per record, missing readings as `0.0`.
    pub fn compute_monthly_extreme_series(
        &self,
        records: &[&ObservationRecord],
    ) -> MonthlyExtremeSeries {
        let mut series = MonthlyExtremeSeries::default();

        for record in records {
            series.push(
                record.get(WeatherField::Date).unwrap_or(""),
                reading(record, WeatherField::MaxTemperature).unwrap_or(0.0),
                reading(record, WeatherField::MinTemperature).unwrap_or(0.0),
            );
        }

        series
    }
}

impl Default for WeatherAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
