use serde::Serialize;

/// An extreme reading and the date it was observed on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extreme {
    pub value: f64,
    pub day: String,
}

impl Extreme {
    pub fn new(value: f64, day: impl Into<String>) -> Self {
        Self {
            value,
            day: day.into(),
        }
    }
}

/// Yearly highest temperature, lowest temperature and highest humidity.
///
/// An absent extreme means no record in the period carried a usable
/// reading for that field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct YearlyExtremes {
    pub highest_temperature: Option<Extreme>,
    pub lowest_temperature: Option<Extreme>,
    pub highest_humidity: Option<Extreme>,
}

impl YearlyExtremes {
    pub fn max_temp(&self) -> Option<f64> {
        self.highest_temperature.as_ref().map(|e| e.value)
    }

    pub fn max_temp_day(&self) -> &str {
        day_of(&self.highest_temperature)
    }

    pub fn min_temp(&self) -> Option<f64> {
        self.lowest_temperature.as_ref().map(|e| e.value)
    }

    pub fn min_temp_day(&self) -> &str {
        day_of(&self.lowest_temperature)
    }

    pub fn max_humidity(&self) -> Option<f64> {
        self.highest_humidity.as_ref().map(|e| e.value)
    }

    pub fn max_humidity_day(&self) -> &str {
        day_of(&self.highest_humidity)
    }
}

fn day_of(extreme: &Option<Extreme>) -> &str {
    extreme.as_ref().map_or("", |e| e.day.as_str())
}

/// Monthly averages, rounded to two decimal places.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlyAverages {
    pub avg_max_temp: Option<f64>,
    pub avg_min_temp: Option<f64>,
    pub avg_mean_humidity: Option<f64>,
}

/// Per-day highest and lowest temperatures for one month, in record order.
///
/// Missing readings are stored as `0.0` so every day keeps its slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlyExtremeSeries {
    pub days: Vec<String>,
    pub highest_temps: Vec<f64>,
    pub lowest_temps: Vec<f64>,
}

impl MonthlyExtremeSeries {
    pub fn push(&mut self, day: impl Into<String>, highest: f64, lowest: f64) {
        self.days.push(day.into());
        self.highest_temps.push(highest);
        self.lowest_temps.push(lowest);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64, f64)> + '_ {
        self.days
            .iter()
            .zip(&self.highest_temps)
            .zip(&self.lowest_temps)
            .map(|((day, high), low)| (day.as_str(), *high, *low))
    }
}
