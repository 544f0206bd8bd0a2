use crate::error::Result;
use crate::models::{Extreme, MonthlyAverages, MonthlyExtremeSeries, YearlyExtremes};
use crate::utils::constants::{DEFAULT_BAR_SYMBOL, MAX_BAR_LENGTH};
use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};

const NO_DATA: &str = "no data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders computed results as text reports, a bar chart, or JSON.
///
/// Colours go through `colored`, so `colored::control::set_override(false)`
/// turns them off globally.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    format: OutputFormat,
    bar_symbol: String,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self {
            format: OutputFormat::Text,
            bar_symbol: DEFAULT_BAR_SYMBOL.to_string(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_bar_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.bar_symbol = symbol.into();
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn write_yearly_extremes(&self, extremes: &YearlyExtremes) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(extremes)?);
        }

        Ok(format!(
            "Highest Temperature: {}\n\
            Lowest Temperature: {}\n\
            Max Humidity: {}",
            describe_extreme(&extremes.highest_temperature, "C"),
            describe_extreme(&extremes.lowest_temperature, "C"),
            describe_extreme(&extremes.highest_humidity, "%"),
        ))
    }

    pub fn write_monthly_averages(&self, averages: &MonthlyAverages) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(averages)?);
        }

        Ok(format!(
            "Average Highest Temp: {}\n\
            Average Lowest Temp: {}\n\
            Average Mean Humidity: {}",
            describe_average(averages.avg_max_temp, "C"),
            describe_average(averages.avg_min_temp, "C"),
            describe_average(averages.avg_mean_humidity, "%"),
        ))
    }

    /// One line per day: the high bar in red, then the low bar in blue.
    pub fn write_bar_chart(&self, series: &MonthlyExtremeSeries) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(series)?);
        }

        let lines: Vec<String> = series
            .iter()
            .map(|(day, high, low)| {
                let high_part = format!("{} {}C {}", self.bar(high), reading(high), day);
                let low_part = format!("{} {}C {}", self.bar(low), reading(low), day);
                format!("{}   {}", high_part.bright_red(), low_part.bright_blue())
            })
            .collect();

        Ok(lines.join("\n"))
    }

    /// Bar length is the truncated reading, capped at `MAX_BAR_LENGTH`;
    /// negative readings draw nothing.
    fn bar(&self, value: f64) -> String {
        let length = value.trunc().clamp(0.0, MAX_BAR_LENGTH as f64) as usize;
        self.bar_symbol.repeat(length)
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn describe_extreme(extreme: &Option<Extreme>, unit: &str) -> String {
    match extreme {
        Some(e) => format!("{}{} on {}", reading(e.value), unit, e.day),
        None => NO_DATA.to_string(),
    }
}

/// A reading with every digit it carries, and always at least one decimal.
fn reading(value: f64) -> String {
    format!("{:?}", value)
}

fn describe_average(average: Option<f64>, unit: &str) -> String {
    match average {
        Some(value) => format!("{:.2}{}", value, unit),
        None => NO_DATA.to_string(),
    }
}
