use crate::utils::constants::{
    DATE_FIELD, MAX_HUMIDITY_FIELD, MAX_TEMPERATURE_FIELD, MEAN_HUMIDITY_FIELD,
    MIN_TEMPERATURE_FIELD,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The observation fields the reports consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherField {
    Date,
    MaxTemperature,
    MinTemperature,
    MaxHumidity,
    MeanHumidity,
}

impl WeatherField {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherField::Date => DATE_FIELD,
            WeatherField::MaxTemperature => MAX_TEMPERATURE_FIELD,
            WeatherField::MinTemperature => MIN_TEMPERATURE_FIELD,
            WeatherField::MaxHumidity => MAX_HUMIDITY_FIELD,
            WeatherField::MeanHumidity => MEAN_HUMIDITY_FIELD,
        }
    }
}

impl fmt::Display for WeatherField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of sensor readings keyed by header name.
///
/// Values are kept exactly as read; nothing guarantees that two records
/// share the same set of fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    fields: HashMap<String, String>,
}

impl ObservationRecord {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: WeatherField) -> Option<&str> {
        self.get_raw(field.as_str())
    }

    pub fn get_raw(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Date string of the record, if present and non-empty.
    pub fn date(&self) -> Option<&str> {
        self.get(WeatherField::Date).filter(|d| !d.is_empty())
    }

    pub fn contains(&self, field: WeatherField) -> bool {
        self.fields.contains_key(field.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ObservationRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Every record loaded for the run, in load order. Read-only after loading.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ObservationRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<ObservationRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ObservationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<ObservationRecord>> for RecordStore {
    fn from(records: Vec<ObservationRecord>) -> Self {
        Self::new(records)
    }
}
