use crate::models::ObservationRecord;
use crate::utils::dates::extract_year;
use std::collections::BTreeSet;

/// Distinct years present in the loaded records.
///
/// Only used to check that a requested period has data at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearIndex {
    years: BTreeSet<i32>,
}

impl YearIndex {
    pub fn from_records(records: &[ObservationRecord]) -> Self {
        let years = records
            .iter()
            .filter_map(|record| record.date().and_then(extract_year))
            .collect();
        Self { years }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    /// Years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        self.years.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
