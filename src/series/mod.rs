pub mod cumulative;
pub mod sort;
pub mod summary;

use serde::Serialize;
use std::ops::RangeInclusive;

use crate::record::YearRecord;

pub use cumulative::{accumulate, RunningTotals};
pub use sort::{is_year_ascending, sort_by_year};
pub use summary::ProgramSummary;

/// The derived, year-ascending output handed to the dashboard.
/// Serializes as a plain array of records.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Series {
    rows: Vec<YearRecord>,
}

impl Series {
    /// Caller guarantees `rows` is already year-ascending.
    pub(crate) fn from_sorted(rows: Vec<YearRecord>) -> Self {
        debug_assert!(is_year_ascending(&rows));
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, YearRecord> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[YearRecord] {
        &self.rows
    }

    /// Most recent year; the dashboard's default selection.
    pub fn latest(&self) -> Option<&YearRecord> {
        self.rows.last()
    }

    pub fn get(&self, year: i32) -> Option<&YearRecord> {
        self.rows
            .binary_search_by_key(&year, |r| r.year)
            .ok()
            .map(|i| &self.rows[i])
    }

    /// First through last year, for bounding a year picker.
    pub fn year_range(&self) -> Option<RangeInclusive<i32>> {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => Some(first.year..=last.year),
            _ => None,
        }
    }

    pub fn summary(&self) -> ProgramSummary {
        ProgramSummary::from_records(&self.rows)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a YearRecord;
    type IntoIter = std::slice::Iter<'a, YearRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
