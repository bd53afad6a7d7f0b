use serde::Serialize;

use super::cumulative::RunningTotals;
use crate::record::YearRecord;

/// Whole-program totals over every year in a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgramSummary {
    pub total_revenue_mm: f64,
    pub total_spend_mm: f64,
    /// Unrounded; `None` when nothing was spent.
    pub roi_per_dollar: Option<f64>,
}

impl ProgramSummary {
    pub fn from_records(records: &[YearRecord]) -> Self {
        let mut totals = RunningTotals::default();
        for rec in records {
            totals.push(rec);
        }
        let roi_per_dollar = if totals.spend_mm == 0.0 {
            None
        } else {
            Some(totals.revenue_mm / totals.spend_mm)
        };
        Self {
            total_revenue_mm: totals.revenue_mm,
            total_spend_mm: totals.spend_mm,
            roi_per_dollar,
        }
    }
}
