use tracing::debug;

use crate::derive::rounding::round_cents;
use crate::record::YearRecord;

/// Running revenue and spend over the years seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningTotals {
    pub revenue_mm: f64,
    pub spend_mm: f64,
}

impl RunningTotals {
    /// Add one year; absent revenue or spend counts as zero.
    pub fn push(&mut self, rec: &YearRecord) {
        self.revenue_mm += rec.incremental_revenue_mm.unwrap_or(0.0);
        self.spend_mm += rec.spend_mm.unwrap_or(0.0);
    }

    /// Cumulative return per dollar, or `None` while no spend has accrued.
    pub fn roi_per_dollar(&self) -> Option<f64> {
        if self.spend_mm == 0.0 {
            None
        } else {
            Some(round_cents(self.revenue_mm / self.spend_mm))
        }
    }
}

/// Set `cumulativeRoiPerDollar` in a single left-to-right pass.
///
/// The input must already be in year order: each result depends on every
/// earlier record, not on the `year` values themselves. Supplied values are
/// always replaced, and cleared while no spend has accrued.
pub fn accumulate(records: Vec<YearRecord>) -> Vec<YearRecord> {
    let mut totals = RunningTotals::default();
    records
        .into_iter()
        .map(|rec| {
            totals.push(&rec);
            let cumulative_roi_per_dollar = totals.roi_per_dollar();
            if cumulative_roi_per_dollar.is_none() {
                debug!(year = rec.year, "cumulative roi: no spend accrued yet");
            }
            YearRecord {
                cumulative_roi_per_dollar,
                ..rec
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(y: i32, revenue: Option<f64>, spend: Option<f64>) -> YearRecord {
        YearRecord {
            incremental_revenue_mm: revenue,
            spend_mm: spend,
            ..YearRecord::new(y)
        }
    }

    fn cumulative(out: &[YearRecord]) -> Vec<Option<f64>> {
        out.iter().map(|r| r.cumulative_roi_per_dollar).collect()
    }

    #[test]
    fn test_two_year_example() {
        let out = accumulate(vec![
            year(2023, Some(60.0), Some(20.0)),
            year(2024, Some(40.0), Some(10.0)),
        ]);
        assert_eq!(cumulative(&out), vec![Some(3.0), Some(3.33)]);
    }

    #[test]
    fn test_leading_zero_spend() {
        let out = accumulate(vec![
            year(2012, Some(5.0), Some(0.0)),
            year(2013, Some(10.0), None),
            year(2014, Some(15.0), Some(10.0)),
        ]);
        assert_eq!(cumulative(&out), vec![None, None, Some(3.0)]);
    }

    #[test]
    fn test_absent_revenue_counts_as_zero() {
        let out = accumulate(vec![
            year(2020, None, Some(10.0)),
            year(2021, Some(30.0), Some(5.0)),
        ]);
        assert_eq!(cumulative(&out), vec![Some(0.0), Some(2.0)]);
    }

    #[test]
    fn test_supplied_value_replaced() {
        let mut first = year(2020, Some(10.0), Some(10.0));
        first.cumulative_roi_per_dollar = Some(9.99);
        let out = accumulate(vec![first]);
        assert_eq!(cumulative(&out), vec![Some(1.0)]);
    }

    #[test]
    fn test_zero_running_spend_clears_supplied_value() {
        let mut first = year(2012, Some(10.0), Some(0.0));
        first.cumulative_roi_per_dollar = Some(31.2);
        let mut second = year(2013, Some(10.0), None);
        second.cumulative_roi_per_dollar = Some(31.2);
        let out = accumulate(vec![first, second]);
        assert_eq!(cumulative(&out), vec![None, None]);
    }

    #[test]
    fn test_running_totals() {
        let mut totals = RunningTotals::default();
        assert_eq!(totals.roi_per_dollar(), None);
        totals.push(&year(2020, Some(7.0), Some(2.0)));
        totals.push(&year(2021, None, Some(1.0)));
        assert_eq!(
            totals,
            RunningTotals {
                revenue_mm: 7.0,
                spend_mm: 3.0
            }
        );
        assert_eq!(totals.roi_per_dollar(), Some(2.33));
    }
}
