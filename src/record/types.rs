// src/record/types.rs

use serde::{Deserialize, Serialize};

/// One program year, as validated from the raw source and later filled in
/// by the derivation steps.
///
/// Every field other than `year` is optional. Absent fields are left out of
/// the serialized form so consumers see "no data" rather than `null`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct YearRecord {
    pub year: i32,

    /// $MM
    #[serde(rename = "incrementalRevenueMM", default, skip_serializing_if = "Option::is_none")]
    pub incremental_revenue_mm: Option<f64>,
    /// $MM
    #[serde(rename = "spendMM", default, skip_serializing_if = "Option::is_none")]
    pub spend_mm: Option<f64>,

    /// In-year incremental volume, MM BF.
    #[serde(rename = "incBF_MM", default, skip_serializing_if = "Option::is_none")]
    pub inc_bf_mm: Option<f64>,
    /// Tail volume credited from prior-year investment, MM BF.
    #[serde(rename = "tailBF_MM", default, skip_serializing_if = "Option::is_none")]
    pub tail_bf_mm: Option<f64>,
    #[serde(rename = "totalBF_MM", default, skip_serializing_if = "Option::is_none")]
    pub total_bf_mm: Option<f64>,

    /// $ per thousand BF.
    #[serde(rename = "avgPricePerThousandBF", default, skip_serializing_if = "Option::is_none")]
    pub avg_price_per_thousand_bf: Option<f64>,

    #[serde(rename = "roiPerDollar", default, skip_serializing_if = "Option::is_none")]
    pub roi_per_dollar: Option<f64>,
    #[serde(rename = "cumulativeRoiPerDollar", default, skip_serializing_if = "Option::is_none")]
    pub cumulative_roi_per_dollar: Option<f64>,

    #[serde(rename = "slbShare_pct", default, skip_serializing_if = "Option::is_none")]
    pub slb_share_pct: Option<f64>,
    #[serde(rename = "volumePortion_pct", default, skip_serializing_if = "Option::is_none")]
    pub volume_portion_pct: Option<f64>,
    #[serde(rename = "pricePortion_pct", default, skip_serializing_if = "Option::is_none")]
    pub price_portion_pct: Option<f64>,

    #[serde(rename = "q1BF_MM", default, skip_serializing_if = "Option::is_none")]
    pub q1_bf_mm: Option<f64>,
    #[serde(rename = "q2BF_MM", default, skip_serializing_if = "Option::is_none")]
    pub q2_bf_mm: Option<f64>,
    #[serde(rename = "q3BF_MM", default, skip_serializing_if = "Option::is_none")]
    pub q3_bf_mm: Option<f64>,
    #[serde(rename = "q4BF_MM", default, skip_serializing_if = "Option::is_none")]
    pub q4_bf_mm: Option<f64>,

    /// Projects converted during the year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<u32>,
}

impl YearRecord {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    /// All four quarterly subtotals, or `None` if any quarter is missing.
    pub fn quarters(&self) -> Option<[f64; 4]> {
        Some([self.q1_bf_mm?, self.q2_bf_mm?, self.q3_bf_mm?, self.q4_bf_mm?])
    }

    pub fn quarterly_sum(&self) -> Option<f64> {
        self.quarters().map(|q| q.iter().sum())
    }

    /// Supplied in-year volume, falling back to the sum of quarters.
    pub fn in_year_bf(&self) -> Option<f64> {
        self.inc_bf_mm.or_else(|| self.quarterly_sum())
    }
}
