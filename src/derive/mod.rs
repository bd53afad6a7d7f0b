//! Per-record derivation steps. Each step is a pure function of one record
//! and the config; none of them look at other years.

pub mod revenue;
pub mod roi;
pub mod rounding;
pub mod totals;

use tracing::debug;

use crate::config::PipelineConfig;
use crate::record::YearRecord;

pub use revenue::derive_revenue;
pub use roi::derive_roi;
pub use totals::reconstruct_total;

pub type DeriveStep = fn(YearRecord, &PipelineConfig) -> YearRecord;

/// Applied in this order; revenue and ROI read the reconstructed total.
pub const STEPS: [(&str, DeriveStep); 3] = [
    ("total", reconstruct_total),
    ("revenue", derive_revenue),
    ("roi", derive_roi),
];

pub fn derive_record(rec: YearRecord, cfg: &PipelineConfig) -> YearRecord {
    STEPS.iter().fold(rec, |rec, (name, step)| {
        debug!(year = rec.year, step = *name, "derive");
        step(rec, cfg)
    })
}

pub fn derive_all(records: Vec<YearRecord>, cfg: &PipelineConfig) -> Vec<YearRecord> {
    records
        .into_iter()
        .map(|rec| derive_record(rec, cfg))
        .collect()
}

/// Pick the revenue a record ends up with.
/// A supplied value survives unless `overwrite` is set; a missing derivation
/// never erases what was supplied.
pub(crate) fn settle(current: Option<f64>, derived: Option<f64>, overwrite: bool) -> Option<f64> {
    match (current, derived) {
        (Some(c), _) if !overwrite => Some(c),
        (_, Some(d)) => Some(d),
        (c, None) => c,
    }
}
