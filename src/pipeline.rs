//! raw JSON → validate → derive → sort → accumulate → `Series`.

use serde_json::Value;
use tracing::{error, info};

use crate::config::PipelineConfig;
use crate::derive::derive_all;
use crate::record::YearRecord;
use crate::schema::{self, SchemaViolation};
use crate::series::{accumulate, sort_by_year, Series};

/// Result of one load. `rows` is empty whenever `violation` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub rows: Series,
    pub violation: Option<SchemaViolation>,
}

impl LoadOutcome {
    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }
}

/// Run the pipeline over already-validated records.
pub fn run(records: Vec<YearRecord>, cfg: &PipelineConfig) -> Series {
    let derived = derive_all(records, cfg);
    let sorted = sort_by_year(derived);
    Series::from_sorted(accumulate(sorted))
}

/// Validate and derive a raw document.
///
/// Never fails: a schema violation is logged and yields an empty series,
/// with the diagnostics kept on the outcome.
pub fn load_years(raw: &Value, cfg: &PipelineConfig) -> LoadOutcome {
    match schema::validate(raw) {
        Ok(records) => {
            let rows = run(records, cfg);
            info!(rows = rows.len(), "year data loaded");
            LoadOutcome {
                rows,
                violation: None,
            }
        }
        Err(violation) => {
            error!(issues = violation.len(), "{}", violation);
            LoadOutcome {
                rows: Series::empty(),
                violation: Some(violation),
            }
        }
    }
}
