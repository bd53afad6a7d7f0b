use tracing::debug;

use crate::config::PipelineConfig;
use crate::record::YearRecord;

/// Step 1: `totalBF_MM = incBF_MM + tailBF_MM`, for allow-listed years only.
pub fn reconstruct_total(rec: YearRecord, cfg: &PipelineConfig) -> YearRecord {
    if !cfg.reconstructs_total(rec.year) {
        return rec;
    }
    match (rec.inc_bf_mm, rec.tail_bf_mm) {
        (Some(direct), Some(tail)) => YearRecord {
            total_bf_mm: Some(direct + tail),
            ..rec
        },
        _ => {
            debug!(year = rec.year, "total: direct or tail volume missing, kept as supplied");
            rec
        }
    }
}
