use tracing::debug;

use super::{rounding::round_half_up, settle};
use crate::config::PipelineConfig;
use crate::record::YearRecord;

/// Step 2: `incrementalRevenueMM = round(totalBF_MM * avgPrice / 1000)`.
pub fn derive_revenue(rec: YearRecord, cfg: &PipelineConfig) -> YearRecord {
    let derived = match (rec.total_bf_mm, rec.avg_price_per_thousand_bf) {
        (Some(total), Some(price)) => Some(round_half_up(total * price / 1000.0)),
        _ => {
            debug!(year = rec.year, "revenue: total volume or price missing");
            None
        }
    };
    YearRecord {
        incremental_revenue_mm: settle(rec.incremental_revenue_mm, derived, cfg.overwrite_supplied),
        ..rec
    }
}
