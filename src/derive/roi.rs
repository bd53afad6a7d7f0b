use tracing::debug;

use super::rounding::round_cents;
use crate::config::PipelineConfig;
use crate::record::YearRecord;

/// Step 3: yearly return per program dollar.
///
/// `total * price / spend` is in $K per $MM; dividing by 1000 converts it to
/// a per-dollar ratio, which is then rounded to cents. The conversion must
/// happen before the rounding.
///
/// Zero or absent spend always clears the field, supplied or not. When
/// spend is known but volume or price is missing, a supplied value stays.
pub fn derive_roi(rec: YearRecord, _cfg: &PipelineConfig) -> YearRecord {
    let roi_per_dollar = match (rec.total_bf_mm, rec.avg_price_per_thousand_bf, rec.spend_mm) {
        (_, _, None) => {
            debug!(year = rec.year, "roi: spend missing");
            None
        }
        (_, _, Some(spend)) if spend == 0.0 => {
            debug!(year = rec.year, "roi: zero spend");
            None
        }
        (Some(total), Some(price), Some(spend)) => {
            let raw = total * price / spend;
            Some(round_cents(raw / 1000.0))
        }
        _ => {
            debug!(year = rec.year, "roi: total volume or price missing");
            rec.roi_per_dollar
        }
    };
    YearRecord {
        roi_per_dollar,
        ..rec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(spend: Option<f64>) -> YearRecord {
        YearRecord {
            total_bf_mm: Some(150.0),
            avg_price_per_thousand_bf: Some(400.0),
            spend_mm: spend,
            ..YearRecord::new(2023)
        }
    }

    #[test]
    fn test_two_stage_rounding() {
        let out = derive_roi(full(Some(20.0)), &PipelineConfig::default());
        assert_eq!(out.roi_per_dollar, Some(3.0));

        // 150 * 400 / 19.4 / 1000 = 3.0927...
        let out = derive_roi(full(Some(19.4)), &PipelineConfig::default());
        assert_eq!(out.roi_per_dollar, Some(3.09));
    }

    #[test]
    fn test_zero_spend_leaves_absent() {
        let out = derive_roi(full(Some(0.0)), &PipelineConfig::default());
        assert_eq!(out.roi_per_dollar, None);
    }

    #[test]
    fn test_missing_spend_leaves_absent() {
        let out = derive_roi(full(None), &PipelineConfig::default());
        assert_eq!(out.roi_per_dollar, None);
    }

    #[test]
    fn test_zero_spend_clears_supplied_roi() {
        let rec = YearRecord {
            roi_per_dollar: Some(31.2),
            ..full(Some(0.0))
        };
        assert_eq!(derive_roi(rec, &PipelineConfig::default()).roi_per_dollar, None);

        let rec = YearRecord {
            roi_per_dollar: Some(31.2),
            spend_mm: None,
            ..YearRecord::new(2012)
        };
        assert_eq!(derive_roi(rec, &PipelineConfig::default()).roi_per_dollar, None);
    }

    #[test]
    fn test_stale_roi_replaced_when_derivable() {
        let rec = YearRecord {
            roi_per_dollar: Some(99.0),
            ..full(Some(20.0))
        };
        assert_eq!(derive_roi(rec, &PipelineConfig::default()).roi_per_dollar, Some(3.0));
    }

    #[test]
    fn test_supplied_roi_kept_without_volume() {
        let rec = YearRecord {
            roi_per_dollar: Some(31.2),
            spend_mm: Some(19.4),
            ..YearRecord::new(2014)
        };
        assert_eq!(derive_roi(rec, &PipelineConfig::default()).roi_per_dollar, Some(31.2));
    }
}
