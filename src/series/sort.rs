use crate::record::YearRecord;

/// Stable ascending sort on `year`.
pub fn sort_by_year(mut records: Vec<YearRecord>) -> Vec<YearRecord> {
    records.sort_by_key(|r| r.year);
    records
}

pub fn is_year_ascending(records: &[YearRecord]) -> bool {
    records.windows(2).all(|w| w[0].year <= w[1].year)
}
