use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;

use super::fields;
use super::violation::{FieldIssue, IssueKind, SchemaViolation};
use crate::record::YearRecord;

/// Check a raw document against the year-record shape.
///
///  - The document must be an array of objects
///  - `year` is required and must be an integer; years must be unique
///  - Every other known key is optional; absent and `null` are the same
///  - Unknown keys are dropped
///
/// Validation is all-or-nothing: on success every input object becomes one
/// record (in input order), otherwise every issue found is returned.
pub fn validate(raw: &Value) -> Result<Vec<YearRecord>, SchemaViolation> {
    let items = match raw.as_array() {
        Some(items) => items,
        None => {
            return Err(SchemaViolation::new(vec![FieldIssue::document(
                IssueKind::NotAnArray {
                    found: json_type(raw),
                },
            )]))
        }
    };

    let mut issues = Vec::new();
    let mut records = Vec::with_capacity(items.len());
    let mut first_seen: HashMap<i32, usize> = HashMap::with_capacity(items.len());

    for (idx, item) in items.iter().enumerate() {
        let obj = match item.as_object() {
            Some(obj) => obj,
            None => {
                issues.push(FieldIssue::record(
                    idx,
                    IssueKind::NotAnObject {
                        found: json_type(item),
                    },
                ));
                continue;
            }
        };

        let mut row = RowReader {
            idx,
            obj,
            issues: &mut issues,
        };
        let record = row.read_record();

        if let Some(rec) = record {
            if let Some(&first_index) = first_seen.get(&rec.year) {
                issues.push(FieldIssue::field(
                    idx,
                    fields::YEAR,
                    IssueKind::DuplicateYear { first_index },
                ));
            } else {
                first_seen.insert(rec.year, idx);
            }
            records.push(rec);
        }

        for key in obj.keys().filter(|k| !fields::is_known(k)) {
            debug!("validate: ignoring unknown key `{}` at [{}]", key, idx);
        }
    }

    if issues.is_empty() {
        Ok(records)
    } else {
        Err(SchemaViolation::new(issues))
    }
}

/// Reads typed fields out of one raw object, recording issues as it goes.
struct RowReader<'a> {
    idx: usize,
    obj: &'a Map<String, Value>,
    issues: &'a mut Vec<FieldIssue>,
}

impl<'a> RowReader<'a> {
    /// `None` if any field of this row was rejected.
    fn read_record(&mut self) -> Option<YearRecord> {
        let before = self.issues.len();

        let year = self.year();
        let price = match self.number(fields::AVG_PRICE_PER_THOUSAND_BF) {
            Some(p) => Some(p),
            None => self.number(fields::AVG_PRICE_PER_MBF_ALIAS),
        };

        let rec = YearRecord {
            year: year.unwrap_or_default(),
            incremental_revenue_mm: self.number(fields::INCREMENTAL_REVENUE_MM),
            spend_mm: self.number(fields::SPEND_MM),
            inc_bf_mm: self.number(fields::INC_BF_MM),
            tail_bf_mm: self.number(fields::TAIL_BF_MM),
            total_bf_mm: self.number(fields::TOTAL_BF_MM),
            avg_price_per_thousand_bf: price,
            roi_per_dollar: self.number(fields::ROI_PER_DOLLAR),
            cumulative_roi_per_dollar: self.number(fields::CUMULATIVE_ROI_PER_DOLLAR),
            slb_share_pct: self.number(fields::SLB_SHARE_PCT),
            volume_portion_pct: self.number(fields::VOLUME_PORTION_PCT),
            price_portion_pct: self.number(fields::PRICE_PORTION_PCT),
            q1_bf_mm: self.number(fields::Q1_BF_MM),
            q2_bf_mm: self.number(fields::Q2_BF_MM),
            q3_bf_mm: self.number(fields::Q3_BF_MM),
            q4_bf_mm: self.number(fields::Q4_BF_MM),
            projects: self.count(fields::PROJECTS),
        };

        (self.issues.len() == before).then_some(rec)
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.obj.get(key).filter(|v| !v.is_null())
    }

    fn reject(&mut self, key: &'static str, kind: IssueKind) {
        self.issues.push(FieldIssue::field(self.idx, key, kind));
    }

    fn year(&mut self) -> Option<i32> {
        let v = match self.present(fields::YEAR) {
            Some(v) => v,
            None => {
                self.reject(fields::YEAR, IssueKind::MissingRequired);
                return None;
            }
        };
        let n = self.numeric(fields::YEAR, v, "integer")?;
        match integral(n).and_then(|i| i32::try_from(i).ok()) {
            Some(year) => Some(year),
            None => {
                self.reject(fields::YEAR, IssueKind::NotAnInteger);
                None
            }
        }
    }

    /// Optional number.
    fn number(&mut self, key: &'static str) -> Option<f64> {
        let v = self.present(key)?;
        self.numeric(key, v, "number")
    }

    /// Optional non-negative integer.
    fn count(&mut self, key: &'static str) -> Option<u32> {
        let v = self.present(key)?;
        let n = self.numeric(key, v, "integer")?;
        match integral(n).and_then(|i| u32::try_from(i).ok()) {
            Some(c) => Some(c),
            None => {
                self.reject(key, IssueKind::NotAnInteger);
                None
            }
        }
    }

    fn numeric(&mut self, key: &'static str, v: &Value, expected: &'static str) -> Option<f64> {
        // serde_json numbers are always finite
        match v.as_f64() {
            Some(n) => Some(n),
            None => {
                self.reject(
                    key,
                    IssueKind::WrongType {
                        expected,
                        found: json_type(v),
                    },
                );
                None
            }
        }
    }
}

/// `2023` and `2023.0` are both integral.
fn integral(n: f64) -> Option<i64> {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_accepts_sparse_records() {
        let raw = json!([
            { "year": 2021, "spendMM": 19.4, "totalBF_MM": null },
            { "year": 2012 }
        ]);
        let recs = validate(&raw).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].year, 2021);
        assert_eq!(recs[0].spend_mm, Some(19.4));
        assert_eq!(recs[0].total_bf_mm, None);
        assert_eq!(recs[1], YearRecord::new(2012));
    }

    #[test]
    fn test_keeps_input_order() {
        let raw = json!([{ "year": 2025 }, { "year": 2013 }, { "year": 2019 }]);
        let years: Vec<i32> = validate(&raw).unwrap().iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2025, 2013, 2019]);
    }

    #[test]
    fn test_missing_year() {
        let raw = json!([{ "year": 2020 }, { "spendMM": 3.0 }]);
        let err = validate(&raw).unwrap_err();
        assert_eq!(
            err.issues,
            vec![FieldIssue::field(1, "year", IssueKind::MissingRequired)]
        );
    }

    #[test]
    fn test_null_year_is_missing() {
        let err = validate(&json!([{ "year": null }])).unwrap_err();
        assert_eq!(err.issues[0].kind, IssueKind::MissingRequired);
    }

    #[test]
    fn test_year_must_be_integer() {
        let err = validate(&json!([{ "year": 2020.5 }, { "year": "2021" }])).unwrap_err();
        assert_eq!(
            err.issues,
            vec![
                FieldIssue::field(0, "year", IssueKind::NotAnInteger),
                FieldIssue::field(
                    1,
                    "year",
                    IssueKind::WrongType {
                        expected: "integer",
                        found: "string"
                    }
                ),
            ]
        );
    }

    #[test]
    fn test_integral_float_year_accepted() {
        let recs = validate(&json!([{ "year": 2020.0 }])).unwrap();
        assert_eq!(recs[0].year, 2020);
    }

    #[test]
    fn test_wrong_type_on_optional_field() {
        let err = validate(&json!([{ "year": 2020, "spendMM": "19.4" }])).unwrap_err();
        assert_eq!(err.issues[0].path(), "[0].spendMM");
    }

    #[test]
    fn test_collects_every_issue() {
        let raw = json!([
            { "spendMM": 1.0 },
            "not a row",
            { "year": 2020, "totalBF_MM": true, "projects": -3 }
        ]);
        let err = validate(&raw).unwrap_err();
        let paths: Vec<String> = err.issues.iter().map(FieldIssue::path).collect();
        assert_eq!(
            paths,
            vec!["[0].year", "[1]", "[2].totalBF_MM", "[2].projects"]
        );
    }

    #[test]
    fn test_duplicate_year() {
        let raw = json!([{ "year": 2020 }, { "year": 2021 }, { "year": 2020 }]);
        let err = validate(&raw).unwrap_err();
        assert_eq!(
            err.issues,
            vec![FieldIssue::field(
                2,
                "year",
                IssueKind::DuplicateYear { first_index: 0 }
            )]
        );
    }

    #[test]
    fn test_not_an_array() {
        let err = validate(&json!({ "year": 2020 })).unwrap_err();
        assert_eq!(
            err.issues,
            vec![FieldIssue::document(IssueKind::NotAnArray { found: "object" })]
        );
    }

    #[test]
    fn test_price_alias() {
        let recs = validate(&json!([
            { "year": 2014, "avgPrice_perMBF": 399 },
            { "year": 2015, "avgPrice_perMBF": 1, "avgPricePerThousandBF": 410 }
        ]))
        .unwrap();
        assert_eq!(recs[0].avg_price_per_thousand_bf, Some(399.0));
        assert_eq!(recs[1].avg_price_per_thousand_bf, Some(410.0));
    }

    #[test]
    fn test_unknown_keys_dropped() {
        let recs = validate(&json!([{ "year": 2016, "notes": "revised" }])).unwrap();
        assert_eq!(recs[0], YearRecord::new(2016));
    }

    #[test]
    fn test_non_finite_number_reads_as_absent() {
        // serde_json stores NaN as null
        let recs = validate(&json!([{ "year": 2020, "spendMM": f64::NAN }])).unwrap();
        assert_eq!(recs[0].spend_mm, None);
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert_eq!(validate(&json!([])).unwrap(), Vec::new());
    }
}
