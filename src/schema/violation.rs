// src/schema/violation.rs

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// What is wrong with one field (or one record, or the whole document).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    NotAnArray { found: &'static str },
    NotAnObject { found: &'static str },
    MissingRequired,
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    NotAnInteger,
    DuplicateYear { first_index: usize },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::NotAnArray { found } => write!(f, "expected an array, found {}", found),
            IssueKind::NotAnObject { found } => write!(f, "expected an object, found {}", found),
            IssueKind::MissingRequired => write!(f, "required"),
            IssueKind::WrongType { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            IssueKind::NotAnInteger => write!(f, "expected an integer in range"),
            IssueKind::DuplicateYear { first_index } => {
                write!(f, "duplicate year, first seen at [{}]", first_index)
            }
        }
    }
}

/// A single located diagnostic: `[index].field: kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Record position in the raw input; `None` for document-level issues.
    pub index: Option<usize>,
    /// Wire key; `None` for record-level issues.
    pub field: Option<&'static str>,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl FieldIssue {
    pub fn document(kind: IssueKind) -> Self {
        Self {
            index: None,
            field: None,
            kind,
        }
    }

    pub fn record(index: usize, kind: IssueKind) -> Self {
        Self {
            index: Some(index),
            field: None,
            kind,
        }
    }

    pub fn field(index: usize, field: &'static str, kind: IssueKind) -> Self {
        Self {
            index: Some(index),
            field: Some(field),
            kind,
        }
    }

    pub fn path(&self) -> String {
        match (self.index, self.field) {
            (None, _) => "$".to_string(),
            (Some(i), None) => format!("[{}]", i),
            (Some(i), Some(f)) => format!("[{}].{}", i, f),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path(), self.kind)
    }
}

/// The raw input does not match the year-record shape. Carries every issue
/// found, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("year data failed validation with {} issue(s): {}", .issues.len(), join_issues(.issues))]
pub struct SchemaViolation {
    pub issues: Vec<FieldIssue>,
}

impl SchemaViolation {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
