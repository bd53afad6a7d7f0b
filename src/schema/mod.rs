pub mod fields;
pub mod validate;
pub mod violation;

pub use validate::validate;
pub use violation::{FieldIssue, IssueKind, SchemaViolation};
