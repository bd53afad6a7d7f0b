pub mod config;
pub mod derive;
pub mod pipeline;
pub mod record;
pub mod schema;
pub mod series;
pub mod source;

pub use config::PipelineConfig;
pub use pipeline::{load_years, LoadOutcome};
pub use record::YearRecord;
pub use schema::SchemaViolation;
pub use series::{ProgramSummary, Series};
