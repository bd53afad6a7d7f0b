pub mod types;

pub use types::YearRecord;
