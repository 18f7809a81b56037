//! Error types for the payroll crate.
//!
//! The engine itself is total over its input and never fails; errors
//! only arise at the edges, when caller-supplied dates or rule files
//! cannot be understood.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Invalid month (expected YYYY-MM): {0}")]
    InvalidMonth(String),

    #[error("Report window must give either start_date/end_date or month")]
    MissingWindow,

    #[error("Failed to read rules file {path}: {source}")]
    RulesIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rules file {path}: {source}")]
    RulesParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
