// Error types for roster queries

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Operation has no defined answer for an empty roster
    #[error("{operation} requires at least one record")]
    EmptyInput { operation: &'static str },

    /// Dynamic record is missing a field or carries the wrong shape
    #[error("malformed record field '{field}': {reason}")]
    MalformedRecord { field: String, reason: String },
}

impl QueryError {
    pub fn malformed(field: &str, reason: impl Into<String>) -> Self {
        QueryError::MalformedRecord {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
