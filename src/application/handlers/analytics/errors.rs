//! Analytics query errors.

use thiserror::Error;

use crate::domain::foundation::DomainError;

/// Errors from analytics queries.
///
/// Aggregation itself cannot fail; only loading the snapshot can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<DomainError> for AnalyticsError {
    fn from(err: DomainError) -> Self {
        AnalyticsError::Database(err.to_string())
    }
}
