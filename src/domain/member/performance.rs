//! Monthly performance history entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, ValidationError};

/// Maximum length for a month label.
pub const MAX_MONTH_LABEL_LENGTH: usize = 20;

/// One point of a member's performance history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceEntry {
    month: String,
    score: Percentage,
}

impl PerformanceEntry {
    /// Creates an entry, validating the month label and score.
    pub fn new(month: impl Into<String>, score: i64) -> Result<Self, ValidationError> {
        let month = month.into().trim().to_string();
        if month.is_empty() {
            return Err(ValidationError::empty_field("month"));
        }
        if month.chars().count() > MAX_MONTH_LABEL_LENGTH {
            return Err(ValidationError::invalid_format(
                "month",
                format!("must be at most {} characters", MAX_MONTH_LABEL_LENGTH),
            ));
        }
        let score = Percentage::for_field("score", score)?;
        Ok(Self { month, score })
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn score(&self) -> Percentage {
        self.score
    }
}

/// Unvalidated history entry as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceInput {
    pub month: String,
    pub score: i64,
}

impl PerformanceInput {
    pub fn new(month: impl Into<String>, score: i64) -> Self {
        Self {
            month: month.into(),
            score,
        }
    }
}

impl From<&PerformanceEntry> for PerformanceInput {
    fn from(entry: &PerformanceEntry) -> Self {
        Self::new(entry.month(), i64::from(entry.score().value()))
    }
}
