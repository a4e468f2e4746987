use serde::{Deserialize, Serialize};

/// Registrations brought in during one month.
///
/// Series of these are kept in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRegistration {
    pub month: String,
    pub registrations: u32,
}

impl MonthlyRegistration {
    pub fn new(month: impl Into<String>, registrations: u32) -> Self {
        Self {
            month: month.into(),
            registrations,
        }
    }
}
