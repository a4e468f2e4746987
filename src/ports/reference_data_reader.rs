//! Read-only port for reporting-period reference data.

use crate::domain::foundation::DomainError;
use crate::domain::reference::{MonthlyRegistration, TaskCategory};
use async_trait::async_trait;

/// Source of task categories and the monthly registration series.
#[async_trait]
pub trait ReferenceDataReader: Send + Sync {
    /// Task categories in display order.
    async fn list_task_categories(&self) -> Result<Vec<TaskCategory>, DomainError>;

    /// Monthly registrations, oldest first.
    async fn list_monthly_registrations(&self) -> Result<Vec<MonthlyRegistration>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_data_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn ReferenceDataReader) {}
    }
}
