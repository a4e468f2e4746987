//! Static reference data for the reporting period.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::reference::{MonthlyRegistration, TaskCategory};
use crate::ports::ReferenceDataReader;

/// Serves fixed task categories and a fixed monthly series.
#[derive(Debug, Clone)]
pub struct StaticReferenceData {
    categories: Vec<TaskCategory>,
    series: Vec<MonthlyRegistration>,
}

impl StaticReferenceData {
    pub fn new(categories: Vec<TaskCategory>, series: Vec<MonthlyRegistration>) -> Self {
        Self { categories, series }
    }

    /// The current quarter's categories and registration series.
    pub fn current_period() -> Self {
        Self::new(
            vec![
                TaskCategory::new("Event Planning", 25, 8),
                TaskCategory::new("Marketing", 18, 5),
                TaskCategory::new("Outreach", 22, 4),
                TaskCategory::new("Administration", 15, 7),
            ],
            vec![
                MonthlyRegistration::new("Jan", 35),
                MonthlyRegistration::new("Feb", 42),
                MonthlyRegistration::new("Mar", 53),
            ],
        )
    }
}

impl Default for StaticReferenceData {
    fn default() -> Self {
        Self::current_period()
    }
}

#[async_trait]
impl ReferenceDataReader for StaticReferenceData {
    async fn list_task_categories(&self) -> Result<Vec<TaskCategory>, DomainError> {
        Ok(self.categories.clone())
    }

    async fn list_monthly_registrations(&self) -> Result<Vec<MonthlyRegistration>, DomainError> {
        Ok(self.series.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn current_period_categories() {
        let data = StaticReferenceData::current_period();
        let categories = data.list_task_categories().await.unwrap();

        let names: Vec<_> = categories.iter().map(|c| c.category()).collect();
        assert_eq!(names, vec!["Event Planning", "Marketing", "Outreach", "Administration"]);
        assert_eq!(categories[0].total(), 33);
    }

    #[tokio::test]
    async fn current_period_series_is_chronological() {
        let series = StaticReferenceData::default()
            .list_monthly_registrations()
            .await
            .unwrap();
        let months: Vec<_> = series.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["Jan", "Feb", "Mar"]);
        assert_eq!(series[2].registrations, 53);
    }

    #[tokio::test]
    async fn serves_supplied_data() {
        let data = StaticReferenceData::new(Vec::new(), vec![MonthlyRegistration::new("Apr", 7)]);
        assert!(data.list_task_categories().await.unwrap().is_empty());
        assert_eq!(data.list_monthly_registrations().await.unwrap().len(), 1);
    }
}
