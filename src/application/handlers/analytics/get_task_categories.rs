//! GetTaskCategoriesHandler - categories with completion rates.

use std::sync::Arc;

use crate::domain::analytics::{CategoryRollup, TaskAnalyzer};
use crate::ports::ReferenceDataReader;

use super::AnalyticsError;

pub struct GetTaskCategoriesHandler {
    reference: Arc<dyn ReferenceDataReader>,
}

impl GetTaskCategoriesHandler {
    pub fn new(reference: Arc<dyn ReferenceDataReader>) -> Self {
        Self { reference }
    }

    pub async fn handle(&self) -> Result<Vec<CategoryRollup>, AnalyticsError> {
        let categories = self.reference.list_task_categories().await?;
        Ok(TaskAnalyzer::rollup_categories(&categories))
    }
}
