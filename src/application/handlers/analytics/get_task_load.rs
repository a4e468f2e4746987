//! GetTaskLoadHandler - per-member workload relative to the busiest member.

use std::sync::Arc;

use crate::domain::analytics::{TaskAnalyzer, TaskLoad};
use crate::ports::MemberRepository;

use super::AnalyticsError;

pub struct GetTaskLoadHandler {
    repository: Arc<dyn MemberRepository>,
}

impl GetTaskLoadHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<TaskLoad>, AnalyticsError> {
        let members = self.repository.list_all().await?;
        Ok(TaskAnalyzer::task_load_distribution(&members))
    }
}
