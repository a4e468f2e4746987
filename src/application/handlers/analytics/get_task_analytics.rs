//! GetTaskAnalyticsHandler - task totals with the efficiency leaderboard.

use std::sync::Arc;

use crate::domain::analytics::{PerformanceAnalyzer, TaskSummary};
use crate::ports::MemberRepository;

use super::AnalyticsError;

pub struct GetTaskAnalyticsHandler {
    repository: Arc<dyn MemberRepository>,
}

impl GetTaskAnalyticsHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<TaskSummary, AnalyticsError> {
        let members = self.repository.list_all().await?;
        Ok(PerformanceAnalyzer::summarize_tasks(&members))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{stored_member, MockMemberRepository};

    #[tokio::test]
    async fn ranks_members_by_efficiency() {
        let repo = Arc::new(MockMemberRepository::with_members(vec![
            stored_member("Ada", 85, 12),
            stored_member("Brook", 92, 18),
        ]));
        let summary = GetTaskAnalyticsHandler::new(repo).handle().await.unwrap();

        // 12 completed + 3 pending each
        assert_eq!(summary.total_tasks, 30);
        assert_eq!(summary.completion_rate.value(), 80);
        assert_eq!(summary.ranked_members[0].member.name(), "Brook");
        assert_eq!(summary.ranked_members[0].rank, 1);
    }
}
