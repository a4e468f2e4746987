//! GetRegistrationMetricsHandler - standings, tiers and monthly growth.

use std::sync::Arc;

use crate::domain::analytics::{RegistrationAnalyzer, RegistrationSummary};
use crate::ports::{MemberRepository, ReferenceDataReader};

use super::AnalyticsError;

pub struct GetRegistrationMetricsHandler {
    repository: Arc<dyn MemberRepository>,
    reference: Arc<dyn ReferenceDataReader>,
}

impl GetRegistrationMetricsHandler {
    pub fn new(
        repository: Arc<dyn MemberRepository>,
        reference: Arc<dyn ReferenceDataReader>,
    ) -> Self {
        Self {
            repository,
            reference,
        }
    }

    pub async fn handle(&self) -> Result<RegistrationSummary, AnalyticsError> {
        let members = self.repository.list_all().await?;
        let series = self.reference.list_monthly_registrations().await?;
        Ok(RegistrationAnalyzer::summarize(&members, &series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        stored_member, MockMemberRepository, MockReferenceData,
    };
    use crate::domain::analytics::RegistrationTier;

    #[tokio::test]
    async fn combines_members_and_series() {
        let repo = Arc::new(MockMemberRepository::with_members(vec![
            stored_member("Ada", 85, 12),
            stored_member("Brook", 92, 18),
            stored_member("Cato", 72, 8),
        ]));
        let handler = GetRegistrationMetricsHandler::new(repo, Arc::new(MockReferenceData::quarter()));

        let summary = handler.handle().await.unwrap();

        assert_eq!(summary.total_registrations, 38);
        assert_eq!(summary.top_recruiter.unwrap().name(), "Brook");
        assert_eq!(summary.standings[0].tier, RegistrationTier::Platinum);
        assert_eq!(summary.monthly_growth.len(), 3);
        assert!((summary.latest_growth - 26.19).abs() < 0.01);
    }

    #[tokio::test]
    async fn empty_series_has_zero_latest_growth() {
        let reference = MockReferenceData {
            categories: Vec::new(),
            series: Vec::new(),
        };
        let handler = GetRegistrationMetricsHandler::new(
            Arc::new(MockMemberRepository::new()),
            Arc::new(reference),
        );

        let summary = handler.handle().await.unwrap();
        assert!(summary.monthly_growth.is_empty());
        assert_eq!(summary.latest_growth, 0.0);
    }
}
