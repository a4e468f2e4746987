//! GetOverviewHandler - headline committee numbers.

use std::sync::Arc;

use crate::domain::analytics::{OverviewSummary, PerformanceAnalyzer};
use crate::ports::MemberRepository;

use super::AnalyticsError;

pub struct GetOverviewHandler {
    repository: Arc<dyn MemberRepository>,
}

impl GetOverviewHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<OverviewSummary, AnalyticsError> {
        let members = self.repository.list_all().await?;
        Ok(PerformanceAnalyzer::summarize_overview(&members))
    }
}
