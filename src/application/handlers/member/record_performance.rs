//! RecordPerformanceHandler - appends one month to a member's history.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberError};
use crate::ports::MemberRepository;

/// Command to record a monthly performance score.
#[derive(Debug, Clone)]
pub struct RecordPerformanceCommand {
    pub member_id: MemberId,
    pub month: String,
    pub score: i64,
}

pub struct RecordPerformanceHandler {
    repository: Arc<dyn MemberRepository>,
}

impl RecordPerformanceHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RecordPerformanceCommand) -> Result<Member, MemberError> {
        let mut member = self
            .repository
            .find_by_id(&cmd.member_id)
            .await?
            .ok_or_else(|| MemberError::not_found(cmd.member_id))?;

        member.record_performance(cmd.month, cmd.score)?;
        self.repository.update(&member).await?;

        tracing::info!(
            member_id = %member.id(),
            entries = member.performance_history().len(),
            "Performance recorded"
        );
        Ok(member)
    }
}
