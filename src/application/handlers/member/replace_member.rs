//! ReplaceMemberHandler - Command handler for full member updates.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberDetails, MemberError};
use crate::ports::MemberRepository;

/// Command to replace every editable field of a member.
#[derive(Debug, Clone)]
pub struct ReplaceMemberCommand {
    pub member_id: MemberId,
    pub details: MemberDetails,
}

/// Handler for full member replacement. Id and creation time are preserved.
pub struct ReplaceMemberHandler {
    repository: Arc<dyn MemberRepository>,
}

impl ReplaceMemberHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ReplaceMemberCommand) -> Result<Member, MemberError> {
        let mut member = self
            .repository
            .find_by_id(&cmd.member_id)
            .await?
            .ok_or_else(|| MemberError::not_found(cmd.member_id))?;

        member.replace(cmd.details)?;
        self.repository.update(&member).await?;

        tracing::info!(member_id = %member.id(), "Member replaced");
        Ok(member)
    }
}
