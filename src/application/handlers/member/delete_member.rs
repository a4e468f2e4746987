//! DeleteMemberHandler - Command handler for removing members.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::MemberError;
use crate::ports::MemberRepository;

/// Command to remove a member.
#[derive(Debug, Clone)]
pub struct DeleteMemberCommand {
    pub member_id: MemberId,
}

pub struct DeleteMemberHandler {
    repository: Arc<dyn MemberRepository>,
}

impl DeleteMemberHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteMemberCommand) -> Result<(), MemberError> {
        self.repository.delete(&cmd.member_id).await?;
        tracing::info!(member_id = %cmd.member_id, "Member deleted");
        Ok(())
    }
}
