//! PatchMemberHandler - Command handler for partial member updates.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberChanges, MemberError};
use crate::ports::MemberRepository;

/// Command to change only the provided fields of a member.
#[derive(Debug, Clone)]
pub struct PatchMemberCommand {
    pub member_id: MemberId,
    pub changes: MemberChanges,
}

/// Handler for partial member updates.
pub struct PatchMemberHandler {
    repository: Arc<dyn MemberRepository>,
}

impl PatchMemberHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: PatchMemberCommand) -> Result<Member, MemberError> {
        let mut member = self
            .repository
            .find_by_id(&cmd.member_id)
            .await?
            .ok_or_else(|| MemberError::not_found(cmd.member_id))?;

        // An empty patch is a no-op read
        if cmd.changes.is_empty() {
            return Ok(member);
        }

        member.apply(cmd.changes)?;
        self.repository.update(&member).await?;

        tracing::info!(member_id = %member.id(), "Member patched");
        Ok(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{stored_member, MockMemberRepository};

    #[tokio::test]
    async fn changes_only_provided_fields() {
        let original = stored_member("Ada", 70, 4);
        let id = *original.id();
        let repo = Arc::new(MockMemberRepository::with_members(vec![original]));
        let handler = PatchMemberHandler::new(repo.clone());

        let member = handler
            .handle(PatchMemberCommand {
                member_id: id,
                changes: MemberChanges {
                    tasks_pending: Some(10),
                    registrations_brought: Some(15),
                    ..MemberChanges::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(member.name(), "Ada");
        assert_eq!(member.efficiency().value(), 70);
        assert_eq!(member.total_tasks(), 22);
        assert_eq!(repo.stored()[0].registrations_brought(), 15);
    }

    #[tokio::test]
    async fn empty_patch_returns_member_unchanged() {
        let original = stored_member("Ada", 70, 4);
        let id = *original.id();
        let repo = Arc::new(MockMemberRepository::with_members(vec![original.clone()]));
        let handler = PatchMemberHandler::new(repo);

        let member = handler
            .handle(PatchMemberCommand {
                member_id: id,
                changes: MemberChanges::default(),
            })
            .await
            .unwrap();
        assert_eq!(member, original);
    }

    #[tokio::test]
    async fn rejects_out_of_range_efficiency() {
        let original = stored_member("Ada", 70, 4);
        let id = *original.id();
        let repo = Arc::new(MockMemberRepository::with_members(vec![original]));
        let handler = PatchMemberHandler::new(repo.clone());

        let result = handler
            .handle(PatchMemberCommand {
                member_id: id,
                changes: MemberChanges {
                    efficiency: Some(140),
                    ..MemberChanges::default()
                },
            })
            .await;
        assert!(matches!(
            result,
            Err(MemberError::ValidationFailed { ref field, .. }) if field == "efficiency"
        ));
        assert_eq!(repo.stored()[0].efficiency().value(), 70);
    }

    #[tokio::test]
    async fn fails_when_member_missing() {
        let handler = PatchMemberHandler::new(Arc::new(MockMemberRepository::new()));
        let id = MemberId::new();
        let result = handler
            .handle(PatchMemberCommand {
                member_id: id,
                changes: MemberChanges {
                    name: Some("Nobody".to_string()),
                    ..MemberChanges::default()
                },
            })
            .await;
        assert_eq!(result, Err(MemberError::NotFound(id)));
    }
}
