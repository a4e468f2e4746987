//! CreateMemberHandler - Command handler for adding committee members.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberDetails, MemberError};
use crate::ports::MemberRepository;

/// Command to add a member.
#[derive(Debug, Clone)]
pub struct CreateMemberCommand {
    pub details: MemberDetails,
}

/// Handler for adding members.
pub struct CreateMemberHandler {
    repository: Arc<dyn MemberRepository>,
}

impl CreateMemberHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateMemberCommand) -> Result<Member, MemberError> {
        let member = Member::new(MemberId::new(), cmd.details)?;
        self.repository.save(&member).await?;

        tracing::info!(member_id = %member.id(), name = member.name(), "Member created");
        Ok(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{details, MockMemberRepository};

    #[tokio::test]
    async fn creates_and_persists_member() {
        let repo = Arc::new(MockMemberRepository::new());
        let handler = CreateMemberHandler::new(repo.clone());

        let member = handler
            .handle(CreateMemberCommand {
                details: details("Ada", 88, 9),
            })
            .await
            .unwrap();

        assert_eq!(member.name(), "Ada");
        assert_eq!(member.total_tasks(), 15);
        assert_eq!(repo.stored().len(), 1);
        assert_eq!(repo.stored()[0].id(), member.id());
    }

    #[tokio::test]
    async fn rejects_invalid_details_without_saving() {
        let repo = Arc::new(MockMemberRepository::new());
        let handler = CreateMemberHandler::new(repo.clone());

        let mut invalid = details("Ada", 88, 9);
        invalid.role = "Treasurer".to_string();

        let result = handler.handle(CreateMemberCommand { details: invalid }).await;
        assert!(matches!(
            result,
            Err(MemberError::ValidationFailed { ref field, .. }) if field == "role"
        ));
        assert!(repo.stored().is_empty());
    }

    #[tokio::test]
    async fn surfaces_storage_failure() {
        let repo = Arc::new(MockMemberRepository::failing_writes(Vec::new()));
        let handler = CreateMemberHandler::new(repo);

        let result = handler
            .handle(CreateMemberCommand {
                details: details("Ada", 88, 9),
            })
            .await;
        assert!(matches!(result, Err(MemberError::Infrastructure(_))));
    }
}
