//! SeedMembersHandler - fills an empty store with the sample committee.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::{sample_members, Member, MemberError};
use crate::ports::MemberRepository;

/// Handler that inserts the sample members when the store is empty.
pub struct SeedMembersHandler {
    repository: Arc<dyn MemberRepository>,
}

impl SeedMembersHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    /// Returns the number of members inserted. A non-empty store is left alone.
    pub async fn handle(&self) -> Result<usize, MemberError> {
        let existing = self.repository.count().await?;
        if existing > 0 {
            tracing::debug!(existing, "Store already populated, skipping seed");
            return Ok(0);
        }

        let samples = sample_members();
        let inserted = samples.len();
        for details in samples {
            let member = Member::new(MemberId::new(), details)?;
            self.repository.save(&member).await?;
        }

        tracing::info!(inserted, "Seeded sample members");
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{stored_member, MockMemberRepository};

    #[tokio::test]
    async fn seeds_empty_store_in_order() {
        let repo = Arc::new(MockMemberRepository::new());
        let handler = SeedMembersHandler::new(repo.clone());

        assert_eq!(handler.handle().await.unwrap(), 5);

        let stored = repo.stored();
        assert_eq!(stored.len(), 5);
        assert_eq!(stored[0].name(), "Sarah Johnson");
        assert_eq!(stored[4].name(), "Lisa Thompson");
    }

    #[tokio::test]
    async fn leaves_populated_store_alone() {
        let repo = Arc::new(MockMemberRepository::with_members(vec![stored_member("Ada", 70, 4)]));
        let handler = SeedMembersHandler::new(repo.clone());

        assert_eq!(handler.handle().await.unwrap(), 0);
        assert_eq!(repo.stored().len(), 1);
    }

    #[tokio::test]
    async fn is_idempotent() {
        let repo = Arc::new(MockMemberRepository::new());
        let handler = SeedMembersHandler::new(repo.clone());

        handler.handle().await.unwrap();
        handler.handle().await.unwrap();
        assert_eq!(repo.stored().len(), 5);
    }
}
