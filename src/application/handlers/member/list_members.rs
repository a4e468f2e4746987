//! ListMembersHandler - Query handler for the member list with optional search.

use std::sync::Arc;

use crate::domain::member::{Member, MemberError};
use crate::ports::MemberRepository;

/// Query for members, optionally filtered by a name or role substring.
#[derive(Debug, Clone, Default)]
pub struct ListMembersQuery {
    pub search: Option<String>,
}

pub struct ListMembersHandler {
    repository: Arc<dyn MemberRepository>,
}

impl ListMembersHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    /// Members in insertion order. Search is case-insensitive.
    pub async fn handle(&self, query: ListMembersQuery) -> Result<Vec<Member>, MemberError> {
        let members = self.repository.list_all().await?;
        Ok(match query.search.as_deref() {
            Some(term) => members.into_iter().filter(|m| m.matches_search(term)).collect(),
            None => members,
        })
    }
}
