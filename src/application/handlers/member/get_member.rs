//! GetMemberHandler - Query handler for a single member.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberError};
use crate::ports::MemberRepository;

#[derive(Debug, Clone)]
pub struct GetMemberQuery {
    pub member_id: MemberId,
}

pub struct GetMemberHandler {
    repository: Arc<dyn MemberRepository>,
}

impl GetMemberHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetMemberQuery) -> Result<Member, MemberError> {
        self.repository
            .find_by_id(&query.member_id)
            .await?
            .ok_or_else(|| MemberError::not_found(query.member_id))
    }
}
