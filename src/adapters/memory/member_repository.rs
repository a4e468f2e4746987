//! In-memory member store.
//!
//! Keeps members in a `Vec` so snapshots come back in insertion order. Used
//! when no database is configured, and by the HTTP integration tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::domain::member::Member;
use crate::ports::MemberRepository;

/// In-memory implementation of [`MemberRepository`].
///
/// Locks are held only for the copy or mutation, never across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberRepository {
    members: Arc<RwLock<Vec<Member>>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: &MemberId) -> DomainError {
    DomainError::new(ErrorCode::MemberNotFound, format!("Member not found: {}", id))
        .with_detail("member_id", id.to_string())
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn save(&self, member: &Member) -> Result<(), DomainError> {
        let mut members = self
            .members
            .write()
            .map_err(|_| DomainError::lock_poisoned("members"))?;
        members.push(member.clone());
        Ok(())
    }

    async fn update(&self, member: &Member) -> Result<(), DomainError> {
        let mut members = self
            .members
            .write()
            .map_err(|_| DomainError::lock_poisoned("members"))?;
        let slot = members
            .iter_mut()
            .find(|m| m.id() == member.id())
            .ok_or_else(|| not_found(member.id()))?;
        *slot = member.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        let members = self
            .members
            .read()
            .map_err(|_| DomainError::lock_poisoned("members"))?;
        Ok(members.iter().find(|m| m.id() == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Member>, DomainError> {
        let members = self
            .members
            .read()
            .map_err(|_| DomainError::lock_poisoned("members"))?;
        Ok(members.clone())
    }

    async fn delete(&self, id: &MemberId) -> Result<(), DomainError> {
        let mut members = self
            .members
            .write()
            .map_err(|_| DomainError::lock_poisoned("members"))?;
        let position = members
            .iter()
            .position(|m| m.id() == id)
            .ok_or_else(|| not_found(id))?;
        members.remove(position);
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let members = self
            .members
            .read()
            .map_err(|_| DomainError::lock_poisoned("members"))?;
        Ok(members.len() as u64)
    }
}
