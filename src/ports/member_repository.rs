//! Member repository port.
//!
//! Defines the contract for persisting and retrieving committee members.
//! Analytics read whole snapshots through `list_all`; mutations go through
//! the write methods one member at a time.

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::member::Member;
use async_trait::async_trait;

/// Repository port for Member persistence.
///
/// Implementations must return members from `list_all` in insertion order.
/// Ranking tie-breaks depend on it.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Save a new member.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, member: &Member) -> Result<(), DomainError>;

    /// Update an existing member in place, keeping its position.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if the member doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, member: &Member) -> Result<(), DomainError>;

    /// Find a member by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError>;

    /// Snapshot of every member, in insertion order.
    async fn list_all(&self) -> Result<Vec<Member>, DomainError>;

    /// Delete a member.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if the member doesn't exist
    async fn delete(&self, id: &MemberId) -> Result<(), DomainError>;

    /// Number of stored members.
    async fn count(&self) -> Result<u64, DomainError>;
}
