//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresMemberRepository` - Member persistence in `committee_members`

mod member_repository;

pub use member_repository::PostgresMemberRepository;
