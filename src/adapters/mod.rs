//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `memory` - in-process member store and static reference data
//! - `postgres` - sqlx-backed member store

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::{InMemoryMemberRepository, StaticReferenceData};
pub use postgres::PostgresMemberRepository;
