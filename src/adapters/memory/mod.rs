//! In-process adapters.

mod member_repository;
mod reference_data;

pub use member_repository::InMemoryMemberRepository;
pub use reference_data::StaticReferenceData;
