//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MemberRepository` - Member persistence (write side and snapshots)
//! - `ReferenceDataReader` - Task categories and monthly registration series

mod member_repository;
mod reference_data_reader;

pub use member_repository::MemberRepository;
pub use reference_data_reader::ReferenceDataReader;
