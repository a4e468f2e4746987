//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers validate at the write boundary and persist; query handlers
//! load a snapshot and run the aggregation engine over it.

pub mod handlers;

pub use handlers::*;
