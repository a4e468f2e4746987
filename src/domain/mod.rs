//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, percentages, timestamps, errors)
//! - `member` - Committee member aggregate, roles and performance history
//! - `reference` - Read-only task categories and monthly registration series
//! - `analytics` - Pure aggregation over member snapshots

pub mod analytics;
pub mod foundation;
pub mod member;
pub mod reference;
