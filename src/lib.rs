//! Committee Dashboard - member records and derived performance analytics.
//!
//! Member records are kept behind the `MemberRepository` port; every analytics
//! view is recomputed from a snapshot by the pure engine in
//! [`domain::analytics`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
