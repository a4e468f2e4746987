//! Analytics Aggregation Engine.
//!
//! Pure functions over a borrowed member snapshot. Nothing here performs I/O
//! or keeps state between calls, so every view is recomputed from the current
//! snapshot on each request.
//!
//! - [`PerformanceAnalyzer`] - overview, efficiency ranking and bands, task summary
//! - [`RegistrationAnalyzer`] - tiers, standings, monthly growth, target progress
//! - [`TaskAnalyzer`] - category rollups, task-load distribution

mod band;
mod performance;
mod registrations;
mod rounding;
mod tasks;
mod tier;

#[cfg(test)]
pub(crate) mod test_support;

pub use band::{EfficiencyBand, HIGH_EFFICIENCY, MODERATE_EFFICIENCY};
pub use performance::{OverviewSummary, PerformanceAnalyzer, RankedMember, TaskSummary};
pub use registrations::{
    MonthlyGrowth, RegistrationAnalyzer, RegistrationStanding, RegistrationSummary,
    TargetProgress, REGISTRATION_TARGET,
};
pub use tasks::{CategoryRollup, TaskAnalyzer, TaskLoad};
pub use tier::{RegistrationTier, GOLD_THRESHOLD, PLATINUM_THRESHOLD, SILVER_THRESHOLD};
