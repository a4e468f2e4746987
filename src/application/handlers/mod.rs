//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analytics;
pub mod member;

#[cfg(test)]
pub(crate) mod test_support;

pub use analytics::{
    AnalyticsError, GetOverviewHandler, GetRegistrationMetricsHandler, GetTaskAnalyticsHandler,
    GetTaskCategoriesHandler, GetTaskLoadHandler,
};
pub use member::{
    CreateMemberCommand, CreateMemberHandler, DeleteMemberCommand, DeleteMemberHandler,
    GetMemberHandler, GetMemberQuery, ListMembersHandler, ListMembersQuery, PatchMemberCommand,
    PatchMemberHandler, RecordPerformanceCommand, RecordPerformanceHandler, ReplaceMemberCommand,
    ReplaceMemberHandler, SeedMembersHandler,
};
