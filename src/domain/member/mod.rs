//! Member module - committee members and their write-side rules.

mod aggregate;
mod errors;
mod performance;
mod role;
mod samples;

pub use aggregate::{
    Member, MemberChanges, MemberDetails, MAX_CONTACT_LENGTH, MAX_NAME_LENGTH,
};
pub use errors::MemberError;
pub use performance::{PerformanceEntry, PerformanceInput, MAX_MONTH_LABEL_LENGTH};
pub use role::MemberRole;
pub use samples::sample_members;
