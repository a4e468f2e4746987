//! Member command and query handlers.

mod create_member;
mod delete_member;
mod get_member;
mod list_members;
mod patch_member;
mod record_performance;
mod replace_member;
mod seed_members;

pub use create_member::{CreateMemberCommand, CreateMemberHandler};
pub use delete_member::{DeleteMemberCommand, DeleteMemberHandler};
pub use get_member::{GetMemberHandler, GetMemberQuery};
pub use list_members::{ListMembersHandler, ListMembersQuery};
pub use patch_member::{PatchMemberCommand, PatchMemberHandler};
pub use record_performance::{RecordPerformanceCommand, RecordPerformanceHandler};
pub use replace_member::{ReplaceMemberCommand, ReplaceMemberHandler};
pub use seed_members::SeedMembersHandler;
