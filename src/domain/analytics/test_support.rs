//! Member fixtures for analyzer tests.

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberDetails};

pub(crate) fn member(name: &str, efficiency: i64, registrations: u32) -> Member {
    member_with_tasks(name, efficiency, registrations, 10, 2)
}

pub(crate) fn member_with_tasks(
    name: &str,
    efficiency: i64,
    registrations: u32,
    completed: u32,
    pending: u32,
) -> Member {
    Member::new(
        MemberId::new(),
        MemberDetails {
            name: name.to_string(),
            role: "Team Lead".to_string(),
            contact: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            tasks_completed: completed,
            tasks_pending: pending,
            efficiency,
            registrations_brought: registrations,
            ..MemberDetails::default()
        },
    )
    .unwrap()
}

/// The three-member committee from the dashboard walkthrough.
pub(crate) fn trio() -> Vec<Member> {
    vec![
        member("Ada", 85, 12),
        member("Brook", 92, 18),
        member("Cato", 72, 8),
    ]
}
