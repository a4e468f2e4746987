//! Sample committee used to seed an empty store.

use super::aggregate::MemberDetails;
use super::performance::PerformanceInput;

#[allow(clippy::too_many_arguments)]
fn sample(
    name: &str,
    role: &str,
    contact: &str,
    phone: &str,
    tasks_completed: u32,
    tasks_pending: u32,
    efficiency: i64,
    registrations_brought: u32,
    history: [i64; 3],
) -> MemberDetails {
    MemberDetails {
        name: name.to_string(),
        role: role.to_string(),
        contact: contact.to_string(),
        phone: Some(phone.to_string()),
        tasks_completed,
        tasks_pending,
        efficiency,
        registrations_brought,
        performance_history: ["Jan", "Feb", "Mar"]
            .iter()
            .zip(history)
            .map(|(month, score)| PerformanceInput::new(*month, score))
            .collect(),
    }
}

/// The five sample members, in display order.
pub fn sample_members() -> Vec<MemberDetails> {
    vec![
        sample(
            "Sarah Johnson",
            "Team Lead",
            "sarah.johnson@email.com",
            "+1 (555) 123-4567",
            15,
            3,
            85,
            12,
            [78, 82, 85],
        ),
        sample(
            "Michael Chen",
            "Marketing Coordinator",
            "michael.chen@email.com",
            "+1 (555) 234-5678",
            22,
            5,
            92,
            18,
            [88, 90, 92],
        ),
        sample(
            "Emily Rodriguez",
            "Event Coordinator",
            "emily.rodriguez@email.com",
            "+1 (555) 345-6789",
            11,
            7,
            72,
            8,
            [75, 70, 72],
        ),
        sample(
            "David Kim",
            "Outreach Specialist",
            "david.kim@email.com",
            "+1 (555) 456-7890",
            19,
            2,
            88,
            15,
            [85, 87, 88],
        ),
        sample(
            "Lisa Thompson",
            "Communications Manager",
            "lisa.thompson@email.com",
            "+1 (555) 567-8901",
            13,
            4,
            79,
            10,
            [76, 78, 79],
        ),
    ]
}
