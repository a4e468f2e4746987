//! Task Analyzer - category rollups and per-member task load.

use serde::Serialize;

use crate::domain::foundation::{MemberId, Percentage};
use crate::domain::member::Member;
use crate::domain::reference::TaskCategory;

use super::rounding::{percent, rounded_percent};

/// A task category with its completion rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRollup {
    #[serde(flatten)]
    pub category: TaskCategory,
    pub completion_rate: Percentage,
}

/// How a member's workload compares to the busiest member.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskLoad {
    pub member_id: MemberId,
    pub name: String,
    pub total_tasks: u32,
    /// Share of the largest workload, unrounded.
    pub load_percentage: f64,
    pub overloaded: bool,
}

pub struct TaskAnalyzer;

impl TaskAnalyzer {
    /// Attaches a rounded completion rate to each category, keeping order.
    pub fn rollup_categories(categories: &[TaskCategory]) -> Vec<CategoryRollup> {
        categories
            .iter()
            .map(|category| {
                let rate = rounded_percent(
                    u64::from(category.completed()),
                    u64::from(category.total()),
                );
                CategoryRollup {
                    category: category.clone(),
                    completion_rate: Percentage::new(rate.min(100) as u8),
                }
            })
            .collect()
    }

    /// Load of each member relative to the maximum `total_tasks`.
    ///
    /// A member is overloaded above 80% of the maximum. When nobody has any
    /// tasks every load is 0 and nobody is overloaded.
    pub fn task_load_distribution(members: &[Member]) -> Vec<TaskLoad> {
        let max = members.iter().map(Member::total_tasks).max().unwrap_or(0);

        members
            .iter()
            .map(|member| {
                let total = member.total_tasks();
                TaskLoad {
                    member_id: *member.id(),
                    name: member.name().to_string(),
                    total_tasks: total,
                    load_percentage: percent(u64::from(total), u64::from(max)),
                    // total > 0.8 * max, kept in integers
                    overloaded: max > 0 && u64::from(total) * 5 > u64::from(max) * 4,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::test_support::member_with_tasks;
    use proptest::prelude::*;

    #[test]
    fn rollup_rates() {
        let categories = vec![
            TaskCategory::new("Event Planning", 25, 8),
            TaskCategory::new("Marketing", 18, 5),
            TaskCategory::new("Outreach", 22, 4),
            TaskCategory::new("Administration", 15, 7),
        ];
        let rates: Vec<_> = TaskAnalyzer::rollup_categories(&categories)
            .iter()
            .map(|r| r.completion_rate.value())
            .collect();
        assert_eq!(rates, vec![76, 78, 85, 68]);
    }

    #[test]
    fn empty_category_has_zero_rate() {
        let rollup = TaskAnalyzer::rollup_categories(&[TaskCategory::new("Idle", 0, 0)]);
        assert_eq!(rollup[0].completion_rate, Percentage::ZERO);
    }

    #[test]
    fn rollup_serializes_flat() {
        let rollup = TaskAnalyzer::rollup_categories(&[TaskCategory::new("Outreach", 22, 4)]);
        let json = serde_json::to_value(&rollup[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "category": "Outreach",
                "completed": 22,
                "pending": 4,
                "total": 26,
                "completionRate": 85
            })
        );
    }

    #[test]
    fn load_relative_to_busiest() {
        let members = vec![
            member_with_tasks("Busy", 80, 0, 20, 5),
            member_with_tasks("Near", 80, 0, 18, 3),
            member_with_tasks("Edge", 80, 0, 16, 4),
            member_with_tasks("Light", 80, 0, 5, 0),
        ];
        let loads = TaskAnalyzer::task_load_distribution(&members);

        assert_eq!(loads[0].load_percentage, 100.0);
        assert!(loads[0].overloaded);
        assert!((loads[1].load_percentage - 84.0).abs() < 1e-9);
        assert!(loads[1].overloaded);
        // exactly 80% is not overloaded
        assert!((loads[2].load_percentage - 80.0).abs() < 1e-9);
        assert!(!loads[2].overloaded);
        assert!(!loads[3].overloaded);
        assert_eq!(loads[3].name, "Light");
    }

    #[test]
    fn nobody_overloaded_without_tasks() {
        let members = vec![
            member_with_tasks("A", 50, 0, 0, 0),
            member_with_tasks("B", 50, 0, 0, 0),
        ];
        let loads = TaskAnalyzer::task_load_distribution(&members);
        assert!(loads.iter().all(|l| l.load_percentage == 0.0 && !l.overloaded));
    }

    #[test]
    fn load_of_empty_committee_is_empty() {
        assert!(TaskAnalyzer::task_load_distribution(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn category_invariants(completed in 0u32..10_000, pending in 0u32..10_000) {
            let category = TaskCategory::new("Any", completed, pending);
            prop_assert_eq!(category.completed() + category.pending(), category.total());

            let rollup = TaskAnalyzer::rollup_categories(&[category]);
            prop_assert!(rollup[0].completion_rate.value() <= 100);
        }

        #[test]
        fn loads_stay_within_bounds(tasks in prop::collection::vec((0u32..50, 0u32..50), 1..15)) {
            let members: Vec<_> = tasks
                .iter()
                .enumerate()
                .map(|(i, (c, p))| member_with_tasks(&format!("M{i}"), 50, 0, *c, *p))
                .collect();
            for load in TaskAnalyzer::task_load_distribution(&members) {
                prop_assert!((0.0..=100.0).contains(&load.load_percentage));
            }
        }
    }
}
