//! Performance Analyzer - totals, averages, top performer and efficiency ranking.

use serde::Serialize;

use crate::domain::foundation::Percentage;
use crate::domain::member::Member;

use super::band::EfficiencyBand;
use super::rounding::{rounded_mean, rounded_percent};

/// Headline numbers for the committee.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSummary {
    pub total_members: usize,
    pub total_tasks_completed: u64,
    pub total_tasks_pending: u64,
    pub total_registrations: u64,
    pub average_efficiency: Percentage,
    /// Absent for an empty committee.
    pub top_performer: Option<Member>,
}

/// A member with their 1-based position in an efficiency ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMember {
    pub rank: usize,
    pub band: EfficiencyBand,
    #[serde(flatten)]
    pub member: Member,
}

/// Task totals plus the efficiency leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub pending_tasks: u64,
    pub completion_rate: Percentage,
    pub average_efficiency: Percentage,
    pub ranked_members: Vec<RankedMember>,
}

/// Efficiency-based aggregation over a member snapshot.
pub struct PerformanceAnalyzer;

impl PerformanceAnalyzer {
    /// Computes the dashboard overview.
    ///
    /// # Edge Cases
    /// - Empty snapshot: all totals 0, average 0, no top performer
    pub fn summarize_overview(members: &[Member]) -> OverviewSummary {
        OverviewSummary {
            total_members: members.len(),
            total_tasks_completed: sum_by(members, Member::tasks_completed),
            total_tasks_pending: sum_by(members, Member::tasks_pending),
            total_registrations: sum_by(members, Member::registrations_brought),
            average_efficiency: Self::average_efficiency(members),
            top_performer: Self::top_performer(members).cloned(),
        }
    }

    /// Rounded mean efficiency; 0 for an empty snapshot.
    pub fn average_efficiency(members: &[Member]) -> Percentage {
        let sum = sum_by(members, |m| u32::from(m.efficiency().value()));
        let mean = rounded_mean(sum, members.len() as u64);
        Percentage::new(mean.min(100) as u8)
    }

    /// Member with the highest efficiency.
    ///
    /// On ties the earliest member in the snapshot wins. `Iterator::max_by_key`
    /// returns the last maximum, so it is not used here.
    pub fn top_performer(members: &[Member]) -> Option<&Member> {
        members.iter().fold(None, |best: Option<&Member>, candidate| match best {
            Some(current) if current.efficiency() >= candidate.efficiency() => Some(current),
            _ => Some(candidate),
        })
    }

    pub fn classify_efficiency(member: &Member) -> EfficiencyBand {
        EfficiencyBand::for_efficiency(member.efficiency())
    }

    /// Ranks members by descending efficiency.
    ///
    /// Ranks are positional (1..=N, no shared ranks). Members with equal
    /// efficiency keep their snapshot order.
    pub fn rank_by_performance(members: &[Member]) -> Vec<RankedMember> {
        let mut ordered: Vec<&Member> = members.iter().collect();
        // sort_by is stable
        ordered.sort_by(|a, b| b.efficiency().cmp(&a.efficiency()));

        ordered
            .into_iter()
            .enumerate()
            .map(|(index, member)| RankedMember {
                rank: index + 1,
                band: Self::classify_efficiency(member),
                member: member.clone(),
            })
            .collect()
    }

    /// Task totals, overall completion rate and the efficiency ranking.
    pub fn summarize_tasks(members: &[Member]) -> TaskSummary {
        let completed = sum_by(members, Member::tasks_completed);
        let pending = sum_by(members, Member::tasks_pending);
        let total = completed + pending;

        TaskSummary {
            total_tasks: total,
            completed_tasks: completed,
            pending_tasks: pending,
            completion_rate: Percentage::new(rounded_percent(completed, total).min(100) as u8),
            average_efficiency: Self::average_efficiency(members),
            ranked_members: Self::rank_by_performance(members),
        }
    }
}

pub(crate) fn sum_by(members: &[Member], field: impl Fn(&Member) -> u32) -> u64 {
    members.iter().map(|m| u64::from(field(m))).sum()
}

#[cfg(test)]
#[path = "performance_test.rs"]
mod performance_test;
