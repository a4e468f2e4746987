//! Registration Analyzer - tiers, recruiter standings and month-over-month growth.
//!
//! Growth uses a zero-result policy: when the previous month had no
//! registrations the growth is reported as 0 rather than dividing by zero.

use serde::Serialize;

use crate::domain::member::Member;
use crate::domain::reference::MonthlyRegistration;

use super::performance::sum_by;
use super::rounding::{percent, rounded_mean, rounded_percent};
use super::tier::RegistrationTier;

/// A member's place in the registration standings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStanding {
    #[serde(flatten)]
    pub member: Member,
    pub tier: RegistrationTier,
    /// Share of all registrations, unrounded.
    pub share_percentage: f64,
}

/// One month of the series with its growth over the month before.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyGrowth {
    pub month: String,
    pub registrations: u32,
    pub growth: f64,
}

/// Registrations the committee aims to bring in each month.
pub const REGISTRATION_TARGET: u64 = 75;

/// Committee progress toward [`REGISTRATION_TARGET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetProgress {
    pub target: u64,
    pub achieved: bool,
    /// Registrations still needed; 0 once the target is met.
    pub remaining: u64,
    /// `round(total / target * 100)`; exceeds 100 past the target.
    pub success_rate: u64,
}

/// Everything the registrations view needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSummary {
    pub total_registrations: u64,
    pub average_registrations_per_member: u64,
    pub top_recruiter: Option<Member>,
    pub standings: Vec<RegistrationStanding>,
    pub monthly_growth: Vec<MonthlyGrowth>,
    pub latest_growth: f64,
    pub target_progress: TargetProgress,
}

pub struct RegistrationAnalyzer;

impl RegistrationAnalyzer {
    pub fn classify_tier(member: &Member) -> RegistrationTier {
        RegistrationTier::for_registrations(member.registrations_brought())
    }

    /// Orders members by registrations brought, highest first.
    ///
    /// Equal counts keep snapshot order.
    pub fn rank_by_registrations(members: &[Member]) -> Vec<RegistrationStanding> {
        let total = sum_by(members, Member::registrations_brought);

        let mut ordered: Vec<&Member> = members.iter().collect();
        ordered.sort_by(|a, b| b.registrations_brought().cmp(&a.registrations_brought()));

        ordered
            .into_iter()
            .map(|member| RegistrationStanding {
                member: member.clone(),
                tier: Self::classify_tier(member),
                share_percentage: percent(u64::from(member.registrations_brought()), total),
            })
            .collect()
    }

    /// Member with the most registrations; the earliest wins ties.
    pub fn top_recruiter(members: &[Member]) -> Option<&Member> {
        members.iter().fold(None, |best: Option<&Member>, candidate| match best {
            Some(current) if current.registrations_brought() >= candidate.registrations_brought() => {
                Some(current)
            }
            _ => Some(candidate),
        })
    }

    /// Growth of each entry relative to the one before it.
    ///
    /// The first entry always has growth 0.
    pub fn monthly_growth(series: &[MonthlyRegistration]) -> Vec<MonthlyGrowth> {
        let mut previous: Option<u32> = None;
        series
            .iter()
            .map(|entry| {
                let growth = match previous {
                    Some(prev) if prev > 0 => {
                        (f64::from(entry.registrations) - f64::from(prev)) / f64::from(prev) * 100.0
                    }
                    _ => 0.0,
                };
                previous = Some(entry.registrations);
                MonthlyGrowth {
                    month: entry.month.clone(),
                    registrations: entry.registrations,
                    growth,
                }
            })
            .collect()
    }

    pub fn target_progress(total_registrations: u64) -> TargetProgress {
        TargetProgress {
            target: REGISTRATION_TARGET,
            achieved: total_registrations >= REGISTRATION_TARGET,
            remaining: REGISTRATION_TARGET.saturating_sub(total_registrations),
            success_rate: rounded_percent(total_registrations, REGISTRATION_TARGET),
        }
    }

    pub fn summarize(members: &[Member], series: &[MonthlyRegistration]) -> RegistrationSummary {
        let total = sum_by(members, Member::registrations_brought);
        let monthly_growth = Self::monthly_growth(series);
        let latest_growth = monthly_growth.last().map_or(0.0, |m| m.growth);

        RegistrationSummary {
            total_registrations: total,
            average_registrations_per_member: rounded_mean(total, members.len() as u64),
            top_recruiter: Self::top_recruiter(members).cloned(),
            standings: Self::rank_by_registrations(members),
            monthly_growth,
            latest_growth,
            target_progress: Self::target_progress(total),
        }
    }
}

#[cfg(test)]
#[path = "registrations_test.rs"]
mod registrations_test;
