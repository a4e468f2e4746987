//! Committee role definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Role a member holds on the committee.
///
/// The set is fixed; the wire representation is the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberRole {
    #[serde(rename = "Team Lead")]
    TeamLead,
    #[serde(rename = "Marketing Coordinator")]
    MarketingCoordinator,
    #[serde(rename = "Event Coordinator")]
    EventCoordinator,
    #[serde(rename = "Outreach Specialist")]
    OutreachSpecialist,
    #[serde(rename = "Communications Manager")]
    CommunicationsManager,
    #[serde(rename = "Project Manager")]
    ProjectManager,
    #[serde(rename = "Administrative Assistant")]
    AdministrativeAssistant,
    #[serde(rename = "Content Creator")]
    ContentCreator,
}

impl MemberRole {
    /// Every role, in the order offered to users.
    pub const ALL: [MemberRole; 8] = [
        MemberRole::TeamLead,
        MemberRole::MarketingCoordinator,
        MemberRole::EventCoordinator,
        MemberRole::OutreachSpecialist,
        MemberRole::CommunicationsManager,
        MemberRole::ProjectManager,
        MemberRole::AdministrativeAssistant,
        MemberRole::ContentCreator,
    ];

    /// Returns the display name for this role.
    pub fn display_name(&self) -> &'static str {
        match self {
            MemberRole::TeamLead => "Team Lead",
            MemberRole::MarketingCoordinator => "Marketing Coordinator",
            MemberRole::EventCoordinator => "Event Coordinator",
            MemberRole::OutreachSpecialist => "Outreach Specialist",
            MemberRole::CommunicationsManager => "Communications Manager",
            MemberRole::ProjectManager => "Project Manager",
            MemberRole::AdministrativeAssistant => "Administrative Assistant",
            MemberRole::ContentCreator => "Content Creator",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MemberRole {
    type Err = ValidationError;

    /// Parses a display name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.is_empty() {
            return Err(ValidationError::empty_field("role"));
        }
        MemberRole::ALL
            .iter()
            .copied()
            .find(|role| role.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ValidationError::invalid_format("role", format!("unknown role '{}'", wanted))
            })
    }
}
