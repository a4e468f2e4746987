//! Efficiency bands.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// Minimum efficiency for the High band.
pub const HIGH_EFFICIENCY: u8 = 85;

/// Minimum efficiency for the Moderate band.
pub const MODERATE_EFFICIENCY: u8 = 70;

/// Coarse rating of a member's efficiency, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EfficiencyBand {
    Low,
    Moderate,
    High,
}

impl EfficiencyBand {
    /// Thresholds are inclusive lower bounds.
    pub fn for_efficiency(efficiency: Percentage) -> Self {
        match efficiency.value() {
            v if v >= HIGH_EFFICIENCY => EfficiencyBand::High,
            v if v >= MODERATE_EFFICIENCY => EfficiencyBand::Moderate,
            _ => EfficiencyBand::Low,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EfficiencyBand::Low => "Low",
            EfficiencyBand::Moderate => "Moderate",
            EfficiencyBand::High => "High",
        }
    }
}

impl fmt::Display for EfficiencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
