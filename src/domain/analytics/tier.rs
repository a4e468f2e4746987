//! Registration tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum registrations for Silver.
pub const SILVER_THRESHOLD: u32 = 8;

/// Minimum registrations for Gold.
pub const GOLD_THRESHOLD: u32 = 12;

/// Minimum registrations for Platinum.
pub const PLATINUM_THRESHOLD: u32 = 15;

/// Tier earned from registrations brought, lowest to highest.
///
/// Derived on every aggregation pass; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RegistrationTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl RegistrationTier {
    /// Classifies a registration count. Thresholds are inclusive lower bounds.
    pub fn for_registrations(registrations: u32) -> Self {
        if registrations >= PLATINUM_THRESHOLD {
            RegistrationTier::Platinum
        } else if registrations >= GOLD_THRESHOLD {
            RegistrationTier::Gold
        } else if registrations >= SILVER_THRESHOLD {
            RegistrationTier::Silver
        } else {
            RegistrationTier::Bronze
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RegistrationTier::Bronze => "Bronze",
            RegistrationTier::Silver => "Silver",
            RegistrationTier::Gold => "Gold",
            RegistrationTier::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for RegistrationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(RegistrationTier::for_registrations(0), RegistrationTier::Bronze);
        assert_eq!(RegistrationTier::for_registrations(7), RegistrationTier::Bronze);
        assert_eq!(RegistrationTier::for_registrations(8), RegistrationTier::Silver);
        assert_eq!(RegistrationTier::for_registrations(11), RegistrationTier::Silver);
        assert_eq!(RegistrationTier::for_registrations(12), RegistrationTier::Gold);
        assert_eq!(RegistrationTier::for_registrations(14), RegistrationTier::Gold);
        assert_eq!(RegistrationTier::for_registrations(15), RegistrationTier::Platinum);
        assert_eq!(RegistrationTier::for_registrations(u32::MAX), RegistrationTier::Platinum);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(RegistrationTier::Bronze < RegistrationTier::Silver);
        assert!(RegistrationTier::Silver < RegistrationTier::Gold);
        assert!(RegistrationTier::Gold < RegistrationTier::Platinum);
    }

    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&RegistrationTier::Platinum).unwrap();
        assert_eq!(json, "\"Platinum\"");
    }

    proptest! {
        #[test]
        fn more_registrations_never_lower_the_tier(a in 0u32..100, b in 0u32..100) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                RegistrationTier::for_registrations(low) <= RegistrationTier::for_registrations(high)
            );
        }
    }
}
