//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Insert the sample committee when the store starts empty
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,

    /// Emit JSON logs outside production (production always does)
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            seed_sample_data: default_seed_sample_data(),
            json_logs: false,
        }
    }
}

fn default_seed_sample_data() -> bool {
    true
}
