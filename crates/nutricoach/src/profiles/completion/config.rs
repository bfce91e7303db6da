use serde::{Deserialize, Serialize};

use crate::profiles::registry::Tier;

/// Tunable weights, level thresholds, and recommendation cap for the
/// completion engine. The defaults (3:2:1 weights, 50/70/90 thresholds,
/// cap of 5) are the platform baseline; deployments may override any of
/// them, but every caller in one process should share a single value so
/// scores stay comparable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionConfig {
    pub critical_weight: u32,
    pub important_weight: u32,
    pub optional_weight: u32,
    /// Percentage at which a profile leaves `incomplete`.
    pub basic_threshold: u8,
    /// Percentage at which a profile becomes `good`.
    pub good_threshold: u8,
    /// Percentage at which a profile becomes `excellent`.
    pub excellent_threshold: u8,
    pub max_recommendations: usize,
}

impl CompletionConfig {
    pub const fn weight(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Critical => self.critical_weight,
            Tier::Important => self.important_weight,
            Tier::Optional => self.optional_weight,
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            critical_weight: 3,
            important_weight: 2,
            optional_weight: 1,
            basic_threshold: 50,
            good_threshold: 70,
            excellent_threshold: 90,
            max_recommendations: 5,
        }
    }
}
