mod config;
mod levels;
mod recommendations;
mod scoring;

pub use config::CompletionConfig;
pub use levels::{CompletionLevel, LevelProgress};
pub use recommendations::generate_recommendations;
pub(crate) use recommendations::prompt_for;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{ProfileData, Role};
use super::registry::{Category, FieldName, FieldRegistry};

/// Stateless engine applying the field registry and scoring configuration
/// to a profile. Reports are recomputed from scratch on every call; there
/// is no I/O and no hidden state, so concurrent callers may share one
/// engine freely.
#[derive(Debug, Clone)]
pub struct CompletionEngine {
    registry: FieldRegistry,
    config: CompletionConfig,
}

impl CompletionEngine {
    pub fn new(registry: FieldRegistry, config: CompletionConfig) -> Self {
        Self { registry, config }
    }

    /// Engine over the built-in registry with baseline weights.
    pub fn standard() -> Self {
        Self::new(FieldRegistry::standard(), CompletionConfig::default())
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Score a profile. A role with no applicable fields reports 0%, never
    /// a division error; categories with no applicable fields are omitted
    /// from the breakdown entirely.
    pub fn report(&self, profile: &ProfileData) -> CompletionReport {
        let tallies = scoring::tally_fields(profile, &self.registry, &self.config);

        let percentage = tallies.overall.percentage().unwrap_or(0);
        let category_breakdown = tallies
            .per_category
            .iter()
            .filter_map(|(category, tally)| tally.percentage().map(|pct| (*category, pct)))
            .collect();
        let recommendations =
            generate_recommendations(&tallies.missing, self.config.max_recommendations);

        CompletionReport {
            role: profile.role(),
            percentage,
            level: levels::level_for(percentage, &self.config),
            category_breakdown,
            missing_fields: tallies.missing,
            recommendations,
        }
    }

    /// Distance from the report's percentage to the next level threshold.
    pub fn progress(&self, report: &CompletionReport) -> LevelProgress {
        levels::progress_to_next_level(report.percentage, &self.config)
    }
}

impl Default for CompletionEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// A field that failed the presence predicate, reported in registry
/// declaration order within its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingField {
    pub name: FieldName,
    pub category: Category,
}

/// Missing fields partitioned by tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingFields {
    pub critical: Vec<MissingField>,
    pub important: Vec<MissingField>,
    pub optional: Vec<MissingField>,
}

impl MissingFields {
    pub fn is_empty(&self) -> bool {
        self.critical.is_empty() && self.important.is_empty() && self.optional.is_empty()
    }
}

/// Computed completion snapshot for one profile. Ephemeral: derived data
/// only, safe to discard and recompute at any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionReport {
    pub role: Role,
    pub percentage: u8,
    pub level: CompletionLevel,
    pub category_breakdown: BTreeMap<Category, u8>,
    pub missing_fields: MissingFields,
    pub recommendations: Vec<String>,
}
