use std::collections::BTreeMap;

use super::config::CompletionConfig;
use super::{MissingField, MissingFields};
use crate::profiles::domain::ProfileData;
use crate::profiles::registry::{Category, FieldRegistry, Tier};

/// Present vs total weight for one scoring bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct WeightTally {
    pub(crate) present: u32,
    pub(crate) total: u32,
}

impl WeightTally {
    fn add(&mut self, weight: u32, present: bool) {
        self.total += weight;
        if present {
            self.present += weight;
        }
    }

    /// Rounded percentage, or `None` when no weight was applicable. The
    /// caller decides whether that means "0" (overall) or "omit" (category
    /// breakdown) so an empty bucket never reads as a false signal.
    pub(crate) fn percentage(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let pct = (f64::from(self.present) * 100.0 / f64::from(self.total)).round();
        Some(pct.clamp(0.0, 100.0) as u8)
    }
}

#[derive(Debug)]
pub(crate) struct FieldTallies {
    pub(crate) overall: WeightTally,
    pub(crate) per_category: BTreeMap<Category, WeightTally>,
    pub(crate) missing: MissingFields,
}

/// Single linear pass over the role's applicable fields applying the
/// centralized presence predicate. Both the overall percentage and the
/// category breakdown come out of this one tally, which keeps them
/// consistent with each other by construction.
pub(crate) fn tally_fields(
    profile: &ProfileData,
    registry: &FieldRegistry,
    config: &CompletionConfig,
) -> FieldTallies {
    let role = profile.role();
    let mut overall = WeightTally::default();
    let mut per_category: BTreeMap<Category, WeightTally> = BTreeMap::new();
    let mut missing = MissingFields::default();

    for definition in registry.fields_for_role(role) {
        let weight = config.weight(definition.tier);
        let present = profile.value(definition.name).is_present();

        overall.add(weight, present);
        per_category
            .entry(definition.category)
            .or_default()
            .add(weight, present);

        if !present {
            let entry = MissingField {
                name: definition.name,
                category: definition.category,
            };
            match definition.tier {
                Tier::Critical => missing.critical.push(entry),
                Tier::Important => missing.important.push(entry),
                Tier::Optional => missing.optional.push(entry),
            }
        }
    }

    FieldTallies {
        overall,
        per_category,
        missing,
    }
}
