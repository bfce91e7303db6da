use super::MissingFields;
use crate::profiles::registry::{Category, FieldName};

/// Build up to `max_count` action items from the missing-field partitions.
/// Critical gaps come first, then important ones. Optional gaps are never
/// surfaced here; they only show up through the category breakdown.
pub fn generate_recommendations(missing: &MissingFields, max_count: usize) -> Vec<String> {
    missing
        .critical
        .iter()
        .chain(missing.important.iter())
        .take(max_count)
        .map(|entry| prompt_for(entry.name, entry.category))
        .collect()
}

/// Deterministic template keyed on the field's category; localization is a
/// presentation concern, not handled here.
pub(crate) fn prompt_for(name: FieldName, category: Category) -> String {
    let label = name.label();
    match category {
        Category::Basic => {
            format!("Add your {label} so your coach knows who they are working with")
        }
        Category::Professional => {
            format!("Complete your {label} to build trust with prospective patients")
        }
        Category::Medical => {
            format!("Record your {label} to keep meal plans safe and accurate")
        }
        Category::Contact => {
            format!("Provide your {label} so we can reach you about appointments")
        }
        Category::Preferences => {
            format!("Set your {label} to personalize your coaching plan")
        }
    }
}
