use serde::Serialize;

use super::completion::CompletionReport;
use super::domain::ProfileId;
use super::registry::Category;

/// Summary-card payload for the dashboard header.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummaryView {
    pub profile_id: ProfileId,
    pub role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<&'static str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

/// One row of the per-category progress visualization. Categories with no
/// applicable fields for the role are not rendered at all.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryProgressEntry {
    pub category: Category,
    pub category_label: &'static str,
    pub percentage: u8,
}

pub fn category_progress(report: &CompletionReport) -> Vec<CategoryProgressEntry> {
    report
        .category_breakdown
        .iter()
        .map(|(category, percentage)| CategoryProgressEntry {
            category: *category,
            category_label: category.label(),
            percentage: *percentage,
        })
        .collect()
}
