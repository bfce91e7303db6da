use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::completion::CompletionReport;
use super::domain::{ProfileData, ProfileId};
use super::views::ProfileSummaryView;

/// Repository record pairing the stored profile with its most recently
/// computed completion report. The report is derived data; it is kept on
/// the record only so list/status endpoints can answer without re-scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub profile_id: ProfileId,
    pub profile: ProfileData,
    pub last_report: Option<CompletionReport>,
}

impl ProfileRecord {
    pub fn summary_view(&self) -> ProfileSummaryView {
        ProfileSummaryView {
            profile_id: self.profile_id.clone(),
            role: self.profile.role().label(),
            percentage: self.last_report.as_ref().map(|report| report.percentage),
            level: self
                .last_report
                .as_ref()
                .map(|report| report.level.label()),
            recommendations: self
                .last_report
                .as_ref()
                .map(|report| report.recommendations.clone())
                .unwrap_or_default(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ProfileRepository: Send + Sync {
    fn insert(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError>;
    fn update(&self, record: ProfileRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ProfileId) -> Result<Option<ProfileRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound engagement hook (e-mail or push adapters) invoked on profile
/// milestones.
pub trait EngagementNotifier: Send + Sync {
    fn publish(&self, alert: MilestoneAlert) -> Result<(), NotificationError>;
}

/// Payload handed to engagement adapters when a milestone is reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneAlert {
    pub template: String,
    pub profile_id: ProfileId,
    pub details: BTreeMap<String, String>,
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
