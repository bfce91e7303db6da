use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

use super::completion::{
    prompt_for, CompletionEngine, CompletionLevel, CompletionReport, LevelProgress,
};
use super::domain::{ProfileData, ProfileId};
use super::registry::{Category, FieldName};
use super::repository::{
    EngagementNotifier, MilestoneAlert, NotificationError, ProfileRecord, ProfileRepository,
    RepositoryError,
};

/// Service composing the repository, engagement hooks, and completion
/// engine behind one facade the router and CLI share.
pub struct ProfileService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
    engine: Arc<CompletionEngine>,
}

static PROFILE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_profile_id() -> ProfileId {
    let id = PROFILE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProfileId(format!("prof-{id:06}"))
}

impl<R, N> ProfileService<R, N>
where
    R: ProfileRepository + 'static,
    N: EngagementNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>, engine: CompletionEngine) -> Self {
        Self {
            repository,
            notifier,
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &CompletionEngine {
        &self.engine
    }

    /// Register a new profile, scoring it immediately so the first
    /// dashboard render already has a report.
    pub fn submit(&self, profile: ProfileData) -> Result<ProfileRecord, ProfileServiceError> {
        let report = self.engine.report(&profile);
        let record = ProfileRecord {
            profile_id: next_profile_id(),
            profile,
            last_report: Some(report),
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Replace a stored profile with edited form data and re-score it.
    /// Publishes an engagement milestone the first time the profile crosses
    /// into the excellent band; later saves at that band stay quiet.
    pub fn update(
        &self,
        profile_id: &ProfileId,
        profile: ProfileData,
    ) -> Result<CompletionReport, ProfileServiceError> {
        let mut record = self
            .repository
            .fetch(profile_id)?
            .ok_or(RepositoryError::NotFound)?;

        let previous_level = record.last_report.as_ref().map(|report| report.level);
        let report = self.engine.report(&profile);

        record.profile = profile;
        record.last_report = Some(report.clone());
        self.repository.update(record)?;

        let reached_excellent = report.level == CompletionLevel::Excellent
            && previous_level != Some(CompletionLevel::Excellent);
        if reached_excellent {
            let mut details = BTreeMap::new();
            details.insert("percentage".to_string(), report.percentage.to_string());
            self.notifier.publish(MilestoneAlert {
                template: "profile_complete".to_string(),
                profile_id: profile_id.clone(),
                details,
            })?;
        }

        Ok(report)
    }

    /// Fetch a stored record for API responses.
    pub fn get(&self, profile_id: &ProfileId) -> Result<ProfileRecord, ProfileServiceError> {
        let record = self
            .repository
            .fetch(profile_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Fresh completion report for a stored profile.
    pub fn completion(
        &self,
        profile_id: &ProfileId,
    ) -> Result<CompletionReport, ProfileServiceError> {
        let record = self.get(profile_id)?;
        Ok(self.engine.report(&record.profile))
    }

    /// Progress toward the next completion level for a stored profile.
    pub fn progress(&self, profile_id: &ProfileId) -> Result<LevelProgress, ProfileServiceError> {
        let report = self.completion(profile_id)?;
        Ok(self.engine.progress(&report))
    }

    /// Ordered wizard steps walking the user through their critical and
    /// important gaps. Optional gaps are left to the category breakdown.
    pub fn onboarding(
        &self,
        profile_id: &ProfileId,
    ) -> Result<Vec<OnboardingStep>, ProfileServiceError> {
        let report = self.completion(profile_id)?;
        Ok(onboarding_steps(&report))
    }
}

/// One step of the onboarding wizard. `field` is the edit target the host
/// UI navigates to; `form_section` matches the profile form's grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingStep {
    pub field: FieldName,
    pub category: Category,
    pub form_section: &'static str,
    pub prompt: String,
}

pub fn onboarding_steps(report: &CompletionReport) -> Vec<OnboardingStep> {
    report
        .missing_fields
        .critical
        .iter()
        .chain(report.missing_fields.important.iter())
        .map(|entry| OnboardingStep {
            field: entry.name,
            category: entry.category,
            form_section: entry.category.label(),
            prompt: prompt_for(entry.name, entry.category),
        })
        .collect()
}

/// Error raised by the profile service.
#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
}
