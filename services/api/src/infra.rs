use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use nutricoach::config::CompletionOptions;
use nutricoach::profiles::{
    CompletionConfig, CompletionEngine, EngagementNotifier, FieldRegistry, MilestoneAlert,
    NotificationError, ProfileId, ProfileRecord, ProfileRepository, RepositoryError,
};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    records: Arc<Mutex<HashMap<ProfileId, ProfileRecord>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
    fn insert(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ProfileRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile_id) {
            guard.insert(record.profile_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ProfileId) -> Result<Option<ProfileRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Logs milestone alerts instead of dispatching them; e-mail and push
/// adapters plug in behind the same trait in deployed environments.
#[derive(Default, Clone)]
pub(crate) struct LoggingEngagementNotifier {
    events: Arc<Mutex<Vec<MilestoneAlert>>>,
}

impl EngagementNotifier for LoggingEngagementNotifier {
    fn publish(&self, alert: MilestoneAlert) -> Result<(), NotificationError> {
        info!(
            template = %alert.template,
            profile_id = %alert.profile_id.0,
            "engagement milestone reached"
        );
        let mut guard = self.events.lock().expect("alert mutex poisoned");
        guard.push(alert);
        Ok(())
    }
}

impl LoggingEngagementNotifier {
    pub(crate) fn events(&self) -> Vec<MilestoneAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

pub(crate) fn completion_engine(options: &CompletionOptions) -> CompletionEngine {
    let config = CompletionConfig {
        max_recommendations: options.max_recommendations,
        ..CompletionConfig::default()
    };
    CompletionEngine::new(FieldRegistry::standard(), config)
}
