use std::sync::Mutex;

use super::completion::{CompletionEngine, CompletionReport, LevelProgress};
use super::domain::ProfileData;

/// Memoizing wrapper around [`CompletionEngine`] for reactive surfaces
/// that re-request the report on every render. The cache holds only the
/// most recent (profile, report) pair, compared structurally, so repeated
/// queries for an unchanged profile never re-score. Correctness never
/// depends on the cache: a miss just recomputes.
#[derive(Debug)]
pub struct CompletionStore {
    engine: CompletionEngine,
    cache: Mutex<Option<CacheEntry>>,
}

#[derive(Debug)]
struct CacheEntry {
    profile: ProfileData,
    report: CompletionReport,
}

impl CompletionStore {
    pub fn new(engine: CompletionEngine) -> Self {
        Self {
            engine,
            cache: Mutex::new(None),
        }
    }

    pub fn engine(&self) -> &CompletionEngine {
        &self.engine
    }

    /// Current report for the profile, recomputed only when the profile
    /// value actually changed since the previous call.
    pub fn report(&self, profile: &ProfileData) -> CompletionReport {
        let mut guard = self.cache.lock().expect("completion cache poisoned");

        if let Some(entry) = guard.as_ref() {
            if entry.profile == *profile {
                return entry.report.clone();
            }
        }

        let report = self.engine.report(profile);
        *guard = Some(CacheEntry {
            profile: profile.clone(),
            report: report.clone(),
        });
        report
    }

    /// Progress toward the next completion level for the given profile.
    pub fn progress(&self, profile: &ProfileData) -> LevelProgress {
        let report = self.report(profile);
        self.engine.progress(&report)
    }
}

impl Default for CompletionStore {
    fn default() -> Self {
        Self::new(CompletionEngine::standard())
    }
}
