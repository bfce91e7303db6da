use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use nutricoach::profiles::{
    category_progress, profile_router, CategoryProgressEntry, CompletionConfig, CompletionEngine,
    CompletionReport, EngagementNotifier, FieldRegistry, LevelProgress, ProfileData,
    ProfileRepository, ProfileService,
};

/// Stateless scoring request for clients that keep profile data on their
/// own side (the mobile app's draft editor previews completion this way).
#[derive(Debug, Deserialize)]
pub(crate) struct CompletionPreviewRequest {
    pub(crate) profile: ProfileData,
    #[serde(default)]
    pub(crate) max_recommendations: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompletionPreviewResponse {
    pub(crate) report: CompletionReport,
    pub(crate) category_progress: Vec<CategoryProgressEntry>,
    pub(crate) progress: LevelProgress,
}

pub(crate) fn with_profile_routes<R, N>(service: Arc<ProfileService<R, N>>) -> axum::Router
where
    R: ProfileRepository + 'static,
    N: EngagementNotifier + 'static,
{
    profile_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/profiles/report",
            axum::routing::post(completion_preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn completion_preview_endpoint(
    Json(payload): Json<CompletionPreviewRequest>,
) -> Json<CompletionPreviewResponse> {
    let CompletionPreviewRequest {
        profile,
        max_recommendations,
    } = payload;

    let config = match max_recommendations {
        Some(cap) => CompletionConfig {
            max_recommendations: cap,
            ..CompletionConfig::default()
        },
        None => CompletionConfig::default(),
    };
    let engine = CompletionEngine::new(FieldRegistry::standard(), config);

    let report = engine.report(&profile);
    let progress = engine.progress(&report);

    Json(CompletionPreviewResponse {
        category_progress: category_progress(&report),
        progress,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use nutricoach::profiles::{CompletionLevel, PatientProfile, Role};

    fn draft_patient() -> ProfileData {
        let mut profile = PatientProfile::default();
        profile.identity.first_name = Some("Noor".to_string());
        profile.identity.last_name = Some("Haddad".to_string());
        ProfileData::Patient(profile)
    }

    #[tokio::test]
    async fn completion_preview_scores_a_draft_profile() {
        let request = CompletionPreviewRequest {
            profile: draft_patient(),
            max_recommendations: None,
        };

        let Json(body) = completion_preview_endpoint(Json(request)).await;

        assert_eq!(body.report.role, Role::Patient);
        assert_eq!(body.report.percentage, 17);
        assert_eq!(body.report.level, CompletionLevel::Incomplete);
        assert_eq!(body.report.recommendations.len(), 5);
        assert_eq!(body.progress.current, 17);
        assert_eq!(body.progress.target, 50);
        assert!(!body.category_progress.is_empty());
    }

    #[tokio::test]
    async fn completion_preview_honors_the_recommendation_cap() {
        let request = CompletionPreviewRequest {
            profile: draft_patient(),
            max_recommendations: Some(2),
        };

        let Json(body) = completion_preview_endpoint(Json(request)).await;

        assert_eq!(body.report.recommendations.len(), 2);
        assert!(!body.report.missing_fields.critical.is_empty());
    }
}
