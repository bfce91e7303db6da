use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde_json::json;

use super::domain::{ProfileData, ProfileId};
use super::repository::{EngagementNotifier, ProfileRepository, RepositoryError};
use super::service::{ProfileService, ProfileServiceError};
use super::views::category_progress;

/// Router builder exposing HTTP endpoints for profile intake, editing, and
/// completion queries.
pub fn profile_router<R, N>(service: Arc<ProfileService<R, N>>) -> Router
where
    R: ProfileRepository + 'static,
    N: EngagementNotifier + 'static,
{
    Router::new()
        .route("/api/v1/profiles", post(submit_handler::<R, N>))
        .route("/api/v1/profiles/:profile_id", get(summary_handler::<R, N>))
        .route("/api/v1/profiles/:profile_id", put(update_handler::<R, N>))
        .route(
            "/api/v1/profiles/:profile_id/completion",
            get(completion_handler::<R, N>),
        )
        .route(
            "/api/v1/profiles/:profile_id/onboarding",
            get(onboarding_handler::<R, N>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<ProfileService<R, N>>>,
    axum::Json(profile): axum::Json<ProfileData>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: EngagementNotifier + 'static,
{
    match service.submit(profile) {
        Ok(record) => {
            let view = record.summary_view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(ProfileServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "profile already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn summary_handler<R, N>(
    State(service): State<Arc<ProfileService<R, N>>>,
    Path(profile_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: EngagementNotifier + 'static,
{
    let id = ProfileId(profile_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.summary_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(&id, error),
    }
}

pub(crate) async fn update_handler<R, N>(
    State(service): State<Arc<ProfileService<R, N>>>,
    Path(profile_id): Path<String>,
    axum::Json(profile): axum::Json<ProfileData>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: EngagementNotifier + 'static,
{
    let id = ProfileId(profile_id);
    match service.update(&id, profile) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(&id, error),
    }
}

pub(crate) async fn completion_handler<R, N>(
    State(service): State<Arc<ProfileService<R, N>>>,
    Path(profile_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: EngagementNotifier + 'static,
{
    let id = ProfileId(profile_id);
    match service.completion(&id) {
        Ok(report) => {
            let progress = service.engine().progress(&report);
            let payload = json!({
                "report": report,
                "category_progress": category_progress(&report),
                "progress": progress,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(&id, error),
    }
}

pub(crate) async fn onboarding_handler<R, N>(
    State(service): State<Arc<ProfileService<R, N>>>,
    Path(profile_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: EngagementNotifier + 'static,
{
    let id = ProfileId(profile_id);
    match service.onboarding(&id) {
        Ok(steps) => (StatusCode::OK, axum::Json(steps)).into_response(),
        Err(error) => error_response(&id, error),
    }
}

fn error_response(id: &ProfileId, error: ProfileServiceError) -> Response {
    match error {
        ProfileServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({
                "profile_id": id.0,
                "error": "profile not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
