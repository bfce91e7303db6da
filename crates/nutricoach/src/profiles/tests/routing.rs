use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use tower::ServiceExt;

use super::common::{
    build_service, complete_patient, names_only_patient, profile_router_with_service,
    read_json_body,
};
use crate::profiles::router::{completion_handler, submit_handler, summary_handler};

#[tokio::test]
async fn submit_handler_returns_created_summary() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);

    let response = submit_handler(
        State(service),
        axum::Json(names_only_patient()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["role"], "patient");
    assert_eq!(body["percentage"], 17);
    assert_eq!(body["level"], "Incomplete");
    assert_eq!(body["recommendations"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn summary_handler_reports_missing_profile() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);

    let response = summary_handler(
        State(service),
        axum::extract::Path("prof-999999".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["profile_id"], "prof-999999");
    assert_eq!(body["error"], "profile not found");
}

#[tokio::test]
async fn completion_handler_includes_progress_payload() {
    let (service, _, _) = build_service();
    let record = service.submit(names_only_patient()).expect("submit");
    let service = Arc::new(service);

    let response = completion_handler(
        State(service),
        axum::extract::Path(record.profile_id.0.clone()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["report"]["percentage"], 17);
    assert_eq!(body["progress"]["target"], 50);
    assert!(body["category_progress"].is_array());
}

#[tokio::test]
async fn router_round_trips_submit_and_update() {
    let (service, _, _) = build_service();
    let router = profile_router_with_service(service);

    let response = router
        .clone()
        .oneshot(
            Request::post("/api/v1/profiles")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&names_only_patient()).expect("serialize"),
                ))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = read_json_body(response).await;
    let profile_id = created["profile_id"].as_str().expect("id").to_string();

    let response = router
        .clone()
        .oneshot(
            Request::put(format!("/api/v1/profiles/{profile_id}"))
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&complete_patient()).expect("serialize"),
                ))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let report = read_json_body(response).await;
    assert_eq!(report["percentage"], 100);
    assert_eq!(report["level"], "excellent");

    let response = router
        .oneshot(
            Request::get(format!("/api/v1/profiles/{profile_id}/onboarding"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let steps = read_json_body(response).await;
    assert_eq!(steps.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn router_rejects_malformed_profile_payload() {
    let (service, _, _) = build_service();
    let router = profile_router_with_service(service);

    let response = router
        .oneshot(
            Request::post("/api/v1/profiles")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"role":"astronaut"}"#))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
