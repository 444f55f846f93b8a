use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::assessment::HealthAssessmentService;
use crate::identity::AuthenticatedUser;

fn post_assessment(user: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::post("/api/v1/assessments")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).expect("body encodes")))
        .expect("request builds")
}

fn get_as(uri: &str, user: &str) -> Request<Body> {
    Request::get(uri)
        .header("x-user-id", user)
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn submit_route_returns_created_assessment() {
    let (service, repository) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_assessment(
            Some("alice"),
            json!({
                "family_history": "yes",
                "symptoms": [],
                "exercise_frequency": "often",
                "chronic_condition": "",
                "medications": "",
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["risk_level"], json!("Moderate"));
    assert_eq!(
        payload["risk_factors"],
        json!(["family history of chronic diseases"])
    );
    assert_eq!(payload["recommendations"], json!([]));
    assert!(payload["record_id"].as_str().is_some());
    assert_eq!(repository.all().len(), 1);
}

#[tokio::test]
async fn submit_route_accepts_single_symptom_string() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_assessment(
            Some("alice"),
            json!({ "symptoms": "chest_pain" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["risk_level"], json!("High"));
}

#[tokio::test]
async fn submit_route_requires_identity() {
    let (service, repository) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_assessment(None, json!({})))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(repository.all().is_empty());
}

#[tokio::test]
async fn submit_route_rejects_wrong_field_types() {
    let (service, repository) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_assessment(
            Some("alice"),
            json!({ "chronic_condition": { "name": "asthma" } }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload.get("error").is_some());
    assert!(repository.all().is_empty());
}

#[tokio::test]
async fn submit_handler_reports_outage_as_retryable() {
    let service = Arc::new(HealthAssessmentService::new(Arc::new(
        UnavailableRepository,
    )));

    let response = crate::assessment::router::submit_handler::<UnavailableRepository>(
        State(service),
        AuthenticatedUser(user("alice")),
        Ok(axum::Json(healthy_answers())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let payload = read_json_body(response).await;
    assert_eq!(payload["retryable"], json!(true));
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_conflict() {
    let service = Arc::new(HealthAssessmentService::new(Arc::new(ConflictRepository)));

    let response = crate::assessment::router::submit_handler::<ConflictRepository>(
        State(service),
        AuthenticatedUser(user("alice")),
        Ok(axum::Json(healthy_answers())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn history_route_lists_only_callers_records() {
    let (service, _) = build_service();
    service
        .submit_at(&user("alice"), healthy_answers(), at(8))
        .expect("alice first");
    service
        .submit_at(&user("alice"), worst_case_answers(), at(12))
        .expect("alice second");
    service
        .submit_at(&user("bob"), worst_case_answers(), at(9))
        .expect("bob");
    let router = router_with_service(service);

    let response = router
        .oneshot(get_as("/api/v1/assessments", "alice"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let records = payload.as_array().expect("array payload");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["risk_level"], json!("High"));
    assert_eq!(records[0]["answers"]["family_history"], json!("yes"));
    assert_eq!(records[1]["risk_level"], json!("Low"));
}

#[tokio::test]
async fn history_route_maps_outage_to_service_unavailable() {
    let service = HealthAssessmentService::new(Arc::new(UnavailableRepository));
    let router = crate::assessment::assessment_router(Arc::new(service));

    let response = router
        .oneshot(get_as("/api/v1/assessments", "alice"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn dashboard_route_summarises_latest_assessment() {
    let (service, _) = build_service();
    service
        .submit_at(&user("alice"), worst_case_answers(), at(10))
        .expect("submission");
    let router = router_with_service(service);

    let response = router
        .oneshot(get_as("/api/v1/dashboard", "alice"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total_assessments"], json!(1));
    assert!(payload["latest_assessment"]["report"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Health Assessment Result:"));
}

#[tokio::test]
async fn chronic_diseases_route_is_public() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/chronic-diseases")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload[0]["key"], json!("diabetes"));
    assert_eq!(payload.as_array().map(Vec::len), Some(3));
}
