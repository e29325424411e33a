use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::producers::router::{resolve_handler, ResolveRequest, ResolveRequestError};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

fn request(kind: Option<&str>, value: Option<&str>) -> ResolveRequest {
    ResolveRequest {
        kind: kind.map(str::to_string),
        value: value.map(str::to_string),
    }
}

#[test]
fn validation_reports_missing_and_invalid_fields() {
    assert_eq!(
        request(None, Some("Oban")).validate(),
        Err(ResolveRequestError::MissingKind)
    );
    assert_eq!(
        request(Some(""), Some("Oban")).validate(),
        Err(ResolveRequestError::MissingKind)
    );
    assert_eq!(
        request(Some("distiller"), None).validate(),
        Err(ResolveRequestError::MissingValue)
    );
    assert!(matches!(
        request(Some("cooper"), Some("Oban")).validate(),
        Err(ResolveRequestError::InvalidKind(_))
    ));
}

#[tokio::test]
async fn resolve_handler_returns_resolution() {
    let response = resolve_handler(
        State(build_service()),
        axum::Json(request(Some("distiller"), Some("Glenfidich"))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["resolution"]["resolvedName"], "Glenfiddich");
    assert_eq!(body["resolution"]["confidence"], "high");
    assert_eq!(body["resolution"]["normalized"], "Glenfidich");
}

#[tokio::test]
async fn resolve_handler_rejects_unknown_kind() {
    let response = resolve_handler(
        State(build_service()),
        axum::Json(request(Some("blender"), Some("Compass Box"))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("blender"));
}

#[tokio::test]
async fn resolve_route_accepts_payloads() {
    let router = router_with_service(build_service());

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/producers/resolve")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&json!({ "kind": "bottler", "value": "Douglas Laing & Co" }))
                        .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["resolution"]["input"], "Douglas Laing & Co");
    assert_eq!(body["resolution"]["resolvedName"], "Douglas Laing");
    assert_eq!(body["resolution"]["suggestions"][0], "Douglas Laing");
}

#[tokio::test]
async fn resolve_route_rejects_missing_value() {
    let router = router_with_service(build_service());

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/producers/resolve")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(r#"{"kind":"distiller"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "value is required");
}

#[tokio::test]
async fn low_confidence_resolution_serializes_null_name() {
    let response = resolve_handler(
        State(build_service()),
        axum::Json(request(Some("distiller"), Some("Ben"))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["resolution"]["confidence"], "low");
    assert!(body["resolution"]["resolvedName"].is_null());
    assert_eq!(body["resolution"]["suggestions"], json!(["Ben Nevis"]));
}
