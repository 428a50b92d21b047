use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use bikelinks_storage::DbState;
use tower::ServiceExt;

use crate::api::create_router;
use crate::server::build_app;

async fn setup_db() -> DbState {
    DbState::init_in_memory().await.unwrap()
}

#[tokio::test]
async fn test_index_serves_client() {
    let app = create_router(setup_db().await);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("<title>Bike Shop Links</title>"));
    assert!(html.contains("/api/links"));
}

#[tokio::test]
async fn test_health_route() {
    let app = create_router(setup_db().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_api_routes_are_mounted() {
    let app = create_router(setup_db().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/brands")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_router(setup_db().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nothing-here")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let app = build_app(setup_db().await, Some("https://shop.example.com")).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/links/1")
                .header(header::ORIGIN, "https://shop.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://shop.example.com"
    );
    let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap();
    assert!(methods.contains("PATCH"));
}

#[tokio::test]
async fn test_no_cors_headers_without_origin() {
    let app = build_app(setup_db().await, None).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/categories")
                .header(header::ORIGIN, "https://elsewhere.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_invalid_cors_origin_is_rejected() {
    let result = build_app(setup_db().await, Some("bad\norigin"));
    assert!(result.is_err());
}
