use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use my_agent_server::server::{ServerConfig, create_app};
use tower::ServiceExt;

fn test_config() -> ServerConfig {
    ServerConfig::new("my_agent")
}

#[tokio::test]
async fn health_check_returns_ok() {
    let app = create_app(test_config());

    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn runtime_config_reports_agent_dir() {
    let app = create_app(test_config());

    let response = app
        .oneshot(Request::builder().uri("/api/runtime-config").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["agentDir"], "my_agent");
    assert_eq!(json["backendUrl"], "/api");
}

#[tokio::test]
async fn runtime_config_uses_configured_backend_url() {
    let config = test_config().with_backend_url("http://example.com/api");
    let app = create_app(config);

    let response = app
        .oneshot(Request::builder().uri("/api/runtime-config").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["backendUrl"], "http://example.com/api");
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let app = create_app(test_config());

    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
    assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = create_app(test_config());

    let response = app
        .oneshot(Request::builder().uri("/api/sessions").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
