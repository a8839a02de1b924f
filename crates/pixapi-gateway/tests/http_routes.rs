//! HTTP surface tests, driven in-process via `tower::ServiceExt`.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pixapi_gateway::app_state::AppState;
use pixapi_gateway::config::GatewayConfig;
use pixapi_gateway::router;

fn test_state() -> AppState {
    AppState::new(GatewayConfig::default())
}

fn app(state: &AppState) -> Router {
    router::build_app_router(state.clone())
}

async fn get(router: &Router, path: &str) -> (StatusCode, HeaderMap, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn index_returns_running_message() {
    let state = test_state();
    let (status, headers, body) = get(&app(&state), "/").await;

    assert_eq!(status, StatusCode::OK);
    let content_type = headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("application/json"));

    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(v["message"].as_str().unwrap().contains("API Pix Rodando"));
}

#[tokio::test]
async fn hello_returns_greeting() {
    let state = test_state();
    let (status, _, body) = get(&app(&state), "/hello").await;

    assert_eq!(status, StatusCode::OK);
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(v["message"].as_str().unwrap().contains("endpoint /hello"));
}

#[tokio::test]
async fn metrics_exposition_shape() {
    let state = test_state();
    let (status, headers, body) = get(&app(&state), "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-type").unwrap(),
        "text/plain; charset=utf-8"
    );

    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "# HELP request_count Número total de requisições");
    assert_eq!(lines[1], "# TYPE request_count counter");
    // The scrape itself is counted before the handler renders.
    assert_eq!(lines[2], "request_count 1");
}

#[tokio::test]
async fn unknown_path_is_404_and_keeps_serving() {
    let state = test_state();
    let router = app(&state);

    let (status, _, body) = get(&router, "/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["error"], "not found");

    let (status, _, _) = get(&router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.request_count().get(), 2);
}

#[tokio::test]
async fn every_request_is_counted_including_misses() {
    let state = test_state();
    let router = app(&state);

    for path in ["/", "/hello", "/does-not-exist", "/hello", "/"] {
        let _ = get(&router, path).await;
    }
    assert_eq!(state.request_count().get(), 5);

    // The scrape is request number six.
    let (_, _, body) = get(&router, "/metrics").await;
    assert!(body.contains("request_count 6"));
}

#[tokio::test]
async fn metrics_router_shares_the_counter() {
    let state = test_state();
    let app_router = app(&state);
    let metrics_router = router::build_metrics_router(state.clone());

    let _ = get(&app_router, "/").await;
    let _ = get(&app_router, "/hello").await;

    let (status, _, body) = get(&metrics_router, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("request_count 3"));

    let (status, _, _) = get(&metrics_router, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(state.request_count().get(), 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_count_exactly() {
    let state = test_state();
    let router = app(&state);

    let mut handles = Vec::new();
    for i in 0..64 {
        let router = router.clone();
        let path = if i % 2 == 0 { "/" } else { "/hello" };
        handles.push(tokio::spawn(async move {
            let response = router
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    assert_eq!(state.request_count().get(), 64);
}
