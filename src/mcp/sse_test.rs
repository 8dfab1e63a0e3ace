//! Tests for the HTTP+SSE transport router

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use crate::mcp::{McpServer, create_sse_router};
use crate::taiga::TaigaConfig;

fn app() -> Router {
    let server = McpServer::new(TaigaConfig::default());
    Router::new().nest("/sse", create_sse_router(server, "/sse", CancellationToken::new()))
}

#[tokio::test]
async fn test_connect_announces_message_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/sse").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/event-stream"));

    let mut body = response.into_body();
    let frame = body.frame().await.unwrap().unwrap();
    let chunk = String::from_utf8(frame.into_data().unwrap().to_vec()).unwrap();

    assert!(chunk.contains("event: endpoint"), "got {chunk}");
    assert!(
        chunk.contains("data: /sse/messages?session_id="),
        "got {chunk}"
    );
}

#[tokio::test]
async fn test_post_to_unknown_session_is_not_found() {
    let message = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});

    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/sse/messages?session_id=missing")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(message.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_to_open_session_is_accepted() {
    let app = app();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/sse").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let mut body = response.into_body();
    let frame = body.frame().await.unwrap().unwrap();
    let chunk = String::from_utf8(frame.into_data().unwrap().to_vec()).unwrap();
    let endpoint = chunk
        .lines()
        .find_map(|line| line.strip_prefix("data: "))
        .unwrap()
        .to_string();

    let initialize = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {"name": "sse-test", "version": "0"}
        }
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(endpoint)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(initialize.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
}
