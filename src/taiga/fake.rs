//! In-process stand-in for the Taiga API used by tests.
//!
//! Serves canned responses keyed by method and path and records every
//! request it receives.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tokio::net::TcpListener;

use super::config::TaigaConfig;

/// One request as seen by the fake server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct FakeState {
    routes: Mutex<HashMap<(Method, String), (StatusCode, String)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct FakeTaiga {
    base_url: String,
    state: Arc<FakeState>,
}

impl FakeTaiga {
    /// Bind on an ephemeral local port and start serving.
    pub async fn start() -> Self {
        let state = Arc::new(FakeState::default());
        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local_addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}/api/v1"),
            state,
        }
    }

    /// Config pointing at this server with test credentials.
    pub fn config(&self) -> TaigaConfig {
        TaigaConfig::new(self.base_url.clone(), "taiga-bot", "s3cret")
    }

    /// Answer `method path` with a JSON body.
    pub fn respond_json(&self, method: Method, path: &str, status: StatusCode, body: Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    /// Answer `method path` with a raw body.
    pub fn respond_raw(&self, method: Method, path: &str, status: StatusCode, body: &str) {
        self.state
            .routes
            .lock()
            .unwrap()
            .insert((method, format!("/api/v1{path}")), (status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Requests whose path (without the `/api/v1` prefix) equals `path`.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        let full = format!("/api/v1{path}");
        self.requests()
            .into_iter()
            .filter(|r| r.path == full)
            .collect()
    }
}

async fn handle(
    State(state): State<Arc<FakeState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    });

    let route = state.routes.lock().unwrap().get(&(method, path)).cloned();
    match route {
        Some((status, body)) => (status, body).into_response(),
        None => (StatusCode::NOT_FOUND, r#"{"detail":"Not found."}"#).into_response(),
    }
}
