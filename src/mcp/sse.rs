//! MCP over the legacy HTTP+SSE transport
//!
//! A client opens `GET {mount}` and keeps the event stream open. The first
//! event (`endpoint`) tells it where to POST its JSON-RPC messages; server
//! messages arrive as `message` events on the same stream. Each stream is
//! one MCP session served by its own `McpServer` clone.

use std::convert::Infallible;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, KeepAliveStream, Sse},
    routing::{get, post},
};
use dashmap::DashMap;
use futures_util::{Stream, StreamExt, stream};
use rmcp::{
    ServiceExt,
    model::{ClientJsonRpcMessage, ServerJsonRpcMessage},
};
use serde::Deserialize;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::{CancellationToken, DropGuard, PollSender};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::server::McpServer;

const CHANNEL_CAPACITY: usize = 64;

type SessionMap = DashMap<String, mpsc::Sender<ClientJsonRpcMessage>>;

#[derive(Clone)]
struct SseState {
    server: McpServer,
    sessions: Arc<SessionMap>,
    message_path: String,
    cancellation_token: CancellationToken,
}

#[derive(Debug, Deserialize)]
struct MessageQuery {
    session_id: String,
}

/// Create the SSE transport router.
///
/// Nest it at `mount` (for example `/sse`): the stream is served at the
/// mount root and messages are accepted at `{mount}/messages`.
pub fn create_sse_router(
    server: McpServer,
    mount: &str,
    cancellation_token: CancellationToken,
) -> Router {
    let state = SseState {
        server,
        sessions: Arc::new(DashMap::new()),
        message_path: format!("{}/messages", mount.trim_end_matches('/')),
        cancellation_token,
    };

    Router::new()
        .route("/", get(connect))
        .route("/messages", post(post_message))
        .with_state(state)
}

/// Event stream that cancels its session when the client goes away.
struct SessionStream {
    inner: Pin<Box<dyn Stream<Item = Result<Event, Infallible>> + Send>>,
    _guard: DropGuard,
}

impl Stream for SessionStream {
    type Item = Result<Event, Infallible>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

#[instrument(skip_all)]
async fn connect(State(state): State<SseState>) -> Sse<KeepAliveStream<SessionStream>> {
    let session_id = Uuid::new_v4().simple().to_string();
    let (client_tx, client_rx) = mpsc::channel::<ClientJsonRpcMessage>(CHANNEL_CAPACITY);
    let (server_tx, server_rx) = mpsc::channel::<ServerJsonRpcMessage>(CHANNEL_CAPACITY);
    state.sessions.insert(session_id.clone(), client_tx);

    let session_token = state.cancellation_token.child_token();
    let transport = (PollSender::new(server_tx), ReceiverStream::new(client_rx));
    let server = state.server.clone();
    let sessions = Arc::clone(&state.sessions);
    let task_session_id = session_id.clone();
    let task_token = session_token.clone();

    tokio::spawn(async move {
        match server.serve_with_ct(transport, task_token).await {
            Ok(running) => {
                if let Err(e) = running.waiting().await {
                    warn!(session_id = %task_session_id, error = %e, "SSE session task failed");
                }
            }
            Err(e) => {
                warn!(session_id = %task_session_id, error = %e, "SSE session failed to initialize")
            }
        }
        sessions.remove(&task_session_id);
        debug!(session_id = %task_session_id, "SSE session closed");
    });

    info!(session_id = %session_id, "SSE session opened");
    let endpoint = format!("{}?session_id={}", state.message_path, session_id);
    let messages = ReceiverStream::new(server_rx).map(|message| {
        let event = match serde_json::to_string(&message) {
            Ok(data) => Event::default().event("message").data(data),
            Err(e) => {
                warn!(error = %e, "Failed to serialize server message");
                Event::default().comment("serialization error")
            }
        };
        Ok::<_, Infallible>(event)
    });
    let endpoint_event = Event::default().event("endpoint").data(endpoint);
    let events = stream::once(async move { Ok::<_, Infallible>(endpoint_event) }).chain(messages);

    Sse::new(SessionStream {
        inner: Box::pin(events),
        _guard: session_token.drop_guard(),
    })
    .keep_alive(KeepAlive::default())
}

#[instrument(skip_all)]
async fn post_message(
    State(state): State<SseState>,
    Query(query): Query<MessageQuery>,
    Json(message): Json<ClientJsonRpcMessage>,
) -> StatusCode {
    let Some(sender) = state
        .sessions
        .get(&query.session_id)
        .map(|entry| entry.value().clone())
    else {
        debug!(session_id = %query.session_id, "Message for unknown SSE session");
        return StatusCode::NOT_FOUND;
    };

    if sender.send(message).await.is_err() {
        return StatusCode::GONE;
    }
    StatusCode::ACCEPTED
}
