//! API route configuration.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio_util::sync::CancellationToken;

use super::handlers;
use crate::mcp::{McpServer, create_mcp_service, create_sse_router};
use crate::taiga::TaigaConfig;

/// Create the router: status endpoints plus both MCP transports.
pub fn create_router(config: Arc<TaigaConfig>, ct: CancellationToken) -> Router {
    let server = McpServer::new(config);

    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .nest_service("/mcp", create_mcp_service(server.clone(), ct.clone()))
        .nest("/sse", create_sse_router(server, "/sse", ct))
}
