//! MCP Streamable HTTP service creation
//!
//! This module provides the function that creates the Streamable HTTP
//! service to be nested into an Axum router.

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use super::server::McpServer;

/// Create MCP Streamable HTTP service
///
/// # Arguments
/// * `server` - Server prototype, cloned for every new session
/// * `cancellation_token` - Token for graceful shutdown
///
/// # Example
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// use taiga_mcp::mcp::{McpServer, create_mcp_service};
/// use taiga_mcp::taiga::TaigaConfig;
///
/// let server = McpServer::new(TaigaConfig::default());
/// let app: Router = Router::new()
///     .nest_service("/mcp", create_mcp_service(server, CancellationToken::new()));
/// ```
pub fn create_mcp_service(
    server: McpServer,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer, LocalSessionManager> {
    // Note: Returns io::Error to match rmcp's expected signature
    let service_factory = move || -> Result<McpServer, std::io::Error> { Ok(server.clone()) };

    let mut config = StreamableHttpServerConfig::default();
    config.stateful_mode = true;
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
