//! System status handlers.

use tracing::instrument;

/// Banner served at the root
#[instrument]
pub async fn root() -> &'static str {
    "Taiga MCP up"
}

/// Liveness probe
#[instrument]
pub async fn healthz() -> &'static str {
    "ok"
}
