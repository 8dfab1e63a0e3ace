//! HTTP server hosting the MCP transports.

mod handlers;
mod routes;


use std::net::IpAddr;
use std::sync::Arc;

use clap::Args;
use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::taiga::TaigaConfig;

pub use routes::create_router;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(taiga_mcp::api::bind),
        help("Is another process listening on this port? Try --port or the PORT environment variable.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(taiga_mcp::api::serve))]
    Serve(#[source] std::io::Error),
}

/// Command-line and environment settings of the server
#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Taiga API root, for example https://api.taiga.io/api/v1
    #[arg(long, env = "TAIGA_BASE_URL")]
    pub taiga_base_url: Option<String>,

    /// Taiga username used for basic auth
    #[arg(long, env = "TAIGA_USERNAME")]
    pub taiga_username: Option<String>,

    /// Taiga password used for basic auth
    #[arg(long, env = "TAIGA_PASSWORD", hide_env_values = true)]
    pub taiga_password: Option<String>,
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Taiga connection settings shared by every tool invocation
    pub taiga: TaigaConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            taiga: TaigaConfig::default(),
        }
    }
}

impl From<ServerArgs> for Config {
    fn from(args: ServerArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            taiga: TaigaConfig {
                base_url: args.taiga_base_url,
                username: args.taiga_username,
                password: args.taiga_password,
            },
        }
    }
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taiga_mcp=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the server until Ctrl-C
pub async fn run(config: Config) -> Result<(), ApiError> {
    init_tracing();

    let ct = CancellationToken::new();
    let app = create_router(Arc::new(config.taiga), ct.clone()).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("Taiga MCP listening on http://{}", addr);
    info!("Streamable HTTP at http://{}/mcp, SSE at http://{}/sse", addr, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(ct))
        .await
        .map_err(ApiError::Serve)?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal(ct: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        // Without a signal handler there is no way to stop gracefully.
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
    ct.cancel();
}
