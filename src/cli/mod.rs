//! `taiga-mcp-probe`: exercise a running server over Streamable HTTP.

pub mod error;


use std::future::Future;
use std::time::Duration;

use clap::Parser;
use rmcp::{
    RoleClient, ServiceExt, service::RunningService, transport::StreamableHttpClientTransport,
};
use serde_json::{Value, json};
use tracing::debug;

use error::{CliError, CliResult};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/mcp";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug)]
#[command(name = "taiga-mcp-probe")]
#[command(author, version, about = "Call a Taiga MCP server over Streamable HTTP", long_about = None)]
pub struct Cli {
    /// Streamable HTTP endpoint of the server
    #[arg(env = "MCP_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Message sent to the echo tool
    #[arg(short, long, default_value = "test")]
    pub message: String,

    /// List the server's tools instead of calling echo
    #[arg(long)]
    pub list_tools: bool,

    /// Seconds to wait for the handshake and for the call
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    let output = execute(&cli).await?;
    println!("{}", output);
    Ok(())
}

/// Open a session, run the requested call and close the session again.
pub async fn execute(cli: &Cli) -> CliResult<String> {
    crate::tls::install_crypto_provider();
    let limit = Duration::from_secs(cli.timeout);

    let transport = StreamableHttpClientTransport::from_uri(cli.endpoint.as_str());
    let client = within(limit, async {
        ().serve(transport)
            .await
            .map_err(|e| CliError::ConnectionFailed {
                endpoint: cli.endpoint.clone(),
                message: e.to_string(),
            })
    })
    .await?;

    let result = within(limit, call(&client, cli)).await;
    // The call's error wins over a failed close.
    if let Err(e) = client.cancel().await {
        debug!(error = %e, "Failed to close MCP session");
    }

    Ok(serde_json::to_string_pretty(&result?)?)
}

async fn call(client: &RunningService<RoleClient, ()>, cli: &Cli) -> CliResult<Value> {
    if cli.list_tools {
        let tools = client.list_tools(None).await?;
        return Ok(serde_json::to_value(tools)?);
    }

    let params = serde_json::from_value(json!({
        "name": "echo",
        "arguments": {"message": cli.message},
    }))?;
    let result = client.call_tool(params).await?;
    Ok(serde_json::to_value(result)?)
}

async fn within<T>(limit: Duration, fut: impl Future<Output = CliResult<T>>) -> CliResult<T> {
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| CliError::Timeout {
            seconds: limit.as_secs(),
        })?
}
