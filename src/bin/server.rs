//! Taiga MCP server binary.

use clap::Parser;
use miette::Diagnostic;
use taiga_mcp::api::{self, ApiError, ServerArgs};
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("API server error: {0}")]
    #[diagnostic(code(taiga_mcp::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "taiga-mcp")]
#[command(author, version, about = "Taiga MCP server", long_about = None)]
struct Cli {
    #[command(flatten)]
    server: ServerArgs,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    taiga_mcp::tls::install_crypto_provider();

    api::run(cli.server.into()).await?;

    Ok(())
}
