use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Failed to open an MCP session at {endpoint}: {message}")]
    #[diagnostic(
        code(taiga_mcp::cli::connection_failed),
        help(
            "Is the server running? Try: taiga-mcp --port 8000\nOr pass the endpoint explicitly / set MCP_URL to point to the correct server."
        )
    )]
    ConnectionFailed { endpoint: String, message: String },

    #[error("MCP request failed: {message}")]
    #[diagnostic(code(taiga_mcp::cli::request_failed))]
    Request { message: String },

    #[error("No answer from the MCP server within {seconds}s")]
    #[diagnostic(
        code(taiga_mcp::cli::timeout),
        help("Raise --timeout if the server is slow to respond.")
    )]
    Timeout { seconds: u64 },

    #[error("Invalid response from MCP server: {message}")]
    #[diagnostic(code(taiga_mcp::cli::invalid_response))]
    InvalidResponse { message: String },
}

impl From<rmcp::service::ServiceError> for CliError {
    fn from(e: rmcp::service::ServiceError) -> Self {
        CliError::Request {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
