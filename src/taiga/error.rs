//! Taiga client error types.
//!
//! Uses miette for diagnostic output and thiserror for derive macros.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by the Taiga client layer and status resolution.
#[derive(Error, Diagnostic, Debug)]
pub enum TaigaError {
    #[error("Configuration error: {name} must be configured")]
    #[diagnostic(
        code(taiga_mcp::taiga::configuration),
        help("Pass the matching --taiga-* flag or set the environment variable.")
    )]
    Configuration { name: String },

    #[error("Taiga API request failed{}: {detail}", status_suffix(.status))]
    #[diagnostic(code(taiga_mcp::taiga::remote))]
    Remote { status: Option<u16>, detail: String },

    #[error("Invalid response from Taiga API: {message}")]
    #[diagnostic(code(taiga_mcp::taiga::invalid_response))]
    InvalidResponse { message: String },

    #[error("Status '{status}' not found for project {project_id}")]
    #[diagnostic(code(taiga_mcp::taiga::status_not_found))]
    StatusNotFound { status: String, project_id: i64 },
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" with status {code}"),
        None => String::new(),
    }
}

impl From<reqwest::Error> for TaigaError {
    fn from(e: reqwest::Error) -> Self {
        TaigaError::Remote {
            status: e.status().map(|s| s.as_u16()),
            detail: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for TaigaError {
    fn from(e: serde_json::Error) -> Self {
        TaigaError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

/// Result type for Taiga operations.
pub type TaigaResult<T> = Result<T, TaigaError>;
