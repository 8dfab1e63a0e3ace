//! MCP tool implementations
//!
//! Each module owns the parameter structs and the Taiga logic for one
//! entity. The `#[tool]` wrappers live on `McpServer`, which acquires a
//! fresh `TaigaClient` per invocation and hands it to these functions.

mod epics;
mod projects;
mod stories;
mod system;

#[cfg(test)]
mod epics_test;
#[cfg(test)]
mod projects_test;

pub use epics::{AddUserStoryParams, ListEpicsParams, add_user_story, list_epics};
pub use projects::list_projects;
pub use stories::{CreateStoryParams, build_story_payload, create_story};
pub use system::EchoParams;

use rmcp::{ErrorData as McpError, model::*};
use serde::Serialize;
use serde_json::json;

use crate::taiga::TaigaError;

/// Map a Taiga error onto the MCP error reported for the invocation.
pub(crate) fn map_taiga_error(err: TaigaError) -> McpError {
    match &err {
        TaigaError::Configuration { name } => McpError::internal_error(
            "configuration_error",
            Some(json!({
                "error": err.to_string(),
                "setting": name,
            })),
        ),
        TaigaError::Remote { status, .. } => McpError::internal_error(
            "taiga_api_error",
            Some(json!({
                "error": err.to_string(),
                "status": status,
            })),
        ),
        TaigaError::InvalidResponse { .. } => McpError::internal_error(
            "invalid_response",
            Some(json!({
                "error": err.to_string(),
            })),
        ),
        TaigaError::StatusNotFound { status, project_id } => McpError::invalid_params(
            "status_not_found",
            Some(json!({
                "error": err.to_string(),
                "status": status,
                "project_id": project_id,
            })),
        ),
    }
}

/// Wrap a value as a single pretty-printed JSON text content.
pub(crate) fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(
            "serialization_error",
            Some(json!({
                "error": e.to_string(),
            })),
        )
    })?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
