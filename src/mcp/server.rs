//! MCP server implementation
//!
//! Registers the Taiga tools and delegates their logic to `super::tools`.
//! Every Taiga tool builds its own `TaigaClient` from the shared config and
//! drops it before returning, so no connection pool outlives an invocation.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::debug;

use crate::taiga::{TaigaClient, TaigaConfig};

use super::tools::{
    self, AddUserStoryParams, CreateStoryParams, EchoParams, ListEpicsParams, json_result,
    map_taiga_error,
};

/// Main MCP server coordinator
///
/// Cheap to clone: the config is shared and the router is rebuilt per
/// session by the transports.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<TaigaConfig>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl McpServer {
    /// Create a new MCP server with the given Taiga configuration
    pub fn new(config: impl Into<Arc<TaigaConfig>>) -> Self {
        Self {
            config: config.into(),
            tool_router: Self::tool_router(),
        }
    }

    /// Acquire a client for one invocation.
    fn client(&self) -> Result<TaigaClient, McpError> {
        TaigaClient::new(&self.config).map_err(map_taiga_error)
    }

    #[tool(description = "Echo a message back to the caller.")]
    pub async fn echo(&self, params: Parameters<EchoParams>) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(params.0.message)]))
    }

    #[tool(
        name = "taiga.projects.list",
        description = "Return the available Taiga projects visible to the service account."
    )]
    pub async fn list_projects(&self) -> Result<CallToolResult, McpError> {
        debug!("taiga.projects.list");
        let client = self.client()?;
        let projects = tools::list_projects(&client)
            .await
            .map_err(map_taiga_error)?;

        json_result(&projects)
    }

    #[tool(name = "taiga.epics.list", description = "List epics for a Taiga project.")]
    pub async fn list_epics(
        &self,
        params: Parameters<ListEpicsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(project_id = params.0.project_id, "taiga.epics.list");
        let client = self.client()?;
        let epics = tools::list_epics(&client, &params.0)
            .await
            .map_err(map_taiga_error)?;

        json_result(&epics)
    }

    #[tool(
        name = "taiga.stories.create",
        description = "Create a user story in Taiga and return the created record. Status may be a numeric ID or a status name/slug of the project."
    )]
    pub async fn create_story(
        &self,
        params: Parameters<CreateStoryParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(project_id = params.0.project_id, "taiga.stories.create");
        let client = self.client()?;
        let story = tools::create_story(&client, &params.0)
            .await
            .map_err(map_taiga_error)?;

        json_result(&story)
    }

    #[tool(
        name = "taiga.epics.add_user_story",
        description = "Attach a user story to an epic."
    )]
    pub async fn add_user_story(
        &self,
        params: Parameters<AddUserStoryParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            epic_id = params.0.epic_id,
            user_story_id = params.0.user_story_id,
            "taiga.epics.add_user_story"
        );
        let client = self.client()?;
        let linked = tools::add_user_story(&client, &params.0)
            .await
            .map_err(map_taiga_error)?;

        json_result(&linked)
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(
            "Taiga MCP Server - List projects and epics, create user stories, and attach stories to epics"
                .to_string(),
        );
        info
    }
}
