//! Epic tools.

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};

use crate::taiga::{EPIC_FIELDS, Record, TaigaApi, TaigaResult, project_all};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListEpicsParams {
    #[schemars(description = "Taiga project ID. Use taiga.projects.list to find it.")]
    pub project_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddUserStoryParams {
    #[schemars(description = "Epic ID to attach the user story to")]
    pub epic_id: i64,
    #[schemars(description = "User story ID to attach")]
    pub user_story_id: i64,
}

/// List a project's epics, trimmed to the epic allow-list.
pub async fn list_epics<A: TaigaApi + ?Sized>(
    api: &A,
    params: &ListEpicsParams,
) -> TaigaResult<Vec<Record>> {
    let epics = api.list_epics(params.project_id).await?;
    Ok(project_all(&epics, EPIC_FIELDS))
}

/// Attach a user story to an epic.
///
/// The link record is returned as Taiga sent it, without projection.
pub async fn add_user_story<A: TaigaApi + ?Sized>(
    api: &A,
    params: &AddUserStoryParams,
) -> TaigaResult<Option<Record>> {
    api.link_epic_user_story(params.epic_id, params.user_story_id)
        .await
}
