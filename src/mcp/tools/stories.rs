//! User story tools.

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::taiga::{
    Record, StatusRef, TaigaApi, TaigaResult, USER_STORY_FIELDS, project, resolve_status_id,
};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateStoryParams {
    #[schemars(description = "Taiga project ID the story belongs to")]
    pub project_id: i64,
    #[schemars(description = "Story title")]
    pub subject: String,
    #[schemars(description = "Story description (optional)")]
    pub description: Option<String>,
    #[schemars(
        description = "Status as a numeric ID, or a status name or slug of the project such as 'New' or 'in-progress' (optional)"
    )]
    pub status: Option<StatusRef>,
    #[schemars(description = "Tags to apply (optional)")]
    pub tags: Option<Vec<String>>,
    #[schemars(description = "User ID to assign the story to (optional)")]
    pub assigned_to: Option<i64>,
}

/// Build the `POST /userstories` payload.
///
/// `project` and `subject` are always present. Description and tags are
/// only sent when non-empty, status and assignee only when set.
pub fn build_story_payload(params: &CreateStoryParams, status_id: Option<i64>) -> Record {
    let mut payload = Record::new();
    payload.insert("project".to_string(), Value::from(params.project_id));
    payload.insert("subject".to_string(), Value::from(params.subject.clone()));

    if let Some(description) = params.description.as_deref().filter(|d| !d.is_empty()) {
        payload.insert("description".to_string(), Value::from(description));
    }
    if let Some(status_id) = status_id {
        payload.insert("status".to_string(), Value::from(status_id));
    }
    if let Some(tags) = params.tags.as_ref().filter(|t| !t.is_empty()) {
        payload.insert("tags".to_string(), Value::from(tags.clone()));
    }
    if let Some(assigned_to) = params.assigned_to {
        payload.insert("assigned_to".to_string(), Value::from(assigned_to));
    }

    payload
}

/// Create a user story and return it trimmed to the story allow-list.
///
/// A status given by name or slug is resolved against the project first.
pub async fn create_story<A: TaigaApi + ?Sized>(
    api: &A,
    params: &CreateStoryParams,
) -> TaigaResult<Record> {
    let status_id = resolve_status_id(api, params.project_id, params.status.as_ref()).await?;
    let payload = build_story_payload(params, status_id);

    let story = api.create_user_story(payload).await?;
    Ok(project(&story, USER_STORY_FIELDS))
}
