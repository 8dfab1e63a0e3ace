//! Resolution of user story status arguments to numeric ids.

use tracing::debug;

use super::client::TaigaApi;
use super::error::{TaigaError, TaigaResult};
use super::models::StatusRef;

/// Map a status argument to a status id for `project_id`.
///
/// Ids pass through without a remote call. Names are matched against the
/// project's status list on every call: the first entry whose name or slug
/// equals the value wins, in the order Taiga returns them.
pub async fn resolve_status_id<A: TaigaApi + ?Sized>(
    api: &A,
    project_id: i64,
    status: Option<&StatusRef>,
) -> TaigaResult<Option<i64>> {
    let name = match status {
        None => return Ok(None),
        Some(StatusRef::Id(id)) => return Ok(Some(*id)),
        Some(StatusRef::Name(name)) => name,
    };

    let statuses = api.list_user_story_statuses(project_id).await?;
    let found = statuses.iter().find(|entry| entry.matches(name));

    match found {
        Some(entry) => {
            debug!(project_id, status = %name, id = entry.id, "Resolved status");
            Ok(Some(entry.id))
        }
        None => Err(TaigaError::StatusNotFound {
            status: name.clone(),
            project_id,
        }),
    }
}
