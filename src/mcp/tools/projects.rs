//! Project tools.

use crate::taiga::{PROJECT_FIELDS, Record, TaigaApi, TaigaResult, project_all};

/// List the projects visible to the service account, trimmed to the
/// project allow-list.
pub async fn list_projects<A: TaigaApi + ?Sized>(api: &A) -> TaigaResult<Vec<Record>> {
    let projects = api.list_projects().await?;
    Ok(project_all(&projects, PROJECT_FIELDS))
}
