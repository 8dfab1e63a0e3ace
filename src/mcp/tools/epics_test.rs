//! Tests for epic tools

use mockall::predicate::*;
use serde_json::json;

use crate::mcp::tools::{AddUserStoryParams, ListEpicsParams, add_user_story, list_epics};
use crate::taiga::{MockTaigaApi, TaigaError};

#[tokio::test]
async fn test_list_epics_projects_allow_list() {
    let mut api = MockTaigaApi::new();
    api.expect_list_epics()
        .with(eq(42))
        .times(1)
        .returning(|_| {
            Ok(vec![
                json!({
                    "id": 5,
                    "ref": 12,
                    "subject": "Onboarding",
                    "created_date": "2024-03-01T10:00:00Z",
                    "modified_date": "2024-03-02T10:00:00Z",
                    "status": 1,
                    "color": "#abcdef",
                    "user_stories_counts": {"total": 3}
                })
                .as_object()
                .cloned()
                .unwrap(),
            ])
        });

    let epics = list_epics(&api, &ListEpicsParams { project_id: 42 })
        .await
        .unwrap();

    assert_eq!(epics.len(), 1);
    assert_eq!(epics[0].len(), 6);
    assert!(!epics[0].contains_key("color"));
    assert_eq!(epics[0]["subject"], "Onboarding");
}

#[tokio::test]
async fn test_list_epics_propagates_remote_error() {
    let mut api = MockTaigaApi::new();
    api.expect_list_epics().with(eq(999)).returning(|_| {
        Err(TaigaError::Remote {
            status: Some(404),
            detail: "Not found.".to_string(),
        })
    });

    let err = list_epics(&api, &ListEpicsParams { project_id: 999 })
        .await
        .unwrap_err();

    assert!(matches!(err, TaigaError::Remote { status: Some(404), .. }));
}

#[tokio::test]
async fn test_add_user_story_returns_raw_record() {
    let mut api = MockTaigaApi::new();
    api.expect_link_epic_user_story()
        .with(eq(5), eq(77))
        .times(1)
        .returning(|_, _| {
            Ok(Some(
                json!({"epic": 5, "user_story": 77, "order": 1700000000})
                    .as_object()
                    .cloned()
                    .unwrap(),
            ))
        });

    let params = AddUserStoryParams {
        epic_id: 5,
        user_story_id: 77,
    };
    let linked = add_user_story(&api, &params).await.unwrap().unwrap();

    // Not projected: every key Taiga sent is kept.
    assert_eq!(linked.len(), 3);
    assert_eq!(linked["order"], 1700000000);
}

#[tokio::test]
async fn test_add_user_story_without_content() {
    let mut api = MockTaigaApi::new();
    api.expect_link_epic_user_story()
        .returning(|_, _| Ok(None));

    let params = AddUserStoryParams {
        epic_id: 5,
        user_story_id: 77,
    };
    let linked = add_user_story(&api, &params).await.unwrap();

    assert!(linked.is_none());
}
