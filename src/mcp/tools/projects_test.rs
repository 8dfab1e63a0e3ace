//! Tests for project tools

use serde_json::json;

use crate::mcp::tools::list_projects;
use crate::taiga::{MockTaigaApi, Record};

fn raw_projects() -> Vec<Record> {
    vec![
        json!({
            "id": 1,
            "name": "Alpha",
            "slug": "alpha",
            "description": "First project",
            "is_private": true,
            "owner": {"id": 3, "username": "admin"},
            "members": [3, 4]
        }),
        json!({"id": 2, "name": "Beta", "slug": "beta"}),
    ]
    .into_iter()
    .map(|v| v.as_object().cloned().unwrap())
    .collect()
}

#[tokio::test]
async fn test_list_projects_projects_allow_list() {
    let mut api = MockTaigaApi::new();
    api.expect_list_projects()
        .times(1)
        .returning(|| Ok(raw_projects()));

    let projects = list_projects(&api).await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(
        serde_json::Value::Object(projects[0].clone()),
        json!({
            "id": 1,
            "name": "Alpha",
            "slug": "alpha",
            "description": "First project",
            "is_private": true
        })
    );
    // Missing keys stay missing.
    assert!(!projects[1].contains_key("description"));
    assert!(!projects[1].contains_key("is_private"));
}

#[tokio::test]
async fn test_list_projects_is_repeatable() {
    let mut api = MockTaigaApi::new();
    api.expect_list_projects()
        .times(2)
        .returning(|| Ok(raw_projects()));

    let first = list_projects(&api).await.unwrap();
    let second = list_projects(&api).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_list_projects_empty() {
    let mut api = MockTaigaApi::new();
    api.expect_list_projects().returning(|| Ok(vec![]));

    let projects = list_projects(&api).await.unwrap();

    assert!(projects.is_empty());
}
