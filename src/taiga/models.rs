//! Taiga record types and allow-list projection.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw JSON object as returned by the Taiga API.
pub type Record = Map<String, Value>;

pub const PROJECT_FIELDS: &[&str] = &["id", "name", "slug", "description", "is_private"];

pub const EPIC_FIELDS: &[&str] = &[
    "id",
    "ref",
    "subject",
    "created_date",
    "modified_date",
    "status",
];

pub const USER_STORY_FIELDS: &[&str] = &[
    "id",
    "ref",
    "subject",
    "project",
    "status",
    "description",
    "assigned_to",
    "tags",
    "created_date",
    "modified_date",
];

/// Per-project user story status entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStoryStatus {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl UserStoryStatus {
    /// True when `value` equals either the name or the slug.
    pub fn matches(&self, value: &str) -> bool {
        self.name.as_deref() == Some(value) || self.slug.as_deref() == Some(value)
    }
}

/// A status given either as its numeric id or as a name/slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum StatusRef {
    Id(i64),
    Name(String),
}

impl From<i64> for StatusRef {
    fn from(id: i64) -> Self {
        StatusRef::Id(id)
    }
}

impl From<&str> for StatusRef {
    fn from(name: &str) -> Self {
        StatusRef::Name(name.to_string())
    }
}

/// Keep only the allow-listed keys that are present in `record`.
///
/// Missing keys are dropped, never filled with null.
pub fn project(record: &Record, keys: &[&str]) -> Record {
    keys.iter()
        .filter_map(|key| record.get(*key).map(|value| (key.to_string(), value.clone())))
        .collect()
}

/// Project every record of a list through the same allow-list.
pub fn project_all(records: &[Record], keys: &[&str]) -> Vec<Record> {
    records.iter().map(|record| project(record, keys)).collect()
}
