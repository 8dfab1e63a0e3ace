//! Taiga REST API client layer.
//!
//! - **client**: scoped HTTP handle and the `TaigaApi` trait
//! - **config**: credentials and base URL
//! - **models**: raw records, status entries and allow-list projection
//! - **status**: status name/slug resolution

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod status;

#[cfg(test)]
pub(crate) mod fake;


#[cfg(test)]
pub use client::MockTaigaApi;
pub use client::{REQUEST_TIMEOUT, TaigaApi, TaigaClient};
pub use config::TaigaConfig;
pub use error::{TaigaError, TaigaResult};
pub use models::{
    EPIC_FIELDS, PROJECT_FIELDS, Record, StatusRef, USER_STORY_FIELDS, UserStoryStatus, project,
    project_all,
};
pub use status::resolve_status_id;
