//! HTTP client for the Taiga REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, warn};

#[cfg(test)]
use mockall::automock;

use super::config::TaigaConfig;
use super::error::{TaigaError, TaigaResult};
use super::models::{Record, UserStoryStatus};

/// Timeout applied to every outbound request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote Taiga operations. Can be mocked in tests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TaigaApi: Send + Sync {
    /// `GET /projects`
    async fn list_projects(&self) -> TaigaResult<Vec<Record>>;

    /// `GET /epics?project={project_id}`
    async fn list_epics(&self, project_id: i64) -> TaigaResult<Vec<Record>>;

    /// `GET /userstory-statuses?project={project_id}`
    async fn list_user_story_statuses(
        &self,
        project_id: i64,
    ) -> TaigaResult<Vec<UserStoryStatus>>;

    /// `POST /userstories`
    async fn create_user_story(&self, payload: Record) -> TaigaResult<Record>;

    /// `POST /epics/{epic_id}/related_userstories`
    ///
    /// Taiga may answer with no content, in which case the result is `None`.
    async fn link_epic_user_story(
        &self,
        epic_id: i64,
        user_story_id: i64,
    ) -> TaigaResult<Option<Record>>;
}

/// Scoped handle owning one connection pool and the credentials.
///
/// Create one per unit of work; dropping it closes the pool.
pub struct TaigaClient {
    base_url: String,
    username: String,
    password: String,
    client: Client,
}

impl TaigaClient {
    /// Build a client from the configured credentials.
    ///
    /// Fails with [`TaigaError::Configuration`] when the base URL, username
    /// or password is missing or empty. Trailing slashes are stripped from
    /// the base URL.
    pub fn new(config: &TaigaConfig) -> TaigaResult<Self> {
        let base_url = config.require_base_url()?.trim_end_matches('/').to_string();
        let username = config.require_username()?.to_string();
        let password = config.require_password()?.to_string();

        crate::tls::install_crypto_provider();
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            base_url,
            username,
            password,
            client,
        })
    }

    /// Base URL with trailing slashes stripped.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request and decode the body.
    ///
    /// Non-2xx statuses become [`TaigaError::Remote`] carrying the status and
    /// the raw body. An empty 2xx body yields `None`.
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, i64)]>,
        body: Option<&Value>,
    ) -> TaigaResult<Option<Value>> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "Taiga request");

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .basic_auth(&self.username, Some(&self.password));
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(%method, %url, status = status.as_u16(), "Taiga request failed");
            return Err(TaigaError::Remote {
                status: Some(status.as_u16()),
                detail,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Request an endpoint whose successful answer must carry a body of type `T`.
    async fn request_body<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, i64)]>,
        body: Option<&Value>,
    ) -> TaigaResult<T> {
        let value = self
            .request(method, path, query, body)
            .await?
            .ok_or_else(|| TaigaError::InvalidResponse {
                message: format!("empty response body from {path}"),
            })?;
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl TaigaApi for TaigaClient {
    async fn list_projects(&self) -> TaigaResult<Vec<Record>> {
        self.request_body(Method::GET, "/projects", None, None).await
    }

    async fn list_epics(&self, project_id: i64) -> TaigaResult<Vec<Record>> {
        self.request_body(Method::GET, "/epics", Some(&[("project", project_id)][..]), None)
            .await
    }

    async fn list_user_story_statuses(
        &self,
        project_id: i64,
    ) -> TaigaResult<Vec<UserStoryStatus>> {
        self.request_body(
            Method::GET,
            "/userstory-statuses",
            Some(&[("project", project_id)][..]),
            None,
        )
        .await
    }

    async fn create_user_story(&self, payload: Record) -> TaigaResult<Record> {
        let body = Value::Object(payload);
        self.request_body(Method::POST, "/userstories", None, Some(&body))
            .await
    }

    async fn link_epic_user_story(
        &self,
        epic_id: i64,
        user_story_id: i64,
    ) -> TaigaResult<Option<Record>> {
        let path = format!("/epics/{epic_id}/related_userstories");
        let body = json!({ "user_story": user_story_id });

        match self.request(Method::POST, &path, None, Some(&body)).await? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(record)) if record.is_empty() => Ok(None),
            Some(Value::Object(record)) => Ok(Some(record)),
            Some(other) => Err(TaigaError::InvalidResponse {
                message: format!("expected an object from {path}, got {other}"),
            }),
        }
    }
}
