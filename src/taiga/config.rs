//! Taiga connection settings.

use super::error::{TaigaError, TaigaResult};

pub const BASE_URL_VAR: &str = "TAIGA_BASE_URL";
pub const USERNAME_VAR: &str = "TAIGA_USERNAME";
pub const PASSWORD_VAR: &str = "TAIGA_PASSWORD";

/// Taiga credentials and API root.
///
/// Built once at process start and shared with every tool invocation.
/// Values stay optional here: a missing setting only fails the invocation
/// that needs a client, not the server startup.
#[derive(Clone, Default)]
pub struct TaigaConfig {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl TaigaConfig {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: Some(base_url.into()),
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    pub(crate) fn require_base_url(&self) -> TaigaResult<&str> {
        require(BASE_URL_VAR, self.base_url.as_deref())
    }

    pub(crate) fn require_username(&self) -> TaigaResult<&str> {
        require(USERNAME_VAR, self.username.as_deref())
    }

    pub(crate) fn require_password(&self) -> TaigaResult<&str> {
        require(PASSWORD_VAR, self.password.as_deref())
    }
}

// Hand-written so the password never reaches logs.
impl std::fmt::Debug for TaigaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaigaConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

fn require<'a>(name: &str, value: Option<&'a str>) -> TaigaResult<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(TaigaError::Configuration {
            name: name.to_string(),
        }),
    }
}
