pub mod config;

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use config::{app_config_dir, Config, Token, CONFIG_FILE, TOKEN_FILE};

pub const ENDPOINT_URL_ENV: &str = "LLMO_ENDPOINT_URL";
pub const ACCESS_TOKEN_ENV: &str = "LLMO_ACCESS_TOKEN";

/// Execution environment of one command: where to reach the service and
/// which bearer credential to present.
#[derive(Clone)]
pub struct Env {
    endpoint_url: String,
    access_token: String,
}

impl std::fmt::Debug for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env")
            .field("endpoint_url", &self.endpoint_url)
            .finish_non_exhaustive()
    }
}

impl Env {
    pub fn new(endpoint_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Build the environment from `LLMO_ENDPOINT_URL` / `LLMO_ACCESS_TOKEN`,
    /// falling back to `config.json` / `token.json` under the config directory.
    pub fn load() -> Result<Self> {
        Self::resolve(
            non_empty_var(ENDPOINT_URL_ENV),
            non_empty_var(ACCESS_TOKEN_ENV),
            app_config_dir,
        )
    }

    /// Explicit values win; only a missing value reads its file under `config_dir`.
    fn resolve(
        endpoint_url: Option<String>,
        access_token: Option<String>,
        config_dir: impl Fn() -> Result<PathBuf>,
    ) -> Result<Self> {
        let endpoint_url = match endpoint_url {
            Some(url) => url,
            None => Config::from_file(&config_dir()?.join(CONFIG_FILE))?.endpoint_url,
        };
        let access_token = match access_token {
            Some(token) => token,
            None => Token::from_file(&config_dir()?.join(TOKEN_FILE))?.access_token,
        };
        debug!(endpoint_url = %endpoint_url, "environment loaded");
        Ok(Self::new(endpoint_url, access_token))
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
