use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "llmo";
pub const CONFIG_FILE: &str = "config.json";
pub const TOKEN_FILE: &str = "token.json";

/// Per-user configuration directory, `<config-home>/llmo`.
pub fn app_config_dir() -> Result<PathBuf> {
    let home = dirs::config_dir().context("cannot determine the user configuration directory")?;
    Ok(home.join(APP_DIR))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub endpoint_url: String,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// Session credential persisted by the login flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
}

impl Token {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading token file {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing token file {}", path.display()))
    }
}
