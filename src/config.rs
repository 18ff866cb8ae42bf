//! Configuration Management
//!
//! Handles persistent configuration storage for twaccount.

use crate::account::{AccountRequestProcessor, AccountType};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding an optional bearer token
pub const TOKEN_ENV_VAR: &str = "TWITTER_BEARER_TOKEN";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// API base URL, e.g. `https://api.twitter.com/1/`
    #[serde(default)]
    pub base_url: Option<String>,
    /// Last queried account type
    #[serde(default)]
    pub last_type: Option<AccountType>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("twaccount").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get effective base URL (CLI > config > default)
    pub fn effective_base_url(&self, cli: Option<&str>) -> String {
        cli.map(str::to_string)
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| AccountRequestProcessor::DEFAULT_BASE_URL.to_string())
    }

    /// Type to query when none is named (last queried > `VerifyCredentials`).
    /// A saved `EndSession` is never replayed.
    pub fn effective_type(&self) -> AccountType {
        self.last_type
            .filter(|t| *t != AccountType::EndSession)
            .unwrap_or_default()
    }

    /// Bearer token from the environment, if set and non-empty
    pub fn bearer_token() -> Option<String> {
        std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }

    /// Remember the last queried type and save
    pub fn set_last_type(&mut self, account_type: AccountType) -> Result<()> {
        self.last_type = Some(account_type);
        self.save()
    }
}
