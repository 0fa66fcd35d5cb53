//! Local configuration for the maintainerd tooling
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (MAINTAINERD_*)
//! 3. Config file (~/.config/maintainerd/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Product identifier sent with every request
pub const DEFAULT_USER_AGENT: &str = "divmain/maintainerd";

/// Media type requested from the GitHub API
pub const DEFAULT_ACCEPT: &str = "application/vnd.github.machine-man-preview+json";

/// GitHub API settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Base URL requests are sent to
    pub api_url: String,

    /// Value of the `User-Agent` header
    pub user_agent: String,

    /// Value of the `Accept` header
    pub accept: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// GitHub configuration
    pub github: GitHubConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/maintainerd/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("maintainerd").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - MAINTAINERD_API_URL: GitHub API base URL
    /// - MAINTAINERD_USER_AGENT: User-Agent header
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var("MAINTAINERD_API_URL").ok(),
            std::env::var("MAINTAINERD_USER_AGENT").ok(),
        )
    }

    /// Apply explicit overrides, ignoring `None`
    pub fn with_overrides(mut self, api_url: Option<String>, user_agent: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.github.api_url = url;
        }

        if let Some(agent) = user_agent {
            self.github.user_agent = agent;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(api_url: Option<String>, user_agent: Option<String>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_overrides(api_url, user_agent))
    }
}
