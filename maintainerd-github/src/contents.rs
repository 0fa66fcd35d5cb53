//! Fetching the `.maintainerd` file through the contents API

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use maintainerd_core::repo_config::REPO_CONFIG_PATH;
use maintainerd_core::RepoConfig;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{Error, GitHubClient, RepoPath, Result};

/// The part of a contents API response we read
#[derive(Debug, Deserialize)]
struct FileContents {
    content: String,
    #[serde(default)]
    encoding: Option<String>,
}

impl GitHubClient {
    /// Fetch and parse the repository's `.maintainerd` file
    ///
    /// A missing file surfaces as the API's 404; no default configuration is
    /// substituted.
    pub async fn get_config(&self, repo: &RepoPath) -> Result<RepoConfig> {
        debug!(repo = %repo, "Fetching repository config");

        let contents: FileContents = self
            .get(&format!("/repos/{}/contents/{}", repo, REPO_CONFIG_PATH))
            .await?
            .json()
            .await?;

        let config = decode_config(&contents)?;
        info!(
            repo = %repo,
            items = config.pull_request.items.len(),
            "Loaded repository config"
        );

        Ok(config)
    }
}

fn decode_config(contents: &FileContents) -> Result<RepoConfig> {
    if let Some(encoding) = contents.encoding.as_deref() {
        if encoding != "base64" {
            return Err(Error::Decode(format!("unsupported encoding {}", encoding)));
        }
    }

    // The API wraps base64 payloads at 60 columns
    let packed: String = contents
        .content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(packed)
        .map_err(|e| Error::Decode(e.to_string()))?;
    let yaml = String::from_utf8(bytes).map_err(|e| Error::Decode(e.to_string()))?;

    Ok(RepoConfig::from_yaml(&yaml)?)
}
