//! Installation tokens for local use
//!
//! Minting installation tokens from a GitHub App key is left to the hosting
//! bot. For local runs tokens are read from `~/.config/maintainerd/secrets.toml`,
//! which must not be readable by group or others on Unix:
//!
//! ```toml
//! [github]
//! token = "ghp_shared"
//!
//! [installations]
//! "12345" = "ghs_for_this_installation"
//! ```
//!
//! `GITHUB_TOKEN` overrides the shared token.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Secrets structure
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Secrets {
    /// Shared GitHub credentials
    pub github: GitHubSecrets,

    /// Tokens keyed by installation id
    pub installations: HashMap<String, String>,
}

/// GitHub-related secrets
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHubSecrets {
    /// Token used when no installation-specific token is configured
    pub token: Option<String>,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut installations: Vec<&str> = self.installations.keys().map(String::as_str).collect();
        installations.sort_unstable();

        f.debug_struct("Secrets")
            .field("github", &self.github)
            .field("installations", &installations)
            .finish()
    }
}

impl std::fmt::Debug for GitHubSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubSecrets")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Secrets {
    /// Load secrets from the default location
    ///
    /// Returns empty secrets if the file doesn't exist
    pub fn load() -> Result<Self> {
        match Self::default_secrets_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load secrets from a specific file with permission checking
    pub fn load_from_file(path: &Path) -> Result<Self> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mode = std::fs::metadata(path)?.permissions().mode();
            if mode & 0o077 != 0 {
                return Err(Error::Config(format!(
                    "Secrets file {} has insecure permissions {:o}. \
                     Please run: chmod 600 {}",
                    path.display(),
                    mode & 0o777,
                    path.display()
                )));
            }
        }

        let contents = std::fs::read_to_string(path)?;
        let secrets: Secrets = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse secrets: {}", e)))?;

        debug!(
            path = %path.display(),
            installations = secrets.installations.len(),
            "Loaded secrets"
        );

        Ok(secrets)
    }

    /// Get the default secrets file path
    pub fn default_secrets_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("maintainerd").join("secrets.toml"))
    }

    /// Token for an installation
    ///
    /// Priority: installation entry > GITHUB_TOKEN env var > shared token
    pub fn installation_token(&self, installation_id: u64) -> Option<String> {
        let env_token = std::env::var("GITHUB_TOKEN").ok();
        self.resolve_token(installation_id, env_token.as_deref())
    }

    fn resolve_token(&self, installation_id: u64, env_token: Option<&str>) -> Option<String> {
        let non_empty = |t: &str| {
            let t = t.trim();
            (!t.is_empty()).then(|| t.to_string())
        };

        if let Some(token) = self
            .installations
            .get(&installation_id.to_string())
            .and_then(|t| non_empty(t.as_str()))
        {
            debug!(installation_id, "Using installation token from secrets file");
            return Some(token);
        }

        if let Some(token) = env_token.and_then(non_empty) {
            debug!("Using GitHub token from GITHUB_TOKEN environment variable");
            return Some(token);
        }

        self.github.token.as_deref().and_then(non_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn secrets() -> Secrets {
        toml::from_str(
            r#"
[github]
token = " ghp_shared "

[installations]
"42" = "ghs_installation"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_installation_token_wins() {
        let token = secrets().resolve_token(42, Some("from_env"));
        assert_eq!(token.as_deref(), Some("ghs_installation"));
    }

    #[test]
    fn test_env_token_before_shared() {
        let token = secrets().resolve_token(7, Some("from_env"));
        assert_eq!(token.as_deref(), Some("from_env"));
    }

    #[test]
    fn test_shared_token_is_trimmed() {
        let token = secrets().resolve_token(7, Some("   "));
        assert_eq!(token.as_deref(), Some("ghp_shared"));
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let rendered = format!("{:?}", secrets());
        assert!(!rendered.contains("ghp_shared"));
        assert!(!rendered.contains("ghs_installation"));
        assert!(rendered.contains("\"42\""));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_no_token() {
        assert!(Secrets::default().resolve_token(1, None).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_insecure_permissions_rejected() {
        use std::os::unix::fs::PermissionsExt;

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[github]\ntoken = \"test\"").unwrap();
        std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

        let err = Secrets::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("insecure permissions"));
    }

    #[cfg(unix)]
    #[test]
    fn test_secure_permissions_accepted() {
        use std::os::unix::fs::PermissionsExt;

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[installations]\n\"9\" = \"ghs_nine\"").unwrap();
        std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(0o600)).unwrap();

        let secrets = Secrets::load_from_file(file.path()).unwrap();
        assert_eq!(secrets.resolve_token(9, None).as_deref(), Some("ghs_nine"));
    }
}
