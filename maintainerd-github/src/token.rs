//! Installation token lookup
//!
//! Minting and caching installation tokens belongs to the hosting bot; the
//! client only asks a [`TokenSource`] for a token before each request.

use async_trait::async_trait;
use maintainerd_core::Secrets;
use tracing::debug;

use crate::{Error, Result};

/// Provides a bearer token for an installation
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Token to authorize a request made on behalf of `installation_id`
    async fn installation_token(&self, installation_id: u64) -> Result<String>;
}

/// The same token for every installation
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StaticToken").field(&"<redacted>").finish()
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn installation_token(&self, _installation_id: u64) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Tokens from the local secrets file and `GITHUB_TOKEN`
#[derive(Clone)]
pub struct SecretsTokenSource {
    secrets: Secrets,
}

impl SecretsTokenSource {
    pub fn new(secrets: Secrets) -> Self {
        Self { secrets }
    }

    /// Load secrets from the default location
    pub fn load() -> Result<Self> {
        let secrets = Secrets::load().map_err(|e| Error::Auth(e.to_string()))?;
        Ok(Self::new(secrets))
    }
}

impl std::fmt::Debug for SecretsTokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretsTokenSource")
            .field("installations", &self.secrets.installations.len())
            .field("shared_token", &self.secrets.github.token.is_some())
            .finish()
    }
}

#[async_trait]
impl TokenSource for SecretsTokenSource {
    async fn installation_token(&self, installation_id: u64) -> Result<String> {
        debug!(installation_id, "Looking up installation token");

        self.secrets
            .installation_token(installation_id)
            .ok_or_else(|| {
                Error::Auth(format!(
                    "No token for installation {}. Set GITHUB_TOKEN or add it to \
                     ~/.config/maintainerd/secrets.toml",
                    installation_id
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_static_token() {
        let source = StaticToken::new("ghs_abc");
        assert_eq!(source.installation_token(1).await.unwrap(), "ghs_abc");
        assert_eq!(source.installation_token(2).await.unwrap(), "ghs_abc");
    }

    #[test]
    fn test_static_token_debug_is_redacted() {
        let rendered = format!("{:?}", StaticToken::new("ghs_secret"));
        assert!(!rendered.contains("ghs_secret"));
    }

    #[tokio::test]
    async fn test_secrets_installation_entry() {
        let mut installations = HashMap::new();
        installations.insert("77".to_string(), "ghs_77".to_string());
        let source = SecretsTokenSource::new(Secrets {
            installations,
            ..Default::default()
        });

        assert_eq!(source.installation_token(77).await.unwrap(), "ghs_77");
    }

    #[test]
    fn test_secrets_source_debug_is_redacted() {
        let mut installations = HashMap::new();
        installations.insert("77".to_string(), "ghs_77_secret".to_string());
        let source = SecretsTokenSource::new(Secrets {
            github: maintainerd_core::secrets::GitHubSecrets {
                token: Some("ghp_shared_secret".to_string()),
            },
            installations,
        });

        let rendered = format!("{:?}", source);
        assert!(!rendered.contains("ghs_77_secret"));
        assert!(!rendered.contains("ghp_shared_secret"));
        assert!(rendered.contains("installations: 1"));
    }
}
