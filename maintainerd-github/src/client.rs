//! Authenticated GitHub REST client

use std::sync::Arc;

use maintainerd_core::{Config, GitHubConfig};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Method, Request, Response};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::{Error, Result, SecretsTokenSource, TokenSource};

/// GitHub API client acting for a single installation
///
/// Each request fetches a token from the [`TokenSource`] and carries the
/// configured user agent and accept media type. Failures, including non-2xx
/// responses, are returned to the caller untouched; there are no retries.
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    installation_id: u64,
    tokens: Arc<dyn TokenSource>,
    api: GitHubConfig,
}

impl GitHubClient {
    /// Create a client against api.github.com
    pub fn new(installation_id: u64, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            http: reqwest::Client::new(),
            installation_id,
            tokens,
            api: GitHubConfig::default(),
        }
    }

    /// Create a client with explicit API settings
    pub fn with_config(
        installation_id: u64,
        tokens: Arc<dyn TokenSource>,
        api: GitHubConfig,
    ) -> Result<Self> {
        Url::parse(&api.api_url)?;
        Ok(Self {
            api,
            ..Self::new(installation_id, tokens)
        })
    }

    /// Create a client using the local tool configuration and secrets file
    pub fn from_config(installation_id: u64, config: &Config) -> Result<Self> {
        let tokens = Arc::new(SecretsTokenSource::load()?);
        Self::with_config(installation_id, tokens, config.github.clone())
    }

    /// Installation this client acts for
    pub fn installation_id(&self) -> u64 {
        self.installation_id
    }

    /// API settings in use
    pub fn api_config(&self) -> &GitHubConfig {
        &self.api
    }

    /// Issue a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.execute(Method::GET, self.url(path)?, None).await
    }

    /// Issue a POST request with a JSON body
    pub async fn post(&self, path: &str, body: &Value) -> Result<Response> {
        self.execute(Method::POST, self.url(path)?, Some(body)).await
    }

    /// Issue a PATCH request with a JSON body
    pub async fn patch(&self, path: &str, body: &Value) -> Result<Response> {
        self.execute(Method::PATCH, self.url(path)?, Some(body)).await
    }

    /// Resolve an API path such as `/repos/o/r/pulls/1` against the base URL
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let base = self.api.api_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    pub(crate) async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
    ) -> Result<Response> {
        let token = self.tokens.installation_token(self.installation_id).await?;
        let request = self.build_request(method, url, &token, body)?;

        debug!(
            method = %request.method(),
            url = %request.url(),
            installation_id = self.installation_id,
            "Sending GitHub request"
        );

        let response = self.http.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response".to_string());
            return Err(Error::Status { status, body });
        }

        Ok(response)
    }

    /// Build a request without sending it
    pub(crate) fn build_request(
        &self,
        method: Method,
        url: Url,
        token: &str,
        body: Option<&Value>,
    ) -> Result<Request> {
        let mut builder = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(USER_AGENT, &self.api.user_agent)
            .header(ACCEPT, &self.api.accept);

        if let Some(body) = body {
            builder = builder.json(body);
        }

        Ok(builder.build()?)
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("installation_id", &self.installation_id)
            .field("api_url", &self.api.api_url)
            .finish_non_exhaustive()
    }
}
