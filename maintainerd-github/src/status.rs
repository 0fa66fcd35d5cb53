//! Commit statuses reporting checklist results

use reqwest::{Method, Response};
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::{GitHubClient, RepoPath, Result};

/// Description posted with a passing status
pub const SUCCESS_DESCRIPTION: &str = "maintainerd thanks you!";

/// Commit status state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    Success,
    Failure,
}

/// Body of a create-status request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStatus {
    pub state: StatusState,
    pub description: String,
    pub context: String,
}

impl CommitStatus {
    /// A failing status when a message is given, otherwise a passing one
    pub fn new(context: impl Into<String>, failure_message: Option<&str>) -> Self {
        let (state, description) = match failure_message.filter(|m| !m.is_empty()) {
            Some(message) => (StatusState::Failure, message.to_string()),
            None => (StatusState::Success, SUCCESS_DESCRIPTION.to_string()),
        };

        Self {
            state,
            description,
            context: context.into(),
        }
    }
}

impl GitHubClient {
    /// Post a commit status for `sha`
    ///
    /// The state is `failure` with `failure_message` as description when a
    /// message is given, otherwise `success`.
    pub async fn update_commit(
        &self,
        repo: &RepoPath,
        sha: &str,
        context: &str,
        failure_message: Option<&str>,
    ) -> Result<Response> {
        let status = CommitStatus::new(context, failure_message);
        let url = self.status_url(repo, sha)?;

        let response = self
            .execute(Method::POST, url, Some(&serde_json::to_value(&status)?))
            .await?;

        info!(
            repo = %repo,
            sha,
            context,
            state = ?status.state,
            "Posted commit status"
        );

        Ok(response)
    }

    fn status_url(&self, repo: &RepoPath, sha: &str) -> Result<Url> {
        let mut url = self.url(&format!("/repos/{}/statuses/{}", repo, sha))?;
        url.query_pairs_mut()
            .append_pair("org", repo.owner())
            .append_pair("repo", repo.repo())
            .append_pair("sha", sha);
        Ok(url)
    }
}
