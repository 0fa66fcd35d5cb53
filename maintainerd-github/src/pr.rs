//! Pull request updates and commit listing

use chrono::{DateTime, Utc};
use reqwest::Response;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::{GitHubClient, RepoPath, Result};

/// Identifies a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub repo: RepoPath,
    pub number: u64,
}

impl PullRequestRef {
    pub fn new(repo: RepoPath, number: u64) -> Self {
        Self { repo, number }
    }

    fn api_path(&self) -> String {
        format!("/repos/{}/pulls/{}", self.repo, self.number)
    }
}

/// A commit as listed on a pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestCommit {
    /// Commit SHA
    pub sha: String,
    /// Git-level commit data
    pub commit: CommitDetails,
    /// GitHub account of the author, when matched
    #[serde(default)]
    pub author: Option<UserRef>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Message and git author of a commit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitDetails {
    pub message: String,
    pub author: Option<CommitAuthor>,
}

/// Git author signature
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
    pub date: Option<DateTime<Utc>>,
}

/// A GitHub account reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub login: String,
}

impl PullRequestCommit {
    /// Full commit message
    pub fn message(&self) -> &str {
        &self.commit.message
    }

    /// First line of the commit message
    pub fn summary(&self) -> &str {
        self.commit.message.lines().next().unwrap_or_default()
    }
}

impl GitHubClient {
    /// Apply a JSON patch to a pull request, e.g. `{"body": "..."}`
    pub async fn update_pull_request(
        &self,
        pull_request: &PullRequestRef,
        patch: &Value,
    ) -> Result<Response> {
        let response = self.patch(&pull_request.api_path(), patch).await?;

        info!(
            repo = %pull_request.repo,
            number = pull_request.number,
            "Updated pull request"
        );

        Ok(response)
    }

    /// List the commits on a pull request
    pub async fn get_pull_request_commits(
        &self,
        repo: &RepoPath,
        number: u64,
    ) -> Result<Vec<PullRequestCommit>> {
        let path = format!("{}/commits", PullRequestRef::new(repo.clone(), number).api_path());
        let commits: Vec<PullRequestCommit> = self.get(&path).await?.json().await?;

        debug!(repo = %repo, number, count = commits.len(), "Fetched pull request commits");

        Ok(commits)
    }
}
