//! Maintainerd GitHub - GitHub REST access for maintainerd
//!
//! This crate wraps the handful of GitHub API calls maintainerd needs:
//! fetching a repository's `.maintainerd` file, posting commit statuses,
//! patching pull requests, and listing pull request commits.

mod client;
mod contents;
mod error;
mod pr;
mod repo;
mod status;
mod token;

pub use client::GitHubClient;
pub use error::{Error, Result};
pub use pr::{CommitAuthor, CommitDetails, PullRequestCommit, PullRequestRef, UserRef};
pub use repo::RepoPath;
pub use status::{CommitStatus, StatusState, SUCCESS_DESCRIPTION};
pub use token::{SecretsTokenSource, StaticToken, TokenSource};
