//! Maintainerd Core - pull request checklists for maintainerd
//!
//! This crate renders the maintainerd checklist into pull request
//! descriptions, inspects it for completion, and describes checkbox edits.
//! It also owns the `.maintainerd` repository configuration schema and the
//! local tool configuration.

pub mod checklist;
pub mod config;
pub mod error;
pub mod repo_config;
pub mod secrets;

pub use checklist::{
    build, build_with_selection, check_entries, check_semver, get_log_entry, is_present,
    suggest_semver, Checkbox, ChecklistEntry, ParsedBody, Role, SemverLevel,
};
pub use config::{Config, GitHubConfig};
pub use error::{Error, Result};
pub use repo_config::{ChecklistConfig, ChecklistItem, RepoConfig, SemverConfig};
pub use secrets::Secrets;
