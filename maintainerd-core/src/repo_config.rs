//! The `.maintainerd` file checked into each repository
//!
//! ```yaml
//! pullRequest:
//!   preamble: "Please confirm the following:"
//!   items:
//!     - prompt: " I have added tests"
//!       required: true
//!   semver:
//!     enabled: true
//!     required: true
//! ```

use serde::{Deserialize, Serialize};

use crate::Result;

/// Path of the configuration file within a repository
pub const REPO_CONFIG_PATH: &str = ".maintainerd";

/// Root of a repository's `.maintainerd` document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RepoConfig {
    /// Pull request checklist settings
    pub pull_request: ChecklistConfig,
}

/// Checklist rendered into every pull request description
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChecklistConfig {
    /// Text shown above the checklist
    pub preamble: String,

    /// Checklist items, rendered in order
    pub items: Vec<ChecklistItem>,

    /// Semantic version selection
    pub semver: SemverConfig,
}

/// A single checklist prompt
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChecklistItem {
    /// Text rendered after the marker, verbatim (include a leading space)
    pub prompt: String,

    /// Whether the box starts checked
    pub default: bool,

    /// Whether the box must be checked before the status passes
    pub required: bool,
}

/// Semantic version block settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SemverConfig {
    /// Render the semver options
    pub enabled: bool,

    /// Exactly one option must be selected
    pub required: bool,

    /// Pre-select an option from the pull request's commit messages
    pub autodetect: bool,
}

impl RepoConfig {
    /// Parse a `.maintainerd` YAML document
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }
}
