//! Repository paths in `owner/repo` form

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A repository identified by owner and name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoPath {
    owner: String,
    repo: String,
}

impl RepoPath {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Repository owner (user or organization)
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Accepts `owner/repo`, `https://github.com/owner/repo` and
/// `git@github.com:owner/repo.git`
///
/// Exactly two segments are allowed, each made of ASCII letters, digits,
/// `.`, `_` and `-`.
impl FromStr for RepoPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let path = if s.starts_with("https://") || s.starts_with("http://") {
            let url = url::Url::parse(s)?;
            if url.query().is_some() || url.fragment().is_some() {
                return Err(invalid(s));
            }
            url.path().trim_start_matches('/').to_string()
        } else if let Some(rest) = s.strip_prefix("git@") {
            rest.split_once(':')
                .map(|(_, path)| path.to_string())
                .ok_or_else(|| Error::Parse(format!("Invalid SSH URL: {}", s)))?
        } else {
            s.to_string()
        };

        let path = path.strip_suffix(".git").unwrap_or(&path);
        let segments: Vec<&str> = path.split('/').collect();
        match segments.as_slice() {
            [owner, repo] if is_valid_name(owner) && is_valid_name(repo) => {
                Ok(Self::new(*owner, *repo))
            }
            _ => Err(invalid(s)),
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

fn invalid(s: &str) -> Error {
    Error::Parse(format!("Invalid repository: {}. Expected owner/repo", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorthand() {
        let path: RepoPath = "divmain/maintainerd".parse().unwrap();
        assert_eq!(path.owner(), "divmain");
        assert_eq!(path.repo(), "maintainerd");
        assert_eq!(path.to_string(), "divmain/maintainerd");
    }

    #[test]
    fn test_parse_https_url() {
        let path: RepoPath = "https://github.com/owner/repo.git".parse().unwrap();
        assert_eq!(path, RepoPath::new("owner", "repo"));
    }

    #[test]
    fn test_parse_ssh_url() {
        let path: RepoPath = "git@github.com:owner/repo.git".parse().unwrap();
        assert_eq!(path, RepoPath::new("owner", "repo"));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("invalid".parse::<RepoPath>().is_err());
        assert!("/repo".parse::<RepoPath>().is_err());
        assert!("git@github.com".parse::<RepoPath>().is_err());
    }

    #[test]
    fn test_extra_segments_rejected() {
        assert!("a/b/c".parse::<RepoPath>().is_err());
        assert!("owner/repo/".parse::<RepoPath>().is_err());
        assert!("https://github.com/owner/repo/tree/main"
            .parse::<RepoPath>()
            .is_err());
    }

    #[test]
    fn test_url_metacharacters_rejected() {
        assert!("o/r?ref=x".parse::<RepoPath>().is_err());
        assert!("o/r#frag".parse::<RepoPath>().is_err());
        assert!("o/r%2Fx".parse::<RepoPath>().is_err());
        assert!("o/my repo".parse::<RepoPath>().is_err());
        assert!("https://github.com/o/r?ref=x".parse::<RepoPath>().is_err());
        assert!("../r".parse::<RepoPath>().is_err());
    }

    #[test]
    fn test_allowed_name_characters() {
        let path: RepoPath = "my-org_1/repo.name".parse().unwrap();
        assert_eq!(path.owner(), "my-org_1");
        assert_eq!(path.repo(), "repo.name");
    }
}
