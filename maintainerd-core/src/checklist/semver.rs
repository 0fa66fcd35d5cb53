//! Semantic version options and autodetection from commit messages

use std::fmt;

/// A selectable semantic version bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemverLevel {
    Major,
    Minor,
    Patch,
    DocumentationOnly,
}

impl SemverLevel {
    /// All levels in the order they are rendered
    pub const ALL: [SemverLevel; 4] = [
        SemverLevel::Major,
        SemverLevel::Minor,
        SemverLevel::Patch,
        SemverLevel::DocumentationOnly,
    ];

    /// Label rendered after the semver marker
    pub fn label(self) -> &'static str {
        match self {
            SemverLevel::Major => "major",
            SemverLevel::Minor => "minor",
            SemverLevel::Patch => "patch",
            SemverLevel::DocumentationOnly => "documentation only",
        }
    }

    /// Look up a level by its rendered label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label.trim())
    }

    /// Size of the bump; documentation-only changes rank lowest
    fn rank(self) -> u8 {
        match self {
            SemverLevel::Major => 3,
            SemverLevel::Minor => 2,
            SemverLevel::Patch => 1,
            SemverLevel::DocumentationOnly => 0,
        }
    }

    /// Classify a commit message by its leading word
    fn from_commit_message(message: &str) -> Option<Self> {
        let first_line = message.lines().next().unwrap_or_default();
        let word: String = first_line
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_ascii_lowercase();

        match word.as_str() {
            "change" | "changes" | "changed" | "breaking" => Some(SemverLevel::Major),
            "add" | "adds" | "added" | "feature" | "feat" => Some(SemverLevel::Minor),
            "fix" | "fixes" | "fixed" | "bug" | "bugfix" => Some(SemverLevel::Patch),
            "documentation" | "docs" | "doc" => Some(SemverLevel::DocumentationOnly),
            _ => None,
        }
    }
}

impl fmt::Display for SemverLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Suggest a semver level from a pull request's commit messages
///
/// Messages are classified by their first word (`Fix`/`Bug`, `Add`/`Feature`,
/// `Change`/`Breaking`, `Documentation`); the largest bump wins. Returns
/// `None` when no message is recognised.
pub fn suggest_semver<S: AsRef<str>>(messages: &[S]) -> Option<SemverLevel> {
    messages
        .iter()
        .filter_map(|m| SemverLevel::from_commit_message(m.as_ref()))
        .max_by_key(|level| level.rank())
}
