//! The maintainerd checklist embedded in pull request descriptions
//!
//! A managed body has two regions separated by [`SEPARATOR`]: free text
//! written by the author, and an autogenerated region that maintainerd owns
//! and rewrites on every build. Each checklist line carries a role marker
//! right after its checkbox:
//!
//! ```markdown
//! Fixes the flaky test.
//! <!-- maintainerd: DO NOT REMOVE -->
//!
//! -----
//!
//! Please confirm:
//! - [ ] <!-- checklist item; required --> I ran the tests _(required)_
//! - [x] <!-- checklist item --> I updated the changelog
//! ```

mod log;
mod parse;
mod render;
mod semver;
mod validate;

pub use log::get_log_entry;
pub use parse::{Checkbox, ChecklistEntry, ParsedBody, Role};
pub use render::{build, build_with_selection};
pub use semver::{suggest_semver, SemverLevel};
pub use validate::{check_entries, check_semver};

/// Divides author text from the autogenerated checklist
pub const SEPARATOR: &str = "<!-- maintainerd: DO NOT REMOVE -->";

/// Marks an optional checklist item
pub const ENTRY_MARKER: &str = "<!-- checklist item -->";

/// Marks a checklist item that must be checked
pub const ENTRY_MARKER_REQUIRED: &str = "<!-- checklist item; required -->";

/// Marks a semantic version option
pub const SEMVER_MARKER: &str = "<!-- semver -->";

/// Whether a body already contains a maintainerd checklist
pub fn is_present(body: &str) -> bool {
    body.contains(SEPARATOR)
}
