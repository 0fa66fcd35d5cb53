//! Describing checkbox edits for the audit log

use super::{ParsedBody, Role};

/// Describe a single checkbox toggle between two versions of a body
///
/// Toggling a checkbox swaps one fixed-width character, so bodies that differ
/// in length or line count are some other kind of edit and yield `None`.
/// Otherwise the first entry whose checked state changed is reported, using
/// the role from `old_body` and the checkbox and description from `new_body`.
pub fn get_log_entry(old_body: &str, new_body: &str, username: &str) -> Option<String> {
    if old_body.chars().count() != new_body.chars().count() {
        return None;
    }
    if old_body.split('\n').count() != new_body.split('\n').count() {
        return None;
    }

    let old = ParsedBody::parse(old_body);
    let new = ParsedBody::parse(new_body);

    old.entries()
        .iter()
        .zip(new.entries())
        .find(|(before, after)| before.is_checked() != after.is_checked())
        .map(|(before, after)| match before.role {
            Role::Item | Role::RequiredItem => format!(
                "@{} {} `{}`.",
                username,
                if after.is_checked() { "checked" } else { "unchecked" },
                after.description
            ),
            Role::Semver => format!(
                "@{} {} `{}` as the semantic version.",
                username,
                if after.is_checked() { "selected" } else { "deselected" },
                after.description
            ),
        })
}
