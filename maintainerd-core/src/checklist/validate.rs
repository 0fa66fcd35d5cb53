//! Completion checks reported as commit statuses

use tracing::debug;

use crate::{ChecklistConfig, Result};

use super::ParsedBody;

/// Check that every required item is checked
///
/// Returns `None` when complete, otherwise a message with the number of
/// required items left. Optional items never block completion.
pub fn check_entries(body: &str) -> Result<Option<String>> {
    let remaining = ParsedBody::parse_checklist(body)?.remaining_required();
    debug!(remaining, "Checked required checklist items");

    Ok((remaining > 0).then(|| format!("{} checklist items remaining.", remaining)))
}

/// Check the semantic version selection
///
/// Always passes unless the configuration requires a selection, in which case
/// exactly one option must be checked.
pub fn check_semver(body: &str, config: &ChecklistConfig) -> Result<Option<String>> {
    if !config.semver.required {
        return Ok(None);
    }

    let selected = ParsedBody::parse_checklist(body)?.selected_semver().count();
    debug!(selected, "Checked semver selection");

    Ok(match selected {
        1 => None,
        0 => Some("You must select a semantic version.".to_string()),
        _ => Some("You may only select a single semantic version.".to_string()),
    })
}
