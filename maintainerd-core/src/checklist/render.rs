//! Rendering the autogenerated checklist region

use tracing::debug;

use crate::{ChecklistConfig, ChecklistItem};

use super::{ParsedBody, SemverLevel, ENTRY_MARKER, ENTRY_MARKER_REQUIRED, SEMVER_MARKER, SEPARATOR};

const SEMVER_INTRO: &str = "The maintainers of this repository require you to select the semantic version type that
the changes in this pull request represent.  Please select one of the following:";

/// Rebuild a body with a fresh checklist appended
///
/// Anything from the first separator onwards is discarded, so calling this on
/// an already managed body replaces the old checklist and keeps the author's
/// text intact.
pub fn build(body: &str, config: &ChecklistConfig) -> String {
    build_with_selection(body, config, None)
}

/// Like [`build`], with one semver option pre-selected
///
/// The selection is ignored when the semver block is disabled.
pub fn build_with_selection(
    body: &str,
    config: &ChecklistConfig,
    selection: Option<SemverLevel>,
) -> String {
    let free_text = ParsedBody::parse(body).free_text();

    let entries = config
        .items
        .iter()
        .map(render_item)
        .collect::<Vec<_>>()
        .join("\n");

    let semver = if config.semver.enabled {
        render_semver(selection)
    } else {
        String::new()
    };

    debug!(
        items = config.items.len(),
        semver = config.semver.enabled,
        ?selection,
        "Rendered checklist"
    );

    format!(
        "{free_text}\n{SEPARATOR}\n\n-----\n\n{preamble}\n{entries}\n{semver}\n",
        preamble = config.preamble
    )
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "- [x] "
    } else {
        "- [ ] "
    }
}

fn render_item(item: &ChecklistItem) -> String {
    let (marker, suffix) = if item.required {
        (ENTRY_MARKER_REQUIRED, " _(required)_")
    } else {
        (ENTRY_MARKER, "")
    };
    format!("{}{}{}{}", checkbox(item.default), marker, item.prompt, suffix)
}

fn render_semver(selection: Option<SemverLevel>) -> String {
    let mut block = format!("\n{}\n", SEMVER_INTRO);
    for level in SemverLevel::ALL {
        block.push_str(&format!(
            "{}{} {}\n",
            checkbox(selection == Some(level)),
            SEMVER_MARKER,
            level.label()
        ));
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::Role;
    use crate::SemverConfig;

    fn item(prompt: &str, default: bool, required: bool) -> ChecklistItem {
        ChecklistItem {
            prompt: prompt.to_string(),
            default,
            required,
        }
    }

    fn config(semver_enabled: bool) -> ChecklistConfig {
        ChecklistConfig {
            preamble: "Please confirm:".to_string(),
            items: vec![
                item(" Tests pass", false, true),
                item(" Changelog updated", true, false),
                item(" Docs updated", false, false),
            ],
            semver: SemverConfig {
                enabled: semver_enabled,
                required: semver_enabled,
                autodetect: false,
            },
        }
    }

    #[test]
    fn test_build_single_required_item() {
        let config = ChecklistConfig {
            preamble: "P".to_string(),
            items: vec![item(" Do X", false, true)],
            semver: SemverConfig::default(),
        };

        let body = build("Old text", &config);
        assert_eq!(
            body,
            "Old text\n<!-- maintainerd: DO NOT REMOVE -->\n\n-----\n\nP\n\
             - [ ] <!-- checklist item; required --> Do X _(required)_\n\n"
        );
    }

    #[test]
    fn test_build_line_counts_and_checkboxes() {
        let body = build("Description", &config(true));
        let parsed = ParsedBody::parse(&body);

        let items: Vec<_> = parsed.entries().iter().filter(|e| e.role.is_item()).collect();
        let semver: Vec<_> = parsed
            .entries()
            .iter()
            .filter(|e| e.role == Role::Semver)
            .collect();

        assert_eq!(items.len(), 3);
        assert_eq!(semver.len(), 4);
        assert!(!items[0].is_checked());
        assert!(items[1].is_checked());
        assert!(!items[2].is_checked());
        assert!(semver.iter().all(|e| !e.is_checked()));

        assert!(body.contains("- [x] <!-- checklist item --> Changelog updated\n"));
        assert!(body.contains("- [ ] <!-- semver --> documentation only\n"));
    }

    #[test]
    fn test_build_without_semver() {
        let body = build("Description", &config(false));
        assert!(!body.contains(SEMVER_MARKER));
        assert!(!body.contains("semantic version"));
    }

    #[test]
    fn test_build_replaces_previous_checklist() {
        let first = build("  Author text  \n", &config(true));
        let second = build(&first, &config(false));

        assert_eq!(ParsedBody::parse(&second).free_text(), "Author text");
        assert!(second.starts_with("Author text\n"));
        assert_eq!(second.matches(SEPARATOR).count(), 1);
        assert!(!second.contains(SEMVER_MARKER));
    }

    #[test]
    fn test_build_is_idempotent() {
        let once = build("Author text", &config(true));
        let twice = build(&once, &config(true));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_build_drops_content_after_separator() {
        let body = format!("Intro\n{}\nstale checklist\n", SEPARATOR);
        let rebuilt = build(&body, &config(false));
        assert!(!rebuilt.contains("stale checklist"));
    }

    #[test]
    fn test_build_with_selection() {
        let body = build_with_selection("", &config(true), Some(SemverLevel::Patch));
        let parsed = ParsedBody::parse(&body);
        let selected: Vec<_> = parsed.selected_semver().collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].semver_level(), Some(SemverLevel::Patch));
        assert!(body.starts_with('\n'));
    }

    #[test]
    fn test_selection_ignored_when_semver_disabled() {
        let body = build_with_selection("x", &config(false), Some(SemverLevel::Major));
        assert_eq!(body, build("x", &config(false)));
    }
}
