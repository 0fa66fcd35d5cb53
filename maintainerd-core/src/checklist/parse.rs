//! Parsing a pull request body into its checklist entries

use crate::{Error, Result};

use super::{SemverLevel, ENTRY_MARKER, ENTRY_MARKER_REQUIRED, SEMVER_MARKER, SEPARATOR};

/// What a checklist line stands for, taken from its marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Optional checklist item
    Item,
    /// Checklist item that blocks completion while unchecked
    RequiredItem,
    /// Semantic version option
    Semver,
}

impl Role {
    /// Marker string identifying this role
    pub fn marker(self) -> &'static str {
        match self {
            Role::Item => ENTRY_MARKER,
            Role::RequiredItem => ENTRY_MARKER_REQUIRED,
            Role::Semver => SEMVER_MARKER,
        }
    }

    /// Whether this role is a checklist item rather than a semver option
    pub fn is_item(self) -> bool {
        matches!(self, Role::Item | Role::RequiredItem)
    }
}

/// State of the checkbox in front of a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkbox {
    /// `- [x]` or `- [X]`
    Checked,
    /// `- [ ]`
    Unchecked,
    /// Anything else, including no checkbox at all
    Malformed,
}

impl Checkbox {
    /// Classify the text in front of a marker
    pub fn parse(prefix: &str) -> Self {
        match prefix.trim() {
            "- [x]" | "- [X]" => Checkbox::Checked,
            "- [ ]" => Checkbox::Unchecked,
            _ => Checkbox::Malformed,
        }
    }
}

/// A marked line in the autogenerated region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistEntry {
    /// Role from the line's marker
    pub role: Role,
    /// Checkbox in front of the marker
    pub checkbox: Checkbox,
    /// Text after the marker, trimmed
    pub description: String,
}

impl ChecklistEntry {
    /// Parse a single line, returning `None` if it carries no marker
    pub fn parse_line(line: &str) -> Option<Self> {
        let (role, checkbox, description) = [Role::Item, Role::RequiredItem, Role::Semver]
            .into_iter()
            .find_map(|role| {
                line.split_once(role.marker())
                    .map(|(checkbox, description)| (role, checkbox, description))
            })?;

        Some(Self {
            role,
            checkbox: Checkbox::parse(checkbox),
            description: description.trim().to_string(),
        })
    }

    /// Only a well-formed `- [x]` box counts as checked
    pub fn is_checked(&self) -> bool {
        self.checkbox == Checkbox::Checked
    }

    /// Semver level named by this entry, if it is a semver option
    pub fn semver_level(&self) -> Option<SemverLevel> {
        match self.role {
            Role::Semver => SemverLevel::from_label(&self.description),
            _ => None,
        }
    }
}

/// A pull request body split at the separator, with its entries parsed
#[derive(Debug, Clone)]
pub struct ParsedBody<'a> {
    free_text: &'a str,
    autogenerated: Option<&'a str>,
    entries: Vec<ChecklistEntry>,
}

impl<'a> ParsedBody<'a> {
    /// Parse a body; text after the first separator is the autogenerated region
    pub fn parse(body: &'a str) -> Self {
        let (free_text, autogenerated) = match body.split_once(SEPARATOR) {
            Some((free_text, rest)) => (free_text, Some(rest)),
            None => (body, None),
        };

        let entries: Vec<ChecklistEntry> = autogenerated
            .map(|region| region.lines().filter_map(ChecklistEntry::parse_line).collect())
            .unwrap_or_default();

        Self {
            free_text,
            autogenerated,
            entries,
        }
    }

    /// Parse a body that must contain the checklist
    pub fn parse_checklist(body: &'a str) -> Result<Self> {
        let parsed = Self::parse(body);
        if parsed.has_checklist() {
            Ok(parsed)
        } else {
            Err(Error::MissingSentinel)
        }
    }

    /// Author text before the separator, trimmed
    pub fn free_text(&self) -> &'a str {
        self.free_text.trim()
    }

    /// Everything after the first separator
    pub fn autogenerated(&self) -> Option<&'a str> {
        self.autogenerated
    }

    /// Whether the separator was found
    pub fn has_checklist(&self) -> bool {
        self.autogenerated.is_some()
    }

    /// Marked lines in document order
    pub fn entries(&self) -> &[ChecklistEntry] {
        &self.entries
    }

    /// Number of required items not checked; malformed boxes still count
    pub fn remaining_required(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.role == Role::RequiredItem && !e.is_checked())
            .count()
    }

    /// Semver options that are checked
    pub fn selected_semver(&self) -> impl Iterator<Item = &ChecklistEntry> {
        self.entries
            .iter()
            .filter(|e| e.role == Role::Semver && e.is_checked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_roles() {
        let item = ChecklistEntry::parse_line("- [ ] <!-- checklist item --> Do X").unwrap();
        assert_eq!(item.role, Role::Item);
        assert_eq!(item.checkbox, Checkbox::Unchecked);
        assert_eq!(item.description, "Do X");

        let required =
            ChecklistEntry::parse_line("- [x] <!-- checklist item; required --> Do Y _(required)_")
                .unwrap();
        assert_eq!(required.role, Role::RequiredItem);
        assert!(required.is_checked());
        assert_eq!(required.description, "Do Y _(required)_");

        let semver = ChecklistEntry::parse_line("- [X] <!-- semver --> minor").unwrap();
        assert_eq!(semver.role, Role::Semver);
        assert!(semver.is_checked());
        assert_eq!(semver.semver_level(), Some(SemverLevel::Minor));
    }

    #[test]
    fn test_checkbox_states() {
        assert_eq!(Checkbox::parse("- [x] "), Checkbox::Checked);
        assert_eq!(Checkbox::parse("  - [X] "), Checkbox::Checked);
        assert_eq!(Checkbox::parse("- [ ] "), Checkbox::Unchecked);
        assert_eq!(Checkbox::parse(""), Checkbox::Malformed);
        assert_eq!(Checkbox::parse("* [ ] "), Checkbox::Malformed);
        assert_eq!(Checkbox::parse("- [] "), Checkbox::Malformed);
        assert_eq!(Checkbox::parse("- [-] "), Checkbox::Malformed);
    }

    #[test]
    fn test_malformed_checkbox_is_not_checked() {
        let entry = ChecklistEntry::parse_line("<!-- semver --> major").unwrap();
        assert_eq!(entry.checkbox, Checkbox::Malformed);
        assert!(!entry.is_checked());
    }

    #[test]
    fn test_parse_line_without_marker() {
        assert!(ChecklistEntry::parse_line("- [ ] plain markdown task").is_none());
        assert!(ChecklistEntry::parse_line("").is_none());
    }

    #[test]
    fn test_item_entry_has_no_semver_level() {
        let entry = ChecklistEntry::parse_line("- [x] <!-- checklist item --> major").unwrap();
        assert_eq!(entry.semver_level(), None);
    }

    #[test]
    fn test_entries_only_come_from_autogenerated_region() {
        let body = format!(
            "- [ ] {} in free text\n{}\n- [ ] {} after\n",
            ENTRY_MARKER_REQUIRED, SEPARATOR, ENTRY_MARKER_REQUIRED
        );
        let parsed = ParsedBody::parse(&body);
        assert_eq!(parsed.entries().len(), 1);
        assert_eq!(parsed.entries()[0].description, "after");
        assert_eq!(parsed.remaining_required(), 1);
    }

    #[test]
    fn test_split_on_first_separator() {
        let body = format!("  intro \n{}\nfirst\n{}\nsecond", SEPARATOR, SEPARATOR);
        let parsed = ParsedBody::parse(&body);
        assert_eq!(parsed.free_text(), "intro");
        assert!(parsed.autogenerated().unwrap().contains("second"));
    }

    #[test]
    fn test_missing_separator() {
        let parsed = ParsedBody::parse("just text");
        assert!(!parsed.has_checklist());
        assert_eq!(parsed.free_text(), "just text");
        assert!(parsed.entries().is_empty());
        assert!(matches!(
            ParsedBody::parse_checklist("just text"),
            Err(Error::MissingSentinel)
        ));
    }
}
