//! Lexical codec for systemd unit files.
//!
//! A unit's text is read into an ordered list of [`UnitOption`] records and
//! written back in the same section and key order. Only the lexical shape is
//! checked: section headers, `key=value` assignments and trailing-backslash
//! continuation. Blank lines and comments are dropped on the way in.

use thiserror::Error;

/// One logical `key=value` line of a unit file.
///
/// A continued value keeps its continuation markers and the following
/// physical lines verbatim, so writing it back reproduces the original layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOption {
    pub section: String,
    pub name: String,
    pub value: String,
}

impl UnitOption {
    pub fn new(
        section: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self { section: section.into(), name: name.into(), value: value.into() }
    }
}

/// Lexical errors raised while reading unit content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitParseError {
    /// An assignment appeared before the first section header.
    #[error("line {line}: option '{content}' appears outside of any section")]
    OptionOutsideSection { line: usize, content: String },

    /// A section header is not of the form `[Name]`.
    #[error("line {line}: invalid section header '{content}'")]
    InvalidSectionHeader { line: usize, content: String },

    /// A line inside a section is neither a comment nor an assignment.
    #[error("line {line}: expected 'key=value', found '{content}'")]
    MissingAssignment { line: usize, content: String },

    /// An assignment has nothing before the `=`.
    #[error("line {line}: option has an empty name")]
    EmptyKey { line: usize },
}

const CONTINUATION: char = '\\';

/// Parse unit-file text into its ordered option list.
pub fn deserialize(content: &str) -> Result<Vec<UnitOption>, UnitParseError> {
    let mut options = Vec::new();
    let mut section: Option<String> = None;
    let mut lines = content.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let line_no = index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || is_comment(trimmed) {
            continue;
        }

        if trimmed.starts_with('[') {
            section = Some(parse_section_header(trimmed, line_no)?);
            continue;
        }

        let mut logical = line.to_string();
        while logical.ends_with(CONTINUATION) {
            // Comment lines inside a continued value are skipped, as systemd does.
            match lines.by_ref().find(|(_, next)| !is_comment(next.trim())) {
                Some((_, next)) if !next.trim().is_empty() => {
                    logical.push('\n');
                    logical.push_str(next);
                }
                // A blank line or the end of input ends the value.
                _ => break,
            }
        }

        let Some(current) = section.as_deref() else {
            return Err(UnitParseError::OptionOutsideSection {
                line: line_no,
                content: trimmed.to_string(),
            });
        };

        let (key, value) = logical.split_once('=').ok_or_else(|| {
            UnitParseError::MissingAssignment { line: line_no, content: trimmed.to_string() }
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(UnitParseError::EmptyKey { line: line_no });
        }

        options.push(UnitOption::new(current, key, terminated(value.trim())));
    }

    Ok(options)
}

/// Write an option list back to unit-file text.
///
/// Sections are emitted in first-seen order, each followed by its options in
/// their original relative order. Sections are separated by one blank line.
/// A dangling `\` at the end of a value is dropped so it cannot continue into
/// the next line.
pub fn serialize(options: &[UnitOption]) -> String {
    let mut sections: Vec<&str> = Vec::new();
    for option in options {
        if !sections.contains(&option.section.as_str()) {
            sections.push(&option.section);
        }
    }

    let mut out = String::new();
    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("[{}]\n", section));
        for option in options.iter().filter(|option| option.section == *section) {
            out.push_str(&format!("{}={}\n", option.name, terminated(&option.value)));
        }
    }
    out
}

/// Find the first option with the given section and name.
pub fn option_with_section_and_name_mut<'a>(
    options: &'a mut [UnitOption],
    section: &str,
    name: &str,
) -> Option<&'a mut UnitOption> {
    options.iter_mut().find(|option| option.section == section && option.name == name)
}

/// Strip continuation markers left at the end of a value.
fn terminated(value: &str) -> &str {
    let mut value = value;
    while let Some(rest) = value.strip_suffix(CONTINUATION) {
        value = rest.trim_end();
    }
    value
}

fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with('#') || trimmed.starts_with(';')
}

fn parse_section_header(trimmed: &str, line: usize) -> Result<String, UnitParseError> {
    let invalid =
        || UnitParseError::InvalidSectionHeader { line, content: trimmed.to_string() };

    let name = trimmed.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')).ok_or_else(invalid)?;
    if name.is_empty() || name.contains(['[', ']']) {
        return Err(invalid());
    }
    Ok(name.to_string())
}
