//! Minimal INI reader for `tuckr.conf`.
//!
//! The format is deliberately small: `[SECTION]` headers followed by
//! `key = value` lines. Section names keep their case because they are
//! fixed identifiers (`GENERAL`, `PACKAGES`, `SCRIPTS`); keys are folded to
//! lowercase. Entry order within a section is preserved; it is the
//! execution order of the `[SCRIPTS]` section.

use crate::error::ConfigError;

/// A named group of key-value pairs, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    /// The section header as written in the file.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All key-value pairs, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Look up a key. Keys are stored lowercased, so lookups use lowercase
    /// names. An empty value yields `Some("")`, distinct from a missing key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Insert a pair. A duplicate key takes the new value but keeps its
    /// original position, so later lines win without reordering iteration.
    fn insert(&mut self, key: String, value: String) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }
}

/// Parse INI content into sections.
///
/// Blank lines and full-line comments (`#` or `;`) are skipped. A repeated
/// section header continues the earlier section rather than starting a new
/// one.
///
/// # Errors
///
/// Returns [`ConfigError::Syntax`] for an entry outside any section or a
/// line that is neither a header nor a `key = value` pair.
pub fn parse(content: &str) -> Result<Vec<Section>, ConfigError> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<usize> = None;

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if let Some(header) = parse_header(trimmed) {
            let idx = match sections.iter().position(|s| s.name == header) {
                Some(idx) => idx,
                None => {
                    sections.push(Section::new(header));
                    sections.len() - 1
                }
            };
            current = Some(idx);
        } else if let Some((key, value)) = parse_entry(trimmed) {
            let Some(idx) = current else {
                return Err(ConfigError::Syntax {
                    line: line_num + 1,
                    message: format!("entry outside of section: {trimmed}"),
                });
            };
            if let Some(section) = sections.get_mut(idx) {
                section.insert(key, value);
            }
        } else {
            return Err(ConfigError::Syntax {
                line: line_num + 1,
                message: format!("expected `key = value`: {trimmed}"),
            });
        }
    }

    Ok(sections)
}

/// Parse a `[header]` line, preserving the header's case.
fn parse_header(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    if inner.is_empty() { None } else { Some(inner) }
}

/// Parse a `key = value` line into a lowercased key and trimmed value.
fn parse_entry(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_lowercase(), value.trim().to_string()))
}
