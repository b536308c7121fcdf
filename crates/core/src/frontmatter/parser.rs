//! Frontmatter extraction from markdown documents.

use std::collections::HashMap;

use serde_yaml::Value;
use thiserror::Error;

use super::types::MetadataBlock;
use crate::schema::value_kind;

/// Delimiter line that opens and closes a frontmatter block.
pub const MARKER: &str = "---";

/// Reasons a document's frontmatter could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("missing opening '---' on the first line")]
    NoOpeningMarker,

    #[error("missing closing '---'")]
    NoClosingMarker,

    #[error("invalid YAML: {detail}")]
    Decode { detail: String, line: Option<usize> },

    #[error("frontmatter is not a mapping (decoded to {found})")]
    NotAMapping { found: &'static str },
}

impl ExtractionError {
    /// Stable machine-readable reason.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NoOpeningMarker => "no-opening-marker",
            Self::NoClosingMarker => "no-closing-marker",
            Self::Decode { .. } => "decode-error",
            Self::NotAMapping { .. } => "not-a-mapping",
        }
    }

    /// Document line the failure refers to, when known.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::NoOpeningMarker => Some(1),
            Self::Decode { line, .. } => *line,
            _ => None,
        }
    }

    /// Whether the document has no frontmatter block at all, as opposed to a
    /// block that exists but cannot be used.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::NoOpeningMarker | Self::NoClosingMarker)
    }
}

/// Extract and decode the frontmatter block of a document.
///
/// The first line must be `---` and a later line must be `---` as well:
/// ```markdown
/// ---
/// title: Billing rules
/// ---
/// # Document content
/// ```
/// Surrounding whitespace on the marker lines is ignored.
pub fn extract(text: &str) -> Result<MetadataBlock, ExtractionError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split('\n');

    match lines.next() {
        Some(first) if first.trim() == MARKER => {}
        _ => return Err(ExtractionError::NoOpeningMarker),
    }

    let mut yaml_lines = Vec::new();
    let mut closed = false;
    for line in lines {
        if line.trim() == MARKER {
            closed = true;
            break;
        }
        yaml_lines.push(line.trim_end_matches('\r'));
    }

    if !closed {
        return Err(ExtractionError::NoClosingMarker);
    }

    let yaml = yaml_lines.join("\n");
    if yaml.trim().is_empty() {
        return Err(ExtractionError::NotAMapping { found: "null" });
    }

    let value: Value = serde_yaml::from_str(&yaml).map_err(|e| ExtractionError::Decode {
        detail: e.to_string(),
        // Block line 1 is document line 2.
        line: e.location().map(|loc| loc.line() + 1),
    })?;

    match value {
        Value::Mapping(fields) => Ok(MetadataBlock::with_lines(fields, index_top_level_keys(&yaml_lines))),
        other => Err(ExtractionError::NotAMapping { found: value_kind(&other) }),
    }
}

/// Map each top-level key to the document line it appears on.
fn index_top_level_keys(yaml_lines: &[&str]) -> HashMap<String, usize> {
    let mut lines = HashMap::new();

    for (i, line) in yaml_lines.iter().enumerate() {
        if line.is_empty() || line.starts_with([' ', '\t', '#', '-']) {
            continue;
        }
        let Some(key) = top_level_key(line) else {
            continue;
        };
        if !key.is_empty() {
            lines.entry(key.to_string()).or_insert(i + 2);
        }
    }

    lines
}

/// Key of a `key: value` line. Quoted keys may contain `:`.
fn top_level_key(line: &str) -> Option<&str> {
    for quote in ['"', '\''] {
        if let Some(rest) = line.strip_prefix(quote) {
            let end = rest.find(quote)?;
            return rest[end + 1..].trim_start().starts_with(':').then(|| &rest[..end]);
        }
    }
    line.split_once(':').map(|(key, _)| key.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_simple_frontmatter() {
        let content = "---\ntitle: Hello\n---\n# Content";
        let block = extract(content).unwrap();
        assert_eq!(block.get("title").and_then(|v| v.as_str()), Some("Hello"));
        assert_eq!(block.line_of("title"), Some(2));
    }

    #[test]
    fn extract_nested_structures() {
        let content = "---\ntitle: Test\ncreated_date: 2024-01-15\ntags:\n  - rust\n  - cli\ngovernance:\n  access_level: internal\n---\n\nBody";
        let block = extract(content).unwrap();
        assert_eq!(block.len(), 4);
        // YAML 1.2: unquoted dates stay strings.
        assert_eq!(block.get("created_date").and_then(|v| v.as_str()), Some("2024-01-15"));
        assert!(block.get("tags").is_some_and(Value::is_sequence));
        assert!(block.get("governance").is_some_and(Value::is_mapping));
        assert_eq!(block.line_of("tags"), Some(4));
        assert_eq!(block.line_of("governance"), Some(7));
        assert_eq!(block.line_of("access_level"), None);
    }

    #[test]
    fn no_opening_marker() {
        let err = extract("# Hello\n\n---\ntitle: x\n---\n").unwrap_err();
        assert_eq!(err, ExtractionError::NoOpeningMarker);
        assert_eq!(err.reason(), "no-opening-marker");
        assert!(err.is_missing());
    }

    #[test]
    fn leading_blank_line_is_not_frontmatter() {
        let err = extract("\n---\ntitle: x\n---\n").unwrap_err();
        assert_eq!(err.reason(), "no-opening-marker");
    }

    #[test]
    fn no_closing_marker() {
        let err = extract("---\ntitle: Hello\n# Content\n").unwrap_err();
        assert_eq!(err, ExtractionError::NoClosingMarker);
        assert_eq!(err.reason(), "no-closing-marker");
    }

    #[test]
    fn crlf_line_endings() {
        let block = extract("---\r\ntitle: Hello\r\nowner: ops\r\n---\r\nBody").unwrap();
        assert_eq!(block.get("title").and_then(|v| v.as_str()), Some("Hello"));
        assert_eq!(block.get("owner").and_then(|v| v.as_str()), Some("ops"));
    }

    #[test]
    fn decode_error_reports_line() {
        let err = extract("---\ntitle: ok\nbroken: [unclosed\n---\n").unwrap_err();
        assert_eq!(err.reason(), "decode-error");
        assert!(!err.is_missing());
        assert!(matches!(err, ExtractionError::Decode { .. }));
    }

    #[test]
    fn scalar_is_not_a_mapping() {
        let err = extract("---\njust a string\n---\n").unwrap_err();
        assert_eq!(err, ExtractionError::NotAMapping { found: "string" });
        assert_eq!(err.reason(), "not-a-mapping");
    }

    #[test]
    fn sequence_is_not_a_mapping() {
        let err = extract("---\n- a\n- b\n---\n").unwrap_err();
        assert_eq!(err, ExtractionError::NotAMapping { found: "list" });
    }

    #[test]
    fn empty_block_is_not_a_mapping() {
        let err = extract("---\n---\n# Content").unwrap_err();
        assert_eq!(err.reason(), "not-a-mapping");
    }

    #[test]
    fn extraction_is_pure() {
        let content = "---\ntitle: Same\nsystems: [a, b]\n---\n";
        assert_eq!(extract(content), extract(content));
    }

    #[test]
    fn quoted_keys_are_indexed() {
        let block = extract("---\n\"title\": Quoted\n'owner': ops\n---\n").unwrap();
        assert_eq!(block.line_of("title"), Some(2));
        assert_eq!(block.line_of("owner"), Some(3));
    }

    #[test]
    fn quoted_key_with_colon_is_indexed_whole() {
        let block = extract("---\ntitle: T\n\"a:b\": 1\n---\n").unwrap();
        assert_eq!(block.line_of("a:b"), Some(3));
        assert_eq!(block.line_of("a"), None);
        assert_eq!(block.line_of("title"), Some(2));
    }
}
