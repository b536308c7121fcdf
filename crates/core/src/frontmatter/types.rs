//! Frontmatter types and data structures.

use std::collections::HashMap;

use serde_yaml::{Mapping, Value};

/// Decoded YAML frontmatter of a single document.
///
/// The block is immutable once extracted. Besides the decoded mapping it keeps
/// the 1-based document line of every top-level key, so findings about a field
/// can point back at the source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataBlock {
    fields: Mapping,
    key_lines: HashMap<String, usize>,
}

impl MetadataBlock {
    /// Build a block from an already decoded mapping, without line information.
    pub fn from_mapping(fields: Mapping) -> Self {
        Self { fields, key_lines: HashMap::new() }
    }

    pub(crate) fn with_lines(fields: Mapping, key_lines: HashMap<String, usize>) -> Self {
        Self { fields, key_lines }
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Document line (1-based, opening marker is line 1) of a top-level key.
    pub fn line_of(&self, key: &str) -> Option<usize> {
        self.key_lines.get(key).copied()
    }

    /// The underlying decoded mapping.
    pub fn fields(&self) -> &Mapping {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Mapping> for MetadataBlock {
    fn from(fields: Mapping) -> Self {
        Self::from_mapping(fields)
    }
}
