//! Schema walk over a decoded frontmatter block.

use serde_yaml::{Mapping, Value};
use tracing::trace;

use super::finding::{Severity, ValidationResult};
use crate::frontmatter::MetadataBlock;
use crate::schema::{DocumentCategory, FieldRule, Schema, SectionRule, SectionShape, value_kind};

/// Validates metadata blocks against a [`Schema`].
///
/// Holds nothing but a shared reference to the schema, so one validator can be
/// used from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'s> {
    schema: &'s Schema,
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new(Schema::global())
    }
}

impl<'s> Validator<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// Validate a block for the document at `path_hint`.
    ///
    /// Findings come out in a fixed order: core fields, then advanced
    /// sections, then optional top-level fields, each in declaration order.
    pub fn validate(&self, block: &MetadataBlock, path_hint: &str) -> ValidationResult {
        let category = DocumentCategory::infer(path_hint);
        let mut result = ValidationResult::new(path_hint, category);

        trace!(path = path_hint, %category, "checking core fields");
        for rule in &self.schema.core_fields {
            check_field(&mut result, rule, block.get(rule.name), rule.name, block.line_of(rule.name));
        }

        trace!(path = path_hint, "checking advanced sections");
        for section in &self.schema.sections {
            self.check_section(&mut result, section, block, category);
        }

        for rule in &self.schema.optional_fields {
            check_field(&mut result, rule, block.get(rule.name), rule.name, block.line_of(rule.name));
        }

        result
    }

    fn check_section(
        &self,
        result: &mut ValidationResult,
        section: &SectionRule,
        block: &MetadataBlock,
        category: DocumentCategory,
    ) {
        let name = section.name;
        let line = block.line_of(name);

        let Some(value) = block.get(name) else {
            if self.schema.is_section_required(name, category) {
                result.push(Severity::Error, name, format!("required section missing: {name}"), None);
            } else {
                result.push(Severity::Info, name, format!("optional section absent: {name}"), None);
            }
            return;
        };

        match &section.shape {
            SectionShape::List => {
                if !value.is_sequence() {
                    wrong_type(result, Severity::Error, name, "list", value, line);
                }
            }
            SectionShape::Mapping(fields) => match value.as_mapping() {
                Some(map) => check_mapping(result, fields, map, name, line),
                None => wrong_type(result, Severity::Error, name, "mapping", value, line),
            },
            SectionShape::ListOf(item_fields) => {
                let Some(items) = value.as_sequence() else {
                    wrong_type(result, Severity::Error, name, "list", value, line);
                    return;
                };
                for (i, item) in items.iter().enumerate() {
                    let item_path = format!("{name}[{i}]");
                    match item.as_mapping() {
                        Some(map) => check_mapping(result, item_fields, map, &item_path, line),
                        None => wrong_type(result, Severity::Error, &item_path, "mapping", item, line),
                    }
                }
            }
        }
    }
}

/// Validate a block with the standard schema.
pub fn validate(block: &MetadataBlock, path_hint: &str) -> ValidationResult {
    Validator::default().validate(block, path_hint)
}

fn check_mapping(
    result: &mut ValidationResult,
    rules: &[FieldRule],
    map: &Mapping,
    prefix: &str,
    line: Option<usize>,
) {
    for rule in rules {
        let path = format!("{prefix}.{}", rule.name);
        check_field(result, rule, map.get(rule.name), &path, line);
    }
}

/// Presence, kind and constraint checks for one field.
///
/// Missing required fields and kind mismatches on required fields are
/// errors; a kind mismatch on an optional field is a warning. Constraint
/// violations use the constraint's own severity.
fn check_field(
    result: &mut ValidationResult,
    rule: &FieldRule,
    value: Option<&Value>,
    path: &str,
    line: Option<usize>,
) {
    let Some(value) = value else {
        if rule.required {
            result.push(Severity::Error, path, format!("required field missing: {path}"), None);
        }
        return;
    };

    if !rule.kind.matches(value) {
        let severity = if rule.required { Severity::Error } else { Severity::Warning };
        wrong_type(result, severity, path, rule.kind.as_str(), value, line);
        return;
    }

    if let Some(constraint) = &rule.constraint
        && let Some(message) = constraint.check(value)
    {
        result.push(constraint.severity(), path, message, line);
    }
}

fn wrong_type(
    result: &mut ValidationResult,
    severity: Severity,
    path: &str,
    expected: &str,
    value: &Value,
    line: Option<usize>,
) {
    result.push(
        severity,
        path,
        format!("wrong type: expected {expected}, got {}", value_kind(value)),
        line,
    );
}
