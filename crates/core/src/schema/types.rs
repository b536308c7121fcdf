//! Field and section rule definitions.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_yaml::Value;

use super::enums::AllowList;
use crate::validation::Severity;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+(\.[0-9]+)?$").unwrap());

/// Kind of value a field is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// String value.
    String,
    /// Integer or float. Booleans never count as numbers.
    Number,
    /// Sequence of values.
    List,
    /// Nested mapping.
    Mapping,
}

impl FieldKind {
    /// Get the display name for this field kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::List => "list",
            Self::Mapping => "mapping",
        }
    }

    /// Whether a decoded value has this kind.
    pub fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::String, Value::String(_))
                | (Self::Number, Value::Number(_))
                | (Self::List, Value::Sequence(_))
                | (Self::Mapping, Value::Mapping(_))
        )
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Human-readable kind of an arbitrary decoded value.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Constraint on the value of a type-correct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// `YYYY-MM-DD` that is also a real calendar date.
    Date,
    /// `X.Y` or `X.Y.Z`.
    Version,
    /// Number in the closed range `[0.0, 1.0]`.
    Confidence,
    /// Membership in a fixed set of strings.
    OneOf(&'static AllowList),
}

impl Constraint {
    /// Severity of a violation: closed-set misses warn, shape violations fail.
    pub fn severity(&self) -> Severity {
        match self {
            Self::OneOf(_) => Severity::Warning,
            Self::Date | Self::Version | Self::Confidence => Severity::Error,
        }
    }

    /// Check a value, returning the violation message if it fails.
    pub fn check(&self, value: &Value) -> Option<String> {
        match self {
            Self::Date => {
                let s = value.as_str().unwrap_or_default();
                (!is_valid_date(s))
                    .then(|| format!("invalid date format: expected YYYY-MM-DD, got '{s}'"))
            }
            Self::Version => {
                let s = value.as_str().unwrap_or_default();
                (!is_valid_version(s))
                    .then(|| format!("invalid version format: expected X.Y or X.Y.Z, got '{s}'"))
            }
            Self::Confidence => match value.as_f64() {
                Some(score) if is_valid_confidence(score) => None,
                _ => Some(format!(
                    "confidence score out of range [0.0, 1.0]: {}",
                    display_value(value)
                )),
            },
            Self::OneOf(list) => {
                let s = value.as_str().unwrap_or_default();
                (!list.contains(s)).then(|| {
                    format!("non-standard value '{s}'; allowed: {}", list.sorted().join(", "))
                })
            }
        }
    }
}

/// Check if a string is a valid `YYYY-MM-DD` calendar date.
pub fn is_valid_date(s: &str) -> bool {
    DATE_RE.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Check if a string is an `X.Y` or `X.Y.Z` version.
pub fn is_valid_version(s: &str) -> bool {
    VERSION_RE.is_match(s)
}

pub fn is_valid_confidence(score: f64) -> bool {
    (0.0..=1.0).contains(&score)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{s}'"),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => value_kind(other).to_string(),
    }
}

/// Schema for a single field, either top-level or inside a section.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub constraint: Option<Constraint>,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: true, constraint: None }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: false, constraint: None }
    }

    /// Attach a value constraint.
    pub const fn with(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }
}

/// Shape of an advanced section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionShape {
    /// Plain list; items are not inspected.
    List,
    /// Nested mapping with its own field rules.
    Mapping(Vec<FieldRule>),
    /// List whose items are mappings with fixed fields.
    ListOf(Vec<FieldRule>),
}

/// Schema for one named advanced section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRule {
    pub name: &'static str,
    pub shape: SectionShape,
}

impl SectionRule {
    pub fn list(name: &'static str) -> Self {
        Self { name, shape: SectionShape::List }
    }

    pub fn mapping(name: &'static str, fields: Vec<FieldRule>) -> Self {
        Self { name, shape: SectionShape::Mapping(fields) }
    }

    pub fn list_of(name: &'static str, item_fields: Vec<FieldRule>) -> Self {
        Self { name, shape: SectionShape::ListOf(item_fields) }
    }
}
