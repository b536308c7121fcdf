//! Findings and per-document validation results.

use serde::Serialize;

use crate::frontmatter::ExtractionError;
use crate::schema::DocumentCategory;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Must fix; makes the document non-compliant.
    Error,
    /// Should fix; the document stays compliant.
    Warning,
    /// Advisory only.
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One reported discrepancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFinding {
    #[serde(rename = "level")]
    pub severity: Severity,
    /// Dotted field path, e.g. `governance.access_level` or `relationships[0].target`.
    pub field: String,
    pub message: String,
    /// 1-based document line, when known.
    #[serde(rename = "line_number")]
    pub line: Option<usize>,
}

impl std::fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}: {} (line {}) - {}", self.severity, self.field, line, self.message),
            None => write!(f, "{}: {} - {}", self.severity, self.field, self.message),
        }
    }
}

/// Outcome of validating one document.
///
/// Findings can only be appended, and every append keeps `compliant` equal to
/// "no finding has error severity".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    path: String,
    compliant: bool,
    #[serde(rename = "document_type")]
    category: DocumentCategory,
    #[serde(rename = "issues")]
    findings: Vec<ValidationFinding>,
}

impl ValidationResult {
    /// Create an empty, compliant result.
    pub fn new(path: impl Into<String>, category: DocumentCategory) -> Self {
        Self { path: path.into(), compliant: true, category, findings: Vec::new() }
    }

    /// Create a result for a document whose frontmatter could not be extracted.
    pub fn extraction_failure(path: impl Into<String>, error: &ExtractionError) -> Self {
        let path = path.into();
        let category = DocumentCategory::infer(&path);
        let message = if error.is_missing() {
            format!("no frontmatter: {error}")
        } else {
            format!("malformed frontmatter: {error}")
        };

        let mut result = Self::new(path, category);
        result.push(Severity::Error, "frontmatter", message, error.line());
        result
    }

    /// Create a result for a document that could not be read at all.
    pub fn unreadable(path: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        let path = path.into();
        let category = DocumentCategory::infer(&path);
        let mut result = Self::new(path, category);
        result.push(Severity::Error, "file", format!("error reading file: {reason}"), None);
        result
    }

    /// Append a finding.
    pub fn push(
        &mut self,
        severity: Severity,
        field: impl Into<String>,
        message: impl Into<String>,
        line: Option<usize>,
    ) {
        if severity == Severity::Error {
            self.compliant = false;
        }
        self.findings.push(ValidationFinding {
            severity,
            field: field.into(),
            message: message.into(),
            line,
        });
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// True iff no finding has error severity.
    pub fn is_compliant(&self) -> bool {
        self.compliant
    }

    pub fn category(&self) -> DocumentCategory {
        self.category
    }

    /// Findings in discovery order.
    pub fn findings(&self) -> &[ValidationFinding] {
        &self.findings
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity == severity).count()
    }

    pub fn has_warnings(&self) -> bool {
        self.count(Severity::Warning) > 0
    }
}
