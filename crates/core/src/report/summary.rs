use std::collections::BTreeMap;

use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;

use crate::validation::{Severity, ValidationResult};

/// Aggregated results for a document set.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    generated: String,
    summary: ReportSummary,
    files: Vec<ValidationResult>,
}

/// Totals across all documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total_files: usize,
    pub compliant_files: usize,
    pub non_compliant_files: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
    pub total_info: usize,
}

impl ReportSummary {
    fn from_results(results: &[ValidationResult]) -> Self {
        let mut summary = Self { total_files: results.len(), ..Default::default() };
        for result in results {
            if result.is_compliant() {
                summary.compliant_files += 1;
            } else {
                summary.non_compliant_files += 1;
            }
            summary.total_errors += result.count(Severity::Error);
            summary.total_warnings += result.count(Severity::Warning);
            summary.total_info += result.count(Severity::Info);
        }
        summary
    }

    /// Percentage of compliant files, `None` for an empty set.
    pub fn compliance_rate(&self) -> Option<f64> {
        (self.total_files > 0)
            .then(|| self.compliant_files as f64 / self.total_files as f64 * 100.0)
    }
}

/// Compliance counts for one document category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub total: usize,
    pub compliant: usize,
}

impl CategoryCount {
    pub fn rate(&self) -> f64 {
        if self.total == 0 { 0.0 } else { self.compliant as f64 / self.total as f64 * 100.0 }
    }
}

/// How a run should end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No errors (and, in strict mode, no warnings).
    Success,
    /// At least one error finding.
    Errors,
    /// Strict mode and at least one warning, but no errors.
    StrictWarnings,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Errors => 1,
            Self::StrictWarnings => 2,
        }
    }
}

impl Report {
    /// Build a report stamped with the current local time.
    pub fn new(results: Vec<ValidationResult>) -> Self {
        Self::generated_at(results, Local::now())
    }

    pub fn generated_at(results: Vec<ValidationResult>, at: DateTime<Local>) -> Self {
        Self {
            generated: at.to_rfc3339_opts(SecondsFormat::Secs, false),
            summary: ReportSummary::from_results(&results),
            files: results,
        }
    }

    /// RFC 3339 generation timestamp.
    pub fn generated(&self) -> &str {
        &self.generated
    }

    pub fn summary(&self) -> &ReportSummary {
        &self.summary
    }

    /// Results in the order they were supplied.
    pub fn files(&self) -> &[ValidationResult] {
        &self.files
    }

    pub fn compliant(&self) -> impl Iterator<Item = &ValidationResult> {
        self.files.iter().filter(|r| r.is_compliant())
    }

    pub fn non_compliant(&self) -> impl Iterator<Item = &ValidationResult> {
        self.files.iter().filter(|r| !r.is_compliant())
    }

    /// Per-category counts, keyed and ordered by category name.
    pub fn by_category(&self) -> BTreeMap<&'static str, CategoryCount> {
        let mut counts: BTreeMap<&'static str, CategoryCount> = BTreeMap::new();
        for result in &self.files {
            let entry = counts.entry(result.category().as_str()).or_default();
            entry.total += 1;
            if result.is_compliant() {
                entry.compliant += 1;
            }
        }
        counts
    }

    /// Decide the outcome; `strict` promotes warnings to a failure.
    pub fn outcome(&self, strict: bool) -> Outcome {
        if self.summary.total_errors > 0 {
            Outcome::Errors
        } else if strict && self.summary.total_warnings > 0 {
            Outcome::StrictWarnings
        } else {
            Outcome::Success
        }
    }
}
