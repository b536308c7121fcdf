//! Frontmatter validation.
//!
//! [`Validator::validate`] walks a [`Schema`](crate::schema::Schema) over one
//! decoded block and never fails: every discrepancy becomes a
//! [`ValidationFinding`]. [`check_document`] runs extraction first and turns
//! an extraction failure into a single document-level error.

pub mod finding;
pub mod validator;

pub use finding::{Severity, ValidationFinding, ValidationResult};
pub use validator::{Validator, validate};

use tracing::debug;

use crate::frontmatter::extract;

/// Extract and validate one document with the standard schema.
pub fn check_document(text: &str, path_hint: &str) -> ValidationResult {
    Validator::default().check_document(text, path_hint)
}

impl Validator<'_> {
    /// Extract the frontmatter of `text` and validate it.
    pub fn check_document(&self, text: &str, path_hint: &str) -> ValidationResult {
        let result = match extract(text) {
            Ok(block) => self.validate(&block, path_hint),
            Err(e) => {
                debug!(path = path_hint, reason = e.reason(), "frontmatter extraction failed");
                ValidationResult::extraction_failure(path_hint, &e)
            }
        };

        debug!(
            path = path_hint,
            category = %result.category(),
            compliant = result.is_compliant(),
            findings = result.findings().len(),
            "validated document"
        );
        result
    }
}
