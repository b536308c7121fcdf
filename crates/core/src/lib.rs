//! Frontmatter extraction and layered schema validation for markdown documentation.
//!
//! Per document, [`frontmatter::extract`] isolates and decodes the YAML block
//! and [`validation::Validator`] checks it against the static
//! [`schema::Schema`], producing a [`validation::ValidationResult`]. Both steps
//! are pure, so documents can be checked in parallel without coordination.
//! [`report::Report`] aggregates results; [`corpus`] and [`config`] are the
//! filesystem-facing collaborators used by the command-line tool.

pub mod config;
pub mod corpus;
pub mod frontmatter;
pub mod report;
pub mod schema;
pub mod validation;

pub use frontmatter::{ExtractionError, MetadataBlock, extract};
pub use validation::{Severity, ValidationFinding, ValidationResult, Validator, check_document, validate};
