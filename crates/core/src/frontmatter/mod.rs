//! Frontmatter extraction from markdown documents.
//!
//! This module provides functionality to:
//! - Locate the `---` delimited metadata block at the top of a document
//! - Decode it as YAML into a [`MetadataBlock`]
//! - Remember which document line each top-level key was written on

pub mod parser;
pub mod types;

pub use parser::{ExtractionError, MARKER, extract};
pub use types::MetadataBlock;
