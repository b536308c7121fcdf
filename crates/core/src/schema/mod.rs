//! Declarative frontmatter schema.
//!
//! The schema is data, not code: core fields, optional fields and advanced
//! sections are tables of [`FieldRule`]s and [`SectionRule`]s that a single
//! routine in [`crate::validation`] walks. Which sections are mandatory is a
//! lookup on ([`DocumentCategory`], section name).

pub mod catalog;
pub mod category;
pub mod enums;
pub mod types;

pub use catalog::Schema;
pub use category::{DocumentCategory, Requirement, RequirementTable};
pub use enums::AllowList;
pub use types::{
    Constraint, FieldKind, FieldRule, SectionRule, SectionShape, is_valid_confidence,
    is_valid_date, is_valid_version, value_kind,
};
