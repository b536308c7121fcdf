//! Aggregation of per-document results into a report.
//!
//! Rendering is left to callers; this module only counts and groups.

mod summary;

pub use summary::{CategoryCount, Outcome, Report, ReportSummary};
