//! Structural comparison of two source submissions.
//!
//! Aligns two texts line by line, tells cosmetic edits (renamed identifiers,
//! whitespace, comments) apart from substantive ones under a configurable
//! [`NormalizationPolicy`](artifacts::normalize::policy::NormalizationPolicy),
//! and adds word-level detail to partially matching lines.

pub mod artifacts;
pub mod commands;

pub use artifacts::compare::engine::{ComparisonInput, compare};
pub use artifacts::compare::row::{DiffCell, DiffRow, RowFilter, RowKind, RowSummary};
pub use artifacts::normalize::normalize;
pub use artifacts::normalize::policy::{NormalizationPolicy, SensitivityMode};
