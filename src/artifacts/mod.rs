//! Comparison data structures and algorithms
//!
//! - `compare`: Rows, cells, templates and the comparison pipeline
//! - `core`: Shared utilities (pager wrapper)
//! - `diff`: Myers' line alignment and word-level token diffs
//! - `normalize`: Normalization policies and canonical line keys

pub mod compare;
pub mod core;
pub mod diff;
pub mod normalize;
