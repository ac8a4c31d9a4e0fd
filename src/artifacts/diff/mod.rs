//! Diff algorithms
//!
//! - `diff_algorithm`: Myers' diff, used for both lines and words
//! - `token_diff`: Word-level diff of two lines that share a row
//!
//! Both operate on raw text only; anything code-aware lives in `normalize`.

pub mod diff_algorithm;
pub mod token_diff;
