//! Side-by-side comparison of two submissions
//!
//! - `source`: Line splitting and the template line set
//! - `row`: Rows, cells, row kinds, filters and summaries
//! - `classifier`: Turns an edit script into classified rows
//! - `engine`: The full pipeline from raw texts to rows
//! - `session`: Background recomputation that only delivers the newest result
//!
//! Every comparison is recomputed from scratch; nothing is cached between calls.

pub mod classifier;
pub mod engine;
pub mod row;
pub mod session;
pub mod source;
