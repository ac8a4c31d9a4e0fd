//! Command implementations
//!
//! - `compare`: Renders a comparison side by side or as JSON

pub mod compare;
