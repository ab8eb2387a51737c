//! Resource file parsers.
//!
//! - `json`: flat JSON resource files, one per class and locale

pub mod json;
