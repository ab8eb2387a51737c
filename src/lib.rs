//! T4ResX - strongly-typed localized string resources
//!
//! Resolves per-culture resource templates, substitutes `{NAMED}` tokens
//! through a pluggable replacement strategy and `{0}` tokens from caller
//! arguments, and discovers localized classes by namespace.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Resolver, registry, discovery and resource loading
//! - `sample`: Accessor classes for the bundled resources

pub mod cli;
pub mod config;
pub mod core;
pub mod sample;
