//! Core resolution and discovery engine.
//!
//! - [`store`]: culture-aware template storage
//! - [`replacement`]: named-token replacement strategies
//! - [`template`]: named and positional substitution passes
//! - [`resolver`]: store lookup plus substitution
//! - [`registry`]: explicit registry of generated accessor classes
//! - [`discovery`]: namespace/class filtering over the registry
//! - [`parsers`]: resource file loading

pub mod data;
pub mod discovery;
pub mod parsers;
pub mod registry;
pub mod replacement;
pub mod resolver;
pub mod store;
pub mod template;

pub use data::*;
pub use discovery::{FilterExpression, class_dictionary, discover_by_namespace, discover_with};
pub use registry::{Accessor, AccessorFn, LocalizedClass, LocalizedProperty, Registry};
pub use replacement::{FnReplacement, Identity, Replacement, ReplacementStrategy, TableReplacement};
pub use resolver::Resolver;
pub use store::{MemoryStore, NEUTRAL_LOCALE, ResourceStore, locale_chain, normalize_locale};
pub use template::{
    format_positional, is_token_name, pad_arguments, positional_token_count, substitute_named,
    undefined_argument,
};
