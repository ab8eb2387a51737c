//! Template resolution: store lookup followed by the named and positional
//! substitution passes.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing resource | No culture provides the key | Returns `None` |
//! | Empty resource | Template is `""` | Returns `Some("")`, no token processing |
//! | Too few arguments | Fewer args than `{digit}` matches | Padded with "argument {i} is undefined" |
//! | No positional tokens | Args supplied, nothing to format | Args ignored |

use std::{fmt::Display, sync::Arc};

use super::{
    data::ResourceKey,
    replacement::ReplacementStrategy,
    store::ResourceStore,
    template::{format_positional, pad_arguments, positional_token_count, substitute_named},
};

/// Resolves resource keys to final strings for an explicit locale.
#[derive(Clone)]
pub struct Resolver {
    store: Arc<dyn ResourceStore>,
    replacement: ReplacementStrategy,
}

impl Resolver {
    /// Create a resolver bound to the identity replacement.
    pub fn new(store: impl ResourceStore + 'static) -> Self {
        Self::from_shared(Arc::new(store))
    }

    /// Create a resolver over a store shared with other owners.
    pub fn from_shared(store: Arc<dyn ResourceStore>) -> Self {
        Self {
            store,
            replacement: ReplacementStrategy::default(),
        }
    }

    pub fn with_replacement(mut self, replacement: impl Into<ReplacementStrategy>) -> Self {
        self.set_replacement(replacement);
        self
    }

    /// Rebind the named-token strategy. Affects every later resolution.
    pub fn set_replacement(&mut self, replacement: impl Into<ReplacementStrategy>) {
        self.replacement = replacement.into();
    }

    pub fn replacement(&self) -> &ReplacementStrategy {
        &self.replacement
    }

    pub fn store(&self) -> &dyn ResourceStore {
        self.store.as_ref()
    }

    /// Resolve `key` within `scope` for `locale`.
    ///
    /// # Example
    ///
    /// ```
    /// use t4resx::core::{MemoryStore, Resolver, TableReplacement};
    ///
    /// let mut store = MemoryStore::new();
    /// store.insert("Localization.Branding", "", "Welcome", "Welcome to {BRAND}, {0}");
    ///
    /// let brand: TableReplacement = [("BRAND", "Acme")].into_iter().collect();
    /// let resolver = Resolver::new(store).with_replacement(brand);
    ///
    /// assert_eq!(
    ///     resolver.resolve("Localization.Branding", "Welcome", "en", &[&"Ada"]),
    ///     Some("Welcome to Acme, Ada".to_string())
    /// );
    /// assert_eq!(resolver.resolve("Localization.Branding", "Missing", "en", &[]), None);
    /// ```
    pub fn resolve(
        &self,
        scope: &str,
        key: &str,
        locale: &str,
        args: &[&dyn Display],
    ) -> Option<String> {
        let template = self.store.get(scope, key, locale)?;
        if template.is_empty() {
            return Some(String::new());
        }

        let value = substitute_named(template, &self.replacement);
        if args.is_empty() {
            return Some(value);
        }

        let match_count = positional_token_count(&value);
        if match_count == 0 {
            return Some(value);
        }

        let args = pad_arguments(args.iter().map(|arg| arg.to_string()).collect(), match_count);
        Some(format_positional(&value, &args))
    }

    pub fn resolve_key(
        &self,
        key: &ResourceKey,
        locale: &str,
        args: &[&dyn Display],
    ) -> Option<String> {
        self.resolve(&key.scope, &key.key, locale, args)
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("replacement", &self.replacement)
            .finish_non_exhaustive()
    }
}
