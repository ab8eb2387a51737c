//! Culture-aware resource storage.
//!
//! The resolver only needs [`ResourceStore::get`]; [`MemoryStore`] is the
//! implementation filled by the JSON loader and by the embedded sample.

use std::collections::HashMap;

use super::data::ResourceSet;

/// Neutral (invariant) locale tag. Resources stored under it answer every
/// locale that has no more specific entry.
pub const NEUTRAL_LOCALE: &str = "";

/// Lookup of a template by scope, key and locale.
pub trait ResourceStore: Send + Sync {
    /// Return the raw template, or `None` when no culture in the fallback
    /// chain provides the key.
    fn get(&self, scope: &str, key: &str, locale: &str) -> Option<&str>;
}

/// Locale tags compare without case; the store keeps them lowercased.
pub fn normalize_locale(locale: &str) -> String {
    locale.to_lowercase()
}

/// Culture fallback chain for a locale tag, normalized.
///
/// Each `-` separated subtag is dropped in turn, ending with the neutral
/// locale: `"zh-Hant-TW"` -> `["zh-hant-tw", "zh-hant", "zh", ""]`.
pub fn locale_chain(locale: &str) -> Vec<String> {
    let locale = normalize_locale(locale);
    let mut chain = Vec::new();
    let mut current = locale.as_str();
    while !current.is_empty() {
        chain.push(current.to_string());
        current = match current.rfind('-') {
            Some(idx) => &current[..idx],
            None => NEUTRAL_LOCALE,
        };
    }
    chain.push(NEUTRAL_LOCALE.to_string());
    chain
}

/// In-memory `scope -> locale -> templates` store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    scopes: HashMap<String, HashMap<String, ResourceSet>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single template.
    pub fn insert(
        &mut self,
        scope: impl Into<String>,
        locale: &str,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.scopes
            .entry(scope.into())
            .or_default()
            .entry(normalize_locale(locale))
            .or_default()
            .insert(key, value);
    }

    /// Replace every template of a (scope, locale) pair.
    pub fn insert_set(
        &mut self,
        scope: impl Into<String>,
        locale: &str,
        set: ResourceSet,
    ) {
        self.scopes
            .entry(scope.into())
            .or_default()
            .insert(normalize_locale(locale), set);
    }

    /// All scopes, sorted.
    pub fn scopes(&self) -> Vec<&str> {
        let mut scopes: Vec<&str> = self.scopes.keys().map(String::as_str).collect();
        scopes.sort_unstable();
        scopes
    }

    /// Locales available for a scope, lowercased and sorted (the neutral
    /// locale sorts first).
    pub fn locales(&self, scope: &str) -> Vec<&str> {
        let mut locales: Vec<&str> = self
            .scopes
            .get(scope)
            .map(|sets| sets.keys().map(String::as_str).collect())
            .unwrap_or_default();
        locales.sort_unstable();
        locales
    }

    /// Union of keys across all locales of a scope, sorted and deduplicated.
    pub fn keys(&self, scope: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .scopes
            .get(scope)
            .map(|sets| sets.values().flat_map(ResourceSet::keys).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// The exact set stored for a (scope, locale) pair, without fallback.
    pub fn set(&self, scope: &str, locale: &str) -> Option<&ResourceSet> {
        self.scopes
            .get(scope)
            .and_then(|sets| sets.get(&normalize_locale(locale)))
    }

    /// Number of scopes.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl ResourceStore for MemoryStore {
    fn get(&self, scope: &str, key: &str, locale: &str) -> Option<&str> {
        let sets = self.scopes.get(scope)?;
        locale_chain(locale)
            .iter()
            .find_map(|tag| sets.get(tag).and_then(|set| set.get(key)))
    }
}
