use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

/// Identifies a template string in the resource store.
///
/// The scope is the fully-qualified class identity (e.g.
/// `"Localization.Models.User"`), the key is unique within that scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey {
    pub scope: String,
    pub key: String,
}

impl ResourceKey {
    pub fn new(scope: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            key: key.into(),
        }
    }

    /// Split the scope into `(namespace, class name)`.
    ///
    /// A scope without any `.` has an empty namespace.
    pub fn split_scope(&self) -> (&str, &str) {
        split_scope(&self.scope)
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scope, self.key)
    }
}

/// Split a fully-qualified scope into `(namespace, class name)`.
///
/// # Examples
///
/// ```
/// use t4resx::core::split_scope;
///
/// assert_eq!(split_scope("Localization.Models.User"), ("Localization.Models", "User"));
/// assert_eq!(split_scope("Branding"), ("", "Branding"));
/// ```
pub fn split_scope(scope: &str) -> (&str, &str) {
    scope.rsplit_once('.').unwrap_or(("", scope))
}

/// Templates for a single (scope, locale) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSet {
    entries: HashMap<String, String>,
}

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResourceSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ResourceSet::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

/// Discovered class display name -> (property key -> resolved value).
///
/// Rebuilt on every discovery call. Ordered only so that rendered output is
/// stable.
pub type DiscoveryResult = BTreeMap<String, BTreeMap<String, String>>;
