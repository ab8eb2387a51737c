//! Named-token replacement strategies.
//!
//! A named token such as `{BRAND}` is handed to a [`Replacement`] as the bare
//! name (`"BRAND"`). The resolver owns one [`ReplacementStrategy`] and can be
//! rebound at any time with [`Resolver::set_replacement`].
//!
//! [`Resolver::set_replacement`]: super::Resolver::set_replacement

use std::{collections::HashMap, fmt, sync::Arc};

use enum_dispatch::enum_dispatch;

/// Maps a token name to its replacement text.
#[enum_dispatch]
pub trait Replacement {
    fn replace(&self, token: &str) -> String;
}

/// Returns the token name unchanged. The default strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Replacement for Identity {
    fn replace(&self, token: &str) -> String {
        token.to_string()
    }
}

/// Fixed token table. Unknown tokens fall back to [`Identity`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableReplacement {
    values: HashMap<String, String>,
}

impl TableReplacement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.values.insert(token.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TableReplacement {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = TableReplacement::new();
        for (token, value) in iter {
            table.insert(token, value);
        }
        table
    }
}

impl Replacement for TableReplacement {
    fn replace(&self, token: &str) -> String {
        self.values
            .get(token)
            .cloned()
            .unwrap_or_else(|| Identity.replace(token))
    }
}

/// Host-supplied replacement function.
#[derive(Clone)]
pub struct FnReplacement(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl FnReplacement {
    pub fn new(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }
}

impl fmt::Debug for FnReplacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnReplacement(..)")
    }
}

impl Replacement for FnReplacement {
    fn replace(&self, token: &str) -> String {
        (self.0)(token)
    }
}

/// The replacement strategy bound to a resolver.
#[enum_dispatch(Replacement)]
#[derive(Debug, Clone)]
pub enum ReplacementStrategy {
    Identity(Identity),
    Table(TableReplacement),
    Function(FnReplacement),
}

impl Default for ReplacementStrategy {
    fn default() -> Self {
        ReplacementStrategy::Identity(Identity)
    }
}

impl ReplacementStrategy {
    /// Wrap a closure as a strategy.
    pub fn from_fn(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        FnReplacement::new(f).into()
    }
}
