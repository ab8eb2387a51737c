//! Namespace discovery over the class registry.
//!
//! A filter expression has the form `[namespace]["^" class_pattern]`:
//!
//! | Expression | Namespace | Class name |
//! |------------|-----------|------------|
//! | `""` | any | any |
//! | `"^Branding"` | any | matches `Branding` |
//! | `"Models"` | exactly `<root>.Models` | any |
//! | `"Models.*"` | starts with `<root>.Models` | any |
//! | `"Models^User"` | exactly `<root>.Models` | matches `User` |
//!
//! Namespace comparison ignores case. The class pattern is an unanchored,
//! case-insensitive regex. An expression with more than one `^`, or with an
//! invalid pattern, applies no class filter at all.

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};

use super::{
    data::DiscoveryResult,
    registry::{LocalizedClass, Registry, namespace_eq, strip_namespace_prefix},
    resolver::Resolver,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum NamespaceMatch {
    Any,
    Exact,
    Prefix,
}

/// Parsed discovery filter.
#[derive(Debug, Clone)]
pub struct FilterExpression {
    namespace_match: NamespaceMatch,
    /// Namespace compared against (exact) or stripped from names (all modes).
    namespace: String,
    class_pattern: Option<Regex>,
    pattern_error: Option<String>,
}

impl FilterExpression {
    /// Parse `expr` relative to the root localization namespace.
    pub fn parse(expr: &str, root: &str) -> Self {
        let parts: Vec<&str> = expr.split('^').collect();
        let suffix = parts[0];

        let path = if suffix.is_empty() {
            root.to_string()
        } else if root.is_empty() {
            suffix.to_string()
        } else {
            format!("{}.{}", root, suffix)
        };

        let (namespace_match, namespace) = if suffix.is_empty() {
            (NamespaceMatch::Any, path)
        } else if suffix.ends_with(".*") {
            (NamespaceMatch::Prefix, path.replace(".*", ""))
        } else {
            (NamespaceMatch::Exact, path)
        };

        let (class_pattern, pattern_error) = match parts.as_slice() {
            [_, pattern] => match RegexBuilder::new(pattern)
                .case_insensitive(true)
                .dot_matches_new_line(true)
                .build()
            {
                Ok(regex) => (Some(regex), None),
                Err(e) => (None, Some(e.to_string())),
            },
            _ => (None, None),
        };

        Self {
            namespace_match,
            namespace,
            class_pattern,
            pattern_error,
        }
    }

    /// Why the class pattern was dropped, when it failed to compile.
    pub fn pattern_error(&self) -> Option<&str> {
        self.pattern_error.as_deref()
    }

    pub fn has_class_pattern(&self) -> bool {
        self.class_pattern.is_some()
    }

    /// Whether a class is selected by this filter. Markers are not checked here.
    pub fn matches(&self, class: &LocalizedClass) -> bool {
        let namespace_ok = match self.namespace_match {
            NamespaceMatch::Any => true,
            NamespaceMatch::Exact => namespace_eq(&class.namespace, &self.namespace),
            NamespaceMatch::Prefix => {
                strip_namespace_prefix(&class.namespace, &self.namespace).is_some()
            }
        };

        namespace_ok
            && self
                .class_pattern
                .as_ref()
                .is_none_or(|pattern| pattern.is_match(&class.name))
    }

    /// Name of a class relative to the filtered namespace.
    pub fn display_name(&self, class: &LocalizedClass) -> String {
        let full_name = class.full_name();
        let relative = strip_namespace_prefix(&full_name, &self.namespace).unwrap_or(&full_name);
        relative.strip_prefix('.').unwrap_or(relative).to_string()
    }
}

/// Collect the resolved values of every marked property of every marked class
/// selected by `filter`.
///
/// Classes whose properties all resolve to nothing are left out. Properties
/// without a value are skipped.
///
/// # Example
///
/// ```
/// use t4resx::core::{LocalizedClass, MemoryStore, Registry, Resolver, discover_by_namespace};
///
/// fn title(resolver: &Resolver, locale: &str) -> Option<String> {
///     resolver.resolve("Localization.Branding", "Title", locale, &[])
/// }
///
/// let mut store = MemoryStore::new();
/// store.insert("Localization.Branding", "", "Title", "Sample");
/// let resolver = Resolver::new(store);
///
/// let mut registry = Registry::new("Localization");
/// registry.register(LocalizedClass::new("Localization", "Branding").property("Title", title));
///
/// let result = discover_by_namespace(&registry, &resolver, "en", "^Branding");
/// assert_eq!(result["Branding"]["Title"], "Sample");
/// ```
pub fn discover_by_namespace(
    registry: &Registry,
    resolver: &Resolver,
    locale: &str,
    filter: &str,
) -> DiscoveryResult {
    let filter = FilterExpression::parse(filter, registry.root_namespace());
    discover_with(registry, resolver, locale, &filter)
}

/// Same as [`discover_by_namespace`] with an already parsed filter.
pub fn discover_with(
    registry: &Registry,
    resolver: &Resolver,
    locale: &str,
    filter: &FilterExpression,
) -> DiscoveryResult {
    let mut result = DiscoveryResult::new();

    for class in registry
        .classes()
        .iter()
        .filter(|class| class.marked && filter.matches(class))
    {
        let properties: BTreeMap<String, String> = class
            .properties
            .iter()
            .filter(|property| property.marked)
            .filter_map(|property| {
                property
                    .accessor
                    .get(resolver, locale)
                    .map(|value| (property.name.clone(), value))
            })
            .collect();

        if !properties.is_empty() {
            result
                .entry(filter.display_name(class))
                .or_default()
                .extend(properties);
        }
    }

    result
}

/// Discovery scoped to a single class, using its own filter expression.
pub fn class_dictionary(
    registry: &Registry,
    resolver: &Resolver,
    locale: &str,
    class: &LocalizedClass,
) -> DiscoveryResult {
    discover_by_namespace(
        registry,
        resolver,
        locale,
        &class.filter_expression(registry.root_namespace()),
    )
}
