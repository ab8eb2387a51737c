//! Explicit registry of localized classes and their accessors.
//!
//! Generated accessor classes register themselves here instead of being found
//! by runtime type inspection. Only marked classes and marked properties take
//! part in discovery.

use super::{
    data::{ResourceKey, split_scope},
    resolver::Resolver,
    store::MemoryStore,
};

/// Static accessor signature of generated properties.
pub type AccessorFn = fn(&Resolver, &str) -> Option<String>;

/// How a property obtains its value.
#[derive(Debug, Clone)]
pub enum Accessor {
    /// A generated accessor function.
    Function(AccessorFn),
    /// A direct resource lookup without arguments.
    Resource(ResourceKey),
}

impl Accessor {
    pub fn get(&self, resolver: &Resolver, locale: &str) -> Option<String> {
        match self {
            Accessor::Function(f) => f(resolver, locale),
            Accessor::Resource(key) => resolver.resolve_key(key, locale, &[]),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocalizedProperty {
    pub name: String,
    pub accessor: Accessor,
    pub marked: bool,
}

#[derive(Debug, Clone)]
pub struct LocalizedClass {
    pub namespace: String,
    pub name: String,
    pub marked: bool,
    pub properties: Vec<LocalizedProperty>,
}

impl LocalizedClass {
    /// A marked class with no properties yet.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            marked: true,
            properties: Vec::new(),
        }
    }

    /// Build from a fully-qualified scope such as `"Localization.Models.User"`.
    pub fn from_scope(scope: &str) -> Self {
        let (namespace, name) = split_scope(scope);
        Self::new(namespace, name)
    }

    /// Clear the class marker; the class is then invisible to discovery.
    pub fn unmarked(mut self) -> Self {
        self.marked = false;
        self
    }

    /// Add a marked property.
    pub fn property(mut self, name: impl Into<String>, accessor: AccessorFn) -> Self {
        self.properties.push(LocalizedProperty {
            name: name.into(),
            accessor: Accessor::Function(accessor),
            marked: true,
        });
        self
    }

    /// Add a property that discovery must skip.
    pub fn unmarked_property(mut self, name: impl Into<String>, accessor: AccessorFn) -> Self {
        self.properties.push(LocalizedProperty {
            name: name.into(),
            accessor: Accessor::Function(accessor),
            marked: false,
        });
        self
    }

    /// Add a marked property that reads a resource key directly.
    pub fn resource_property(mut self, key: ResourceKey) -> Self {
        self.properties.push(LocalizedProperty {
            name: key.key.clone(),
            accessor: Accessor::Resource(key),
            marked: true,
        });
        self
    }

    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Filter expression selecting exactly this class, relative to `root`.
    ///
    /// `Localization.Branding` under `Localization` gives `"^Branding"`,
    /// `Localization.Models.User` gives `"Models^User"`.
    pub fn filter_expression(&self, root: &str) -> String {
        let relative = strip_namespace_prefix(&self.namespace, root).unwrap_or(&self.namespace);
        format!("{}^{}", relative.trim_start_matches('.'), regex::escape(&self.name))
    }
}

/// All localized classes known to the process.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    root_namespace: String,
    classes: Vec<LocalizedClass>,
}

impl Registry {
    pub fn new(root_namespace: impl Into<String>) -> Self {
        Self {
            root_namespace: root_namespace.into(),
            classes: Vec::new(),
        }
    }

    /// Mirror what the code generator emits for a set of resources: one marked
    /// class per scope and one marked property per key.
    pub fn from_store(root_namespace: impl Into<String>, store: &MemoryStore) -> Self {
        let mut registry = Self::new(root_namespace);
        for scope in store.scopes() {
            let class = store
                .keys(scope)
                .into_iter()
                .fold(LocalizedClass::from_scope(scope), |class, key| {
                    class.resource_property(ResourceKey::new(scope, key))
                });
            registry.register(class);
        }
        registry
    }

    pub fn register(&mut self, class: LocalizedClass) {
        self.classes.push(class);
    }

    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    pub fn classes(&self) -> &[LocalizedClass] {
        &self.classes
    }

    /// Look up a class by its fully-qualified name (case-sensitive).
    pub fn class(&self, full_name: &str) -> Option<&LocalizedClass> {
        self.classes.iter().find(|class| class.full_name() == full_name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Namespace equality, ignoring case (Unicode lowercase mapping).
pub(crate) fn namespace_eq(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Strip `prefix` from the start of `name`, ignoring case.
pub(crate) fn strip_namespace_prefix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = name.chars();
    for expected in prefix.chars() {
        let actual = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.as_str())
}
