//! Accessor classes for the bundled `resources/` directory, laid out the way
//! the code generator emits them: one type per resource file, one function per
//! key, registered explicitly for discovery.

pub mod branding;
pub mod models;

use anyhow::{Context, Result};

pub use branding::Branding;
pub use models::User;

use crate::core::{MemoryStore, NEUTRAL_LOCALE, Registry, parsers::json::parse_resource_str};

pub const ROOT_NAMESPACE: &str = "Localization";

/// (scope, locale, JSON content)
const EMBEDDED_RESOURCES: &[(&str, &str, &str)] = &[
    (
        Branding::SCOPE,
        NEUTRAL_LOCALE,
        include_str!("../../resources/Branding.json"),
    ),
    (
        Branding::SCOPE,
        "fr",
        include_str!("../../resources/Branding.fr.json"),
    ),
    (
        User::SCOPE,
        NEUTRAL_LOCALE,
        include_str!("../../resources/Models/User.json"),
    ),
    (
        User::SCOPE,
        "fr",
        include_str!("../../resources/Models/User.fr.json"),
    ),
];

/// Store holding the bundled resources.
pub fn sample_store() -> Result<MemoryStore> {
    let mut store = MemoryStore::new();
    for (scope, locale, content) in EMBEDDED_RESOURCES {
        let (set, _skipped) = parse_resource_str(content)
            .with_context(|| format!("Embedded resources for {} ({:?})", scope, locale))?;
        store.insert_set(*scope, *locale, set);
    }
    Ok(store)
}

/// Registry of the bundled accessor classes.
pub fn sample_registry() -> Registry {
    let mut registry = Registry::new(ROOT_NAMESPACE);
    registry.register(Branding::class());
    registry.register(User::class());
    registry
}
