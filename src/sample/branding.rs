use std::fmt::Display;

use crate::core::{DiscoveryResult, LocalizedClass, Registry, Resolver, class_dictionary};

/// Accessors for `Localization.Branding`.
pub struct Branding;

impl Branding {
    pub const SCOPE: &'static str = "Localization.Branding";

    /// Localized entry for `key` in this class.
    pub fn resource_string(
        resolver: &Resolver,
        key: &str,
        locale: &str,
        args: &[&dyn Display],
    ) -> Option<String> {
        resolver.resolve(Self::SCOPE, key, locale, args)
    }

    /// Set your preferred language in your browser settings to EN or FR to see changes
    pub fn info(resolver: &Resolver, locale: &str) -> Option<String> {
        Self::resource_string(resolver, "Info", locale, &[])
    }

    /// Same strings, from the client side
    pub fn javascript_title(resolver: &Resolver, locale: &str) -> Option<String> {
        Self::resource_string(resolver, "JavaScriptTitle", locale, &[])
    }

    /// Send
    pub fn submit(resolver: &Resolver, locale: &str) -> Option<String> {
        Self::resource_string(resolver, "Submit", locale, &[])
    }

    /// Localization Sample
    pub fn title(resolver: &Resolver, locale: &str) -> Option<String> {
        Self::resource_string(resolver, "Title", locale, &[])
    }

    /// Welcome to {BRAND}
    pub fn welcome(resolver: &Resolver, locale: &str) -> Option<String> {
        Self::resource_string(resolver, "Welcome", locale, &[])
    }

    /// Welcome to {BRAND}
    pub fn welcome_formatted(
        resolver: &Resolver,
        locale: &str,
        args: &[&dyn Display],
    ) -> Option<String> {
        Self::resource_string(resolver, "Welcome", locale, args)
    }

    /// Hello {0}, you have {1} new messages
    pub fn greeting(resolver: &Resolver, locale: &str) -> Option<String> {
        Self::resource_string(resolver, "Greeting", locale, &[])
    }

    /// Hello {0}, you have {1} new messages
    pub fn greeting_formatted(
        resolver: &Resolver,
        locale: &str,
        args: &[&dyn Display],
    ) -> Option<String> {
        Self::resource_string(resolver, "Greeting", locale, args)
    }

    /// Registry entry with every argument-less accessor marked.
    pub fn class() -> LocalizedClass {
        LocalizedClass::from_scope(Self::SCOPE)
            .property("Greeting", Self::greeting)
            .property("Info", Self::info)
            .property("JavaScriptTitle", Self::javascript_title)
            .property("Submit", Self::submit)
            .property("Title", Self::title)
            .property("Welcome", Self::welcome)
    }

    /// This class as `{ "Branding": { key: value } }`.
    pub fn as_dictionary(registry: &Registry, resolver: &Resolver, locale: &str) -> DiscoveryResult {
        class_dictionary(registry, resolver, locale, &Self::class())
    }
}
