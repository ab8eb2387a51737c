use std::fmt::Display;

use crate::core::{DiscoveryResult, LocalizedClass, Registry, Resolver, class_dictionary};

/// Accessors for `Localization.Models.User`.
pub struct User;

impl User {
    pub const SCOPE: &'static str = "Localization.Models.User";

    /// Pattern usable where a compile-time constant is required. Not localized.
    pub const PSEUDO_REGEX_CONSTANT: &'static str = "^T4ResX$";

    pub fn resource_string(
        resolver: &Resolver,
        key: &str,
        locale: &str,
        args: &[&dyn Display],
    ) -> Option<String> {
        resolver.resolve(Self::SCOPE, key, locale, args)
    }

    /// Enter your pseudo
    pub fn pseudo(resolver: &Resolver, locale: &str) -> Option<String> {
        Self::resource_string(resolver, "Pseudo", locale, &[])
    }

    /// Sorry, your pseudo must be {BRAND}!
    pub fn pseudo_error(resolver: &Resolver, locale: &str) -> Option<String> {
        Self::resource_string(resolver, "PseudoError", locale, &[])
    }

    /// Thanks!
    pub fn pseudo_ok(resolver: &Resolver, locale: &str) -> Option<String> {
        Self::resource_string(resolver, "PseudoOk", locale, &[])
    }

    /// ^T4ResX$
    pub fn pseudo_regex(resolver: &Resolver, locale: &str) -> Option<String> {
        Self::resource_string(resolver, "PseudoRegex", locale, &[])
    }

    /// This field is required
    pub fn required_error(resolver: &Resolver, locale: &str) -> Option<String> {
        Self::resource_string(resolver, "RequiredError", locale, &[])
    }

    fn pseudo_regex_constant(_: &Resolver, _: &str) -> Option<String> {
        Some(Self::PSEUDO_REGEX_CONSTANT.to_string())
    }

    pub fn class() -> LocalizedClass {
        LocalizedClass::from_scope(Self::SCOPE)
            .property("Pseudo", Self::pseudo)
            .property("PseudoError", Self::pseudo_error)
            .property("PseudoOk", Self::pseudo_ok)
            .property("PseudoRegex", Self::pseudo_regex)
            .unmarked_property("PseudoRegexConstant", Self::pseudo_regex_constant)
            .property("RequiredError", Self::required_error)
    }

    pub fn as_dictionary(registry: &Registry, resolver: &Resolver, locale: &str) -> DiscoveryResult {
        class_dictionary(registry, resolver, locale, &Self::class())
    }
}
