//! Token substitution passes applied to a resolved template.
//!
//! Two kinds of token are recognised:
//!
//! - **Named tokens**: three or more uppercase letters in braces (`{BRAND}`),
//!   replaced through a [`Replacement`] strategy.
//! - **Positional tokens**: a single digit in braces (`{0}`), replaced by
//!   caller-supplied arguments using composite formatting.
//!
//! Neither pass re-scans text it has inserted.

use std::{collections::HashMap, sync::LazyLock};

use regex::{Captures, Regex};

use super::replacement::Replacement;

static NAMED_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\p{Lu}{3,}\}").unwrap());

static POSITIONAL_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[0-9]\}").unwrap());

/// Text used in place of a positional argument the caller did not supply.
pub fn undefined_argument(index: usize) -> String {
    format!("argument {{{}}} is undefined", index)
}

/// Whether `name` can appear as a named token, i.e. `{name}` is matched in full.
pub fn is_token_name(name: &str) -> bool {
    let token = format!("{{{}}}", name);
    NAMED_TOKEN_REGEX
        .find(&token)
        .is_some_and(|m| m.len() == token.len())
}

/// Replace every named token with the strategy's value for its bare name.
///
/// The strategy is consulted once per distinct name.
///
/// # Examples
///
/// ```
/// use t4resx::core::{TableReplacement, substitute_named};
///
/// let table: TableReplacement = [("BRAND", "Acme")].into_iter().collect();
/// assert_eq!(
///     substitute_named("Welcome to {BRAND}, {user}", &table),
///     "Welcome to Acme, {user}"
/// );
/// ```
pub fn substitute_named<R: Replacement + ?Sized>(template: &str, replacement: &R) -> String {
    let mut resolved: HashMap<String, String> = HashMap::new();
    NAMED_TOKEN_REGEX
        .replace_all(template, |caps: &Captures| {
            let token = &caps[0];
            let name = &token[1..token.len() - 1];
            resolved
                .entry(name.to_string())
                .or_insert_with(|| replacement.replace(name))
                .clone()
        })
        .into_owned()
}

/// Number of `{digit}` matches in the template. Repeated tokens count once
/// per occurrence.
pub fn positional_token_count(template: &str) -> usize {
    POSITIONAL_TOKEN_REGEX.find_iter(template).count()
}

/// Pad `args` up to `match_count` entries with [`undefined_argument`] text.
///
/// Arguments are left untouched when there are already at least
/// `match_count` of them.
pub fn pad_arguments(args: Vec<String>, match_count: usize) -> Vec<String> {
    if args.len() >= match_count {
        return args;
    }
    let mut padded = args;
    for index in padded.len()..match_count {
        padded.push(undefined_argument(index));
    }
    padded
}

/// Alignment widths at or above this are rejected as malformed items.
const MAX_ALIGNMENT: u32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FormatItem {
    index: usize,
    alignment: i32,
}

/// Composite formatting: `{index[,alignment][:format]}` items with `{{` and
/// `}}` escapes.
///
/// Format strings are accepted and ignored because arguments are already
/// rendered text. An index past the end of `args` renders
/// [`undefined_argument`]. Malformed items, including alignments of a million
/// columns or more, are copied through literally.
pub fn format_positional(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
        } else if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
        } else if let Some((item, consumed)) = parse_format_item(&tail[1..]) {
            render_item(item, args, &mut out);
            rest = &tail[1 + consumed..];
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

/// Parse the body of a format item following its opening brace.
///
/// Returns the item and the number of bytes consumed, closing brace included.
fn parse_format_item(body: &str) -> Option<(FormatItem, usize)> {
    let close = body.find('}')?;
    let inner = &body[..close];
    if inner.contains('{') {
        return None;
    }

    let head = inner.split_once(':').map_or(inner, |(head, _format)| head);
    let (index, alignment) = match head.split_once(',') {
        Some((index, alignment)) => (index, alignment.trim().parse::<i32>().ok()?),
        None => (head, 0),
    };

    if alignment.unsigned_abs() >= MAX_ALIGNMENT {
        return None;
    }
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = index.parse::<usize>().ok()?;

    Some((FormatItem { index, alignment }, close + 1))
}

fn render_item(item: FormatItem, args: &[String], out: &mut String) {
    let value = match args.get(item.index) {
        Some(arg) => arg.clone(),
        None => undefined_argument(item.index),
    };

    let width = item.alignment.unsigned_abs() as usize;
    let padding = width.saturating_sub(value.chars().count());
    if item.alignment > 0 {
        out.extend(std::iter::repeat_n(' ', padding));
        out.push_str(&value);
    } else {
        out.push_str(&value);
        out.extend(std::iter::repeat_n(' ', padding));
    }
}
