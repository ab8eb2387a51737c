//! Output formatting for command results.
//!
//! Every printer has a `_to` variant taking a writer so output can be
//! captured in tests.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::DiscoveryResult;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a discovery result as an indented, aligned listing.
pub fn print_discovery(result: &DiscoveryResult) {
    print_discovery_to(result, &mut io::stdout().lock());
}

pub fn print_discovery_to<W: Write>(result: &DiscoveryResult, writer: &mut W) {
    for (class, properties) in result {
        let _ = writeln!(writer, "{}", class.bold());

        let key_width = properties
            .keys()
            .map(|key| UnicodeWidthStr::width(key.as_str()))
            .max()
            .unwrap_or(0);

        for (key, value) in properties {
            let padding = key_width - UnicodeWidthStr::width(key.as_str());
            let _ = writeln!(
                writer,
                "  {}{:padding$}  {}",
                key.cyan(),
                "",
                value,
                padding = padding
            );
        }
    }
}

/// Print a discovery result as pretty JSON.
pub fn print_discovery_json(result: &DiscoveryResult) -> Result<()> {
    print_discovery_json_to(result, &mut io::stdout().lock())
}

pub fn print_discovery_json_to<W: Write>(result: &DiscoveryResult, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, result)?;
    writeln!(writer)?;
    Ok(())
}

/// Print the one-line discovery summary.
pub fn print_discovery_summary(result: &DiscoveryResult) {
    print_discovery_summary_to(result, &mut io::stdout().lock());
}

pub fn print_discovery_summary_to<W: Write>(result: &DiscoveryResult, writer: &mut W) {
    let classes = result.len();
    let values: usize = result.values().map(|properties| properties.len()).sum();
    let msg = format!(
        "Discovered {} {}, {} {}",
        classes,
        if classes == 1 { "class" } else { "classes" },
        values,
        if values == 1 { "value" } else { "values" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a failure line to stderr.
pub fn print_failure(message: &str) {
    print_failure_to(message, &mut io::stderr().lock());
}

pub fn print_failure_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message.red());
}
