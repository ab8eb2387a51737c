use anyhow::Result;
use colored::Colorize;

use super::super::{
    args::{DiscoverCommand, OutputFormat},
    context::LocalizationContext,
    exit_status::ExitStatus,
    report::{print_discovery, print_discovery_json, print_discovery_summary, print_failure},
};
use crate::core::{FilterExpression, discover_with};

pub fn discover(cmd: DiscoverCommand) -> Result<ExitStatus> {
    let ctx = LocalizationContext::new(&cmd.common)?;
    ctx.print_warnings();

    let filter = FilterExpression::parse(&cmd.filter, ctx.registry.root_namespace());
    if ctx.verbose
        && let Some(error) = filter.pattern_error()
    {
        eprintln!(
            "{} class pattern ignored: {}",
            "warning:".bold().yellow(),
            error
        );
    }

    let result = discover_with(&ctx.registry, &ctx.resolver, &ctx.locale, &filter);

    match cmd.format {
        OutputFormat::Json => print_discovery_json(&result)?,
        OutputFormat::Text => {
            if result.is_empty() {
                print_failure(&format!("No localized classes matched '{}'", cmd.filter));
                return Ok(ExitStatus::Failure);
            }
            print_discovery(&result);
            print_discovery_summary(&result);
        }
    }

    if result.is_empty() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
