use std::fmt::Display;

use anyhow::Result;

use super::super::{
    args::ResolveCommand, context::LocalizationContext, exit_status::ExitStatus,
    report::print_failure,
};

pub fn resolve(cmd: ResolveCommand) -> Result<ExitStatus> {
    let ctx = LocalizationContext::new(&cmd.common)?;
    ctx.print_warnings();

    let scope = ctx.qualify_scope(&cmd.scope);
    let args: Vec<&dyn Display> = cmd.args.iter().map(|arg| arg as &dyn Display).collect();

    match ctx.resolver.resolve(&scope, &cmd.key, &ctx.locale, &args) {
        Some(value) => {
            println!("{}", value);
            Ok(ExitStatus::Success)
        }
        None => {
            print_failure(&format!(
                "Resource '{}' not found in '{}' for locale '{}'",
                cmd.key, scope, ctx.locale
            ));
            Ok(ExitStatus::Failure)
        }
    }
}
