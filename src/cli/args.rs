//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `resolve`: Resolve one resource key, with optional positional arguments
//! - `discover`: List localized classes and their values for a filter expression
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Discover(cmd)) => cmd.common.verbose,
            Some(Command::Init(cmd)) => cmd.common.verbose,
            None => false,
        }
    }
}

/// Common arguments shared by the resolving commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Locale to resolve for, e.g. "fr-CA" (overrides config file)
    #[arg(short, long, env = "T4RESX_LOCALE")]
    pub locale: Option<String>,

    /// Resources directory path (overrides config file)
    #[arg(long)]
    pub resources_root: Option<PathBuf>,

    /// Root localization namespace (overrides config file)
    #[arg(long)]
    pub root_namespace: Option<String>,

    /// Value for a named token, e.g. --replace BRAND=Acme
    /// Can be specified multiple times; overrides config file entries
    #[arg(long = "replace", value_name = "NAME=VALUE", value_parser = parse_replacement)]
    pub replacements: Vec<(String, String)>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Apply the locale, root namespace and replacement overrides.
    ///
    /// `resources_root` is left to the caller: it is a path relative to the
    /// working directory, not to the config file.
    pub fn override_config(&self, config: &mut Config) {
        if let Some(ref locale) = self.locale {
            config.default_locale = locale.clone();
        }
        if let Some(ref root_namespace) = self.root_namespace {
            config.root_namespace = root_namespace.clone();
        }
        for (token, value) in &self.replacements {
            config.replacements.insert(token.clone(), value.clone());
        }
    }
}

fn parse_replacement(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got \"{}\"", s))?;
    if !crate::core::is_token_name(name) {
        return Err(format!(
            "\"{}\" is not a token name (expected 3 or more uppercase letters)",
            name
        ));
    }
    Ok((name.to_string(), value.to_string()))
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Class scope, fully qualified or relative to the root namespace
    /// (e.g. "Branding" or "Localization.Models.User")
    pub scope: String,

    /// Resource key within the scope
    pub key: String,

    /// Positional arguments for {0}, {1}, ... tokens
    pub args: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct DiscoverCommand {
    /// Filter expression: [namespace]["^" class-pattern], e.g. "^Branding",
    /// "Models^User" or "Models.*" (default: every class)
    #[arg(default_value = "")]
    pub filter: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Values given here are written into the new file instead of the defaults
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a localized string, substituting named and positional tokens
    Resolve(ResolveCommand),
    /// List localized classes under a namespace with their resolved values
    Discover(DiscoverCommand),
    /// Initialize a new .t4resxrc.json configuration file
    Init(InitCommand),
}
