//! `init`: write a starter `.t4resxrc.json` into the working directory.
//!
//! Command-line overrides are stored in the new file, so
//! `t4resx init --root-namespace App --locale fr` produces a config that the
//! other commands pick up without repeating those flags.

use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{
    args::{CommonArgs, InitCommand},
    exit_status::ExitStatus,
    report::{SUCCESS_MARK, print_failure},
};
use crate::config::{CONFIG_FILE_NAME, Config};

pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    let cwd = env::current_dir()?;
    init_in(&cwd, &cmd.common)
}

pub fn init_in(dir: &Path, common: &CommonArgs) -> Result<ExitStatus> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        print_failure(&format!(
            "{} already exists, edit it instead",
            CONFIG_FILE_NAME
        ));
        return Ok(ExitStatus::Failure);
    }

    let mut config = Config::default();
    if let Some(ref resources_root) = common.resources_root {
        config.resources_root = resources_root.to_string_lossy().into_owned();
    }
    common.override_config(&mut config);
    config.validate()?;

    fs::write(&config_path, config.to_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );

    if common.verbose {
        eprintln!(
            "Resources are read from '{}' under namespace '{}', default locale '{}'",
            config.resources_root, config.root_namespace, config.default_locale
        );
    }
    if !dir.join(&config.resources_root).is_dir() {
        eprintln!(
            "{} resources directory '{}' does not exist yet; add <Class>[.<locale>].json files there",
            "note:".bold().cyan(),
            config.resources_root
        );
    }

    Ok(ExitStatus::Success)
}
