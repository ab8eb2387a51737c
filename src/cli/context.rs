//! Shared setup for the resolving commands: configuration, resource loading,
//! resolver and registry.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;

use super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};
use crate::core::{
    Registry, Resolver,
    parsers::json::{ResourceScanWarning, scan_resource_files},
};

pub struct LocalizationContext {
    pub config: Config,
    pub locale: String,
    pub resources_dir: PathBuf,
    pub resolver: Resolver,
    pub registry: Registry,
    pub warnings: Vec<ResourceScanWarning>,
    pub files_loaded: usize,
    pub verbose: bool,
}

impl LocalizationContext {
    /// Load configuration and resources for the current directory.
    ///
    /// Precedence is CLI arguments, then config file, then defaults.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir()?;
        Self::from_dir(&cwd, common)
    }

    pub fn from_dir(start_dir: &Path, common: &CommonArgs) -> Result<Self> {
        let verbose = common.verbose;
        let config_result = load_config(start_dir)?;

        if verbose && !config_result.from_file() {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;

        common.override_config(&mut config);

        // A CLI path is relative to the working directory, a configured one to
        // the directory holding the config file.
        let resources_dir = match &common.resources_root {
            Some(path) => start_dir.join(path),
            None => {
                let base = config_result.config_dir.as_deref().unwrap_or(start_dir);
                let configured = Path::new(&config.resources_root);
                base.join(configured.strip_prefix(".").unwrap_or(configured))
            }
        };

        let scan = scan_resource_files(&resources_dir, &config.root_namespace, &config.ignores)?;

        if verbose {
            eprintln!(
                "Loaded {} resource file(s) from {}",
                scan.files_loaded,
                resources_dir.display()
            );
        }

        let registry = Registry::from_store(config.root_namespace.clone(), &scan.store);
        let resolver = Resolver::new(scan.store).with_replacement(config.replacement_table());

        Ok(Self {
            locale: config.default_locale.clone(),
            config,
            resources_dir,
            resolver,
            registry,
            warnings: scan.warnings,
            files_loaded: scan.files_loaded,
            verbose,
        })
    }

    /// Fully-qualified scope for a user-supplied one.
    ///
    /// A scope naming a known class is used as given; anything else is taken
    /// as relative to the root namespace.
    pub fn qualify_scope(&self, scope: &str) -> String {
        if self.registry.class(scope).is_some() || self.config.root_namespace.is_empty() {
            scope.to_string()
        } else {
            format!("{}.{}", self.config.root_namespace, scope)
        }
    }

    /// Print resource warnings: each one in verbose mode, a count otherwise.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }

        if self.verbose {
            for warning in &self.warnings {
                eprintln!(
                    "{} {}: {}",
                    "warning:".bold().yellow(),
                    warning.file_path,
                    warning.error
                );
            }
        } else {
            eprintln!(
                "{} {} resource issue(s) found (use {} for details)",
                "warning:".bold().yellow(),
                self.warnings.len(),
                "-v".cyan()
            );
        }
    }
}
