use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{TableReplacement, is_token_name};

pub const CONFIG_FILE_NAME: &str = ".t4resxrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_resources_root", alias = "resourcesDir")]
    pub resources_root: String,
    #[serde(default = "default_root_namespace")]
    pub root_namespace: String,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Named token values, e.g. `{ "BRAND": "Acme" }`.
    #[serde(default)]
    pub replacements: BTreeMap<String, String>,
    /// Glob patterns (relative to `resourcesRoot`) of files to skip.
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_resources_root() -> String {
    "./resources".to_string()
}

fn default_root_namespace() -> String {
    "Localization".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resources_root: default_resources_root(),
            root_namespace: default_root_namespace(),
            default_locale: default_locale(),
            replacements: BTreeMap::new(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores` and for
    /// replacement names that can never match a `{TOKEN}`.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for token in self.replacements.keys() {
            if !is_token_name(token) {
                bail!(
                    "Invalid token in 'replacements': \"{}\" (expected 3 or more uppercase letters)",
                    token
                );
            }
        }

        Ok(())
    }

    /// Pretty JSON as written to the config file.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config.")
    }

    /// Replacement strategy built from the `replacements` table.
    pub fn replacement_table(&self) -> TableReplacement {
        self.replacements
            .iter()
            .map(|(token, value)| (token.as_str(), value.as_str()))
            .collect()
    }
}


pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory the config file was found in, `None` when using defaults.
    pub config_dir: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.config_dir.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                config_dir: path.parent().map(Path::to_path_buf),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            config_dir: None,
        }),
    }
}
