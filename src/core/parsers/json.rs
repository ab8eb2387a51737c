use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use rayon::prelude::*;
use serde_json::Value;
use walkdir::WalkDir;

use crate::core::{MemoryStore, NEUTRAL_LOCALE, ResourceSet, normalize_locale};

/// A warning from scanning resource files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanResourcesResult {
    pub store: MemoryStore,
    pub warnings: Vec<ResourceScanWarning>,
    pub files_loaded: usize,
}

/// Where a resource file belongs: its scope and locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFileInfo {
    pub scope: String,
    pub locale: String,
}

/// Derive scope and locale from a file's position under the resources root.
///
/// Directories become namespace segments below `root_namespace`, the part of
/// the file name before the first `.` is the class, and whatever sits between
/// that and the extension is the locale (none means neutral).
///
/// Examples with root namespace `Localization`:
/// - `Branding.json` -> (`Localization.Branding`, neutral)
/// - `Branding.fr.json` -> (`Localization.Branding`, `fr`)
/// - `Models/User.fr-CA.json` -> (`Localization.Models.User`, `fr-ca`)
pub fn resource_file_info(
    resources_root: &Path,
    path: &Path,
    root_namespace: &str,
) -> Option<ResourceFileInfo> {
    let relative = path.strip_prefix(resources_root).ok()?;
    let stem = relative.file_stem()?.to_str()?;
    let (class, locale) = stem.split_once('.').unwrap_or((stem, NEUTRAL_LOCALE));
    if class.is_empty() {
        return None;
    }

    let mut segments: Vec<&str> = Vec::new();
    if !root_namespace.is_empty() {
        segments.push(root_namespace);
    }
    if let Some(parent) = relative.parent() {
        for component in parent.components() {
            segments.push(component.as_os_str().to_str()?);
        }
    }
    segments.push(class);

    Some(ResourceFileInfo {
        scope: segments.join("."),
        locale: normalize_locale(locale),
    })
}

/// Parse a flat JSON object of templates.
///
/// Returns the templates and one message per skipped non-string value.
pub fn parse_resource_str(content: &str) -> Result<(ResourceSet, Vec<String>)> {
    let json: Value = serde_json::from_str(content).context("Invalid JSON")?;

    let Value::Object(map) = json else {
        bail!("Expected a JSON object of key/value strings");
    };

    let mut set = ResourceSet::new();
    let mut skipped = Vec::new();
    for (key, value) in map {
        match value {
            Value::String(s) => set.insert(key, s),
            other => skipped.push(format!(
                "Key '{}' skipped: expected a string, found {}",
                key,
                json_type_name(&other)
            )),
        }
    }

    Ok((set, skipped))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn parse_resource_file(path: &Path) -> Result<(ResourceSet, Vec<String>)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read resource file: {:?}", path))?;
    parse_resource_str(&content).with_context(|| format!("Failed to parse resource file: {:?}", path))
}

/// Load every `*.json` resource file below `resources_root`.
///
/// Files matching one of the `ignores` globs (relative to the root) are
/// skipped. Unreadable or invalid files are reported as warnings; only a
/// missing root is an error.
pub fn scan_resource_files(
    resources_root: impl AsRef<Path>,
    root_namespace: &str,
    ignores: &[String],
) -> Result<ScanResourcesResult> {
    let resources_root = resources_root.as_ref();
    let mut result = ScanResourcesResult::default();

    if !resources_root.exists() {
        bail!(
            "Resources directory '{}' does not exist.\n\
             Hint: Check your .t4resxrc.json 'resourcesRoot' setting.",
            resources_root.display()
        );
    }

    if !resources_root.is_dir() {
        bail!("'{}' is not a directory.", resources_root.display());
    }

    let ignore_patterns: Vec<Pattern> = ignores
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    let mut files: Vec<(PathBuf, ResourceFileInfo)> = Vec::new();
    for entry in WalkDir::new(resources_root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.warnings.push(ResourceScanWarning {
                    file_path: e
                        .path()
                        .map(|p| p.to_string_lossy().to_string())
                        .unwrap_or_default(),
                    error: e.to_string(),
                });
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("json")
        {
            continue;
        }

        let relative = path.strip_prefix(resources_root).unwrap_or(path);
        if ignore_patterns.iter().any(|p| p.matches_path(relative)) {
            continue;
        }

        if let Some(info) = resource_file_info(resources_root, path, root_namespace) {
            files.push((path.to_path_buf(), info));
        }
    }

    let parsed: Vec<_> = files
        .par_iter()
        .map(|(path, info)| (path, info, parse_resource_file(path)))
        .collect();

    for (path, info, parsed) in parsed {
        let file_path = path.to_string_lossy().to_string();
        match parsed {
            Ok((set, skipped)) => {
                result.warnings.extend(skipped.into_iter().map(|error| ResourceScanWarning {
                    file_path: file_path.clone(),
                    error,
                }));
                result
                    .store
                    .insert_set(info.scope.clone(), &info.locale, set);
                result.files_loaded += 1;
            }
            Err(e) => {
                result.warnings.push(ResourceScanWarning {
                    file_path,
                    error: format!("{:#}", e),
                });
            }
        }
    }

    Ok(result)
}
