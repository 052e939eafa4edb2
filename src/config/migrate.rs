//! Configuration file upkeep. The key set grew across releases
//! (utc_offset_minutes, bowel_window, kcal_per_ml arrived after the first
//! one), so `config --check` reports what an old file is missing and
//! `config --migrate` fills the gaps with defaults without touching the
//! values already there.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;

/// Keys every up-to-date config file carries.
const EXPECTED_KEYS: [&str; 4] = [
    "database",
    "utc_offset_minutes",
    "bowel_window",
    "kcal_per_ml",
];

/// Return the list of expected keys missing from the config file.
pub fn missing_keys() -> AppResult<Vec<String>> {
    let path = Config::config_file();
    if !path.exists() {
        return Err(AppError::Config(format!(
            "Config file not found: {} (run 'carelog init' first)",
            path.display()
        )));
    }

    let content = fs::read_to_string(&path)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("Cannot parse {}: {}", path.display(), e)))?;

    let mut missing = Vec::new();
    if let Some(map) = yaml.as_mapping() {
        for key in EXPECTED_KEYS {
            if !map.contains_key(&Value::String(key.to_string())) {
                missing.push(key.to_string());
            }
        }
    } else {
        missing.extend(EXPECTED_KEYS.iter().map(|k| k.to_string()));
    }

    Ok(missing)
}

/// Print the check result.
pub fn check() -> AppResult<()> {
    let missing = missing_keys()?;
    if missing.is_empty() {
        success("Configuration file is up to date.");
    } else {
        info(format!(
            "Configuration file is missing: {} (run 'carelog config --migrate')",
            missing.join(", ")
        ));
    }
    Ok(())
}

/// Add missing keys with their default values, preserving existing ones.
/// Returns true if the file was rewritten.
pub fn migrate() -> AppResult<bool> {
    let missing = missing_keys()?;
    if missing.is_empty() {
        success("Configuration file already up to date, nothing to migrate.");
        return Ok(false);
    }

    let path = Config::config_file();
    let content = fs::read_to_string(&path)?;
    let mut yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("Cannot parse {}: {}", path.display(), e)))?;

    let defaults = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(format!("Cannot build defaults: {}", e)))?;

    let map = yaml
        .as_mapping_mut()
        .ok_or_else(|| AppError::Config(format!("{} is not a YAML mapping", path.display())))?;

    for key in &missing {
        let k = Value::String(key.clone());
        if let Some(default_map) = defaults.as_mapping() {
            if let Some(v) = default_map.get(&k) {
                map.insert(k, v.clone());
            }
        }
    }

    let serialized = serde_yaml::to_string(&yaml)
        .map_err(|e| AppError::Config(format!("Cannot serialize {}: {}", path.display(), e)))?;

    // Inject documentation comment right after the `bowel_window` line
    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        if line.starts_with("bowel_window:") {
            new_content.push_str(
                "# bowel_window options:\n\
                 #   trailing → count bowel movements over the last 24 hours\n\
                 #   day      → count bowel movements over the current calendar day\n",
            );
        }
    }

    fs::write(&path, new_content)?;

    success(format!(
        "Configuration migrated, added: {}",
        missing.join(", ")
    ));

    Ok(true)
}
