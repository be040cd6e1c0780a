use crate::error::{RatingError, Result};
use crate::types::config::RatingConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "rating.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".rating/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/cardrating/config.toml";
const PROFILES_KEY: &str = "profiles";

/// Loads `rating.toml` from `root`, layered over the user's global config and
/// under `.rating/local.toml`.
pub fn load_config(root: &Path) -> Result<RatingConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<RatingConfig> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Err(RatingError::ConfigNotFound(repo_path.display().to_string()));
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    into_config(merged)
}

/// Loads a single explicit config file with no layering.
pub fn load_config_file(path: &Path) -> Result<RatingConfig> {
    if !path.exists() {
        return Err(RatingError::ConfigNotFound(path.display().to_string()));
    }
    into_config(read_toml_value(path)?)
}

fn into_config(value: Value) -> Result<RatingConfig> {
    value
        .try_into()
        .map_err(|e: toml::de::Error| RatingError::ConfigParse(e.to_string()))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_layer(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RatingError::ConfigParse(format!("{}: {}", path.display(), e)))
}

// Each `[profiles.<name>]` table of a later layer replaces the earlier one
// whole; everything else goes through `merge_toml`.
fn merge_layer(base: &mut Value, mut overlay: Value) {
    if let (Value::Table(base_table), Value::Table(overlay_table)) = (&mut *base, &mut overlay) {
        match overlay_table.remove(PROFILES_KEY) {
            Some(Value::Table(profiles)) => {
                let slot = base_table
                    .entry(PROFILES_KEY)
                    .or_insert(Value::Table(Map::new()));
                match slot {
                    Value::Table(existing) => {
                        for (name, weights) in profiles {
                            existing.insert(name, weights);
                        }
                    }
                    other => *other = Value::Table(profiles),
                }
            }
            Some(other) => {
                overlay_table.insert(PROFILES_KEY.to_string(), other);
            }
            None => {}
        }
    }
    merge_toml(base, overlay);
}

// Tables merge key by key; arrays and scalars are replaced whole, so a
// later layer's [[stats]] list overrides the earlier one entirely.
fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
