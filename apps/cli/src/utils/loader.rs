use anyhow::{Context, Result};
use sdk_manifest::{SdkSettings, SETTINGS_CANDIDATES};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::CliError;

/// Settings from an explicit path, else the first candidate file in
/// `start_dir`, else built-in defaults.
pub fn resolve_settings(explicit: Option<&Path>, start_dir: &Path) -> Result<(Option<PathBuf>, SdkSettings)> {
    if let Some(path) = explicit {
        return load_settings(path).map(|s| (Some(path.to_path_buf()), s));
    }

    for filename in SETTINGS_CANDIDATES {
        let path = start_dir.join(filename);
        if path.exists() {
            tracing::debug!(path = %path.display(), "Using settings file");
            return load_settings(&path).map(|s| (Some(path), s));
        }
    }

    Ok((None, SdkSettings::default()))
}

/// Loads settings from a specific path, detecting format by extension.
pub fn load_settings(path: &Path) -> Result<SdkSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {:?}", path))?;

    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    SdkSettings::from_str_with_format(&content, ext)
        .map_err(|e| CliError::Config(format!("{}: {:#}", path.display(), e)).into())
}
