use anyhow::{Context, Result};
use domain::ports::probe::{EnvironmentReader, FileSystemProbe};
use std::path::{Path, PathBuf};

/// Probes the real filesystem.
pub struct HostFileSystem;

impl FileSystemProbe for HostFileSystem {
    fn dir_exists(&self, path: &Path) -> bool {
        let exists = path.is_dir();
        tracing::debug!(path = %path.display(), exists, "Probed directory");
        exists
    }
}

/// Reads variables from the current process environment.
pub struct ProcessEnvironment;

impl EnvironmentReader for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Absolute form of `path` without Windows verbatim prefixes, so it can be
/// pasted into shell commands.
pub fn absolute_dir(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).with_context(|| format!("Failed to resolve directory: {:?}", path))
}
