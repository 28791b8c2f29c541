use std::path::Path;

/// Read-only view of the filesystem used while configuring.
///
/// A probe result is authoritative for the rest of the run; implementations
/// do not retry.
pub trait FileSystemProbe {
    fn dir_exists(&self, path: &Path) -> bool;
}

/// Read-only view of the process environment.
pub trait EnvironmentReader {
    fn var(&self, name: &str) -> Option<String>;
}
