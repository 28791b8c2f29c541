use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// How an install location was arrived at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InstallSource {
    /// The conventional per-version install path.
    Conventional,
    /// Rooted at the directory named by an environment variable.
    EnvironmentFallback { variable: String },
}

impl fmt::Display for InstallSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallSource::Conventional => write!(f, "conventional install path"),
            InstallSource::EnvironmentFallback { variable } => {
                write!(f, "${} fallback", variable)
            }
        }
    }
}

/// A resolved SDK install directory. It may not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallLocation {
    pub path: PathBuf,
    pub source: InstallSource,
}

impl InstallLocation {
    /// Resolve a sub-path written with `/` or `\` separators beneath the install location.
    pub fn subpath(&self, relative: &str) -> PathBuf {
        join_relative(&self.path, relative)
    }
}

/// Join `relative` onto `base` one segment at a time so either separator works on every host.
pub fn join_relative(base: &Path, relative: &str) -> PathBuf {
    relative
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .fold(base.to_path_buf(), |path, segment| path.join(segment))
}
