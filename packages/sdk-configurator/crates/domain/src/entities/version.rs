use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Version identifier must not be empty")]
    Empty,
    #[error("Version identifier '{0}' must not contain path separators")]
    PathSeparator(String),
    #[error("Version identifier '{0}' must not refer to a relative directory")]
    RelativeSegment(String),
}

/// Identifier of a Maya SDK release, e.g. `2020`.
///
/// The identifier is appended verbatim to install paths and module names, so
/// it must be non-empty and a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MayaVersion(String);

impl MayaVersion {
    /// Releases the Live Link plug-in ships a target for.
    pub const KNOWN: [&'static str; 6] = ["2016", "2017", "2018", "2019", "2020", "2022"];

    pub fn parse(value: &str) -> Result<Self, VersionError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(VersionError::Empty);
        }
        if value.contains(['/', '\\']) {
            return Err(VersionError::PathSeparator(value.to_string()));
        }
        if value.chars().all(|c| c == '.') {
            return Err(VersionError::RelativeSegment(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn known() -> Vec<MayaVersion> {
        Self::KNOWN.iter().map(|v| Self(v.to_string())).collect()
    }

    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MayaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MayaVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MayaVersion {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MayaVersion> for String {
    fn from(version: MayaVersion) -> Self {
        version.0
    }
}
