use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which optional pieces of the SDK were found on disk.
///
/// Only ever produced by probing; never set by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureAvailability {
    pub sdk: bool,
    pub extension: bool,
}

/// Build-configuration additions produced by a successful probe.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigurationDelta {
    pub definitions: Vec<String>,
    pub include_paths: Vec<PathBuf>,
    pub library_paths: Vec<PathBuf>,
    pub libraries: Vec<String>,
}

impl ConfigurationDelta {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
            && self.include_paths.is_empty()
            && self.library_paths.is_empty()
            && self.libraries.is_empty()
    }

    /// Append `other` after `self`, keeping first occurrences only.
    pub fn merge(self, other: ConfigurationDelta) -> Self {
        Self {
            definitions: concat_unique(self.definitions, other.definitions),
            include_paths: concat_unique(self.include_paths, other.include_paths),
            library_paths: concat_unique(self.library_paths, other.library_paths),
            libraries: concat_unique(self.libraries, other.libraries),
        }
    }
}

fn concat_unique<T: PartialEq>(mut first: Vec<T>, second: Vec<T>) -> Vec<T> {
    for item in second {
        if !first.contains(&item) {
            first.push(item);
        }
    }
    first
}

/// Result of probing an install location.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProbeOutcome {
    pub features: FeatureAvailability,
    pub delta: ConfigurationDelta,
}
