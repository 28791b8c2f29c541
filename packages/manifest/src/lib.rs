pub mod types;
pub use types::*;

use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// File names probed, in order, when no settings path is given explicitly.
pub const SETTINGS_CANDIDATES: [&str; 3] = ["sdk.json", "sdk.toml", "sdk.yaml"];

/// Settings that drive SDK discovery and output relocation.
///
/// Every section is optional. An empty file (or no file at all) yields the
/// layout used by the Maya Live Link plug-in build scripts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema, Default)]
#[serde(deny_unknown_fields)]
pub struct SdkSettings {
    /// Where the SDK is installed and how to fall back on build machines.
    #[serde(default)]
    pub discovery: DiscoverySettings,

    /// Defines and libraries added when the SDK is present.
    #[serde(default)]
    pub linkage: LinkageSettings,

    /// Optional extended-interface SDK probed beneath the install location.
    #[serde(default)]
    pub extension: ExtensionSettings,

    /// Naming and placement of the produced plug-in.
    #[serde(default)]
    pub output: OutputSettings,
}

impl SdkSettings {
    /// Parse settings from a string, choosing the format from a file extension.
    pub fn from_str_with_format(content: &str, extension: &str) -> anyhow::Result<Self> {
        match extension {
            "json" => serde_json::from_str(content).context("Failed to parse JSON settings"),
            "toml" => toml::from_str(content).context("Failed to parse TOML settings"),
            "yaml" | "yml" => {
                serde_yaml::from_str(content).context("Failed to parse YAML settings")
            }
            _ => anyhow::bail!("Unsupported settings format: {}", extension),
        }
    }

    /// JSON schema describing the settings file.
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(SdkSettings)
    }
}
