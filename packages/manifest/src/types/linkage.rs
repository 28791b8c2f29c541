use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::discovery::{default_include_dir, default_library_dir};

/// Compiler and linker inputs contributed by the primary SDK.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LinkageSettings {
    /// Preprocessor definitions the SDK headers need to compile as a DLL.
    #[serde(default = "default_definitions")]
    pub definitions: Vec<String>,

    /// Libraries linked on the supported platform, in link order.
    #[serde(default = "default_libraries")]
    pub libraries: Vec<String>,
}

impl Default for LinkageSettings {
    fn default() -> Self {
        Self {
            definitions: default_definitions(),
            libraries: default_libraries(),
        }
    }
}

fn default_definitions() -> Vec<String> {
    vec!["NT_PLUGIN=1".to_string(), "REQUIRE_IOSTREAM=1".to_string()]
}

fn default_libraries() -> Vec<String> {
    ["Foundation.lib", "OpenMaya.lib", "OpenMayaAnim.lib", "OpenMayaUI.lib"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Optional extended-interface SDK living beneath the install location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ExtensionSettings {
    /// Disable to never probe for the extension.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Sub-directory of the install location that holds the extension.
    #[serde(default = "default_extension_subdirectory")]
    pub subdirectory: String,

    #[serde(default = "default_include_dir")]
    pub include_dir: String,

    #[serde(default = "default_library_dir")]
    pub library_dir: String,

    #[serde(default = "default_extension_libraries")]
    pub libraries: Vec<String>,
}

impl Default for ExtensionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            subdirectory: default_extension_subdirectory(),
            include_dir: default_include_dir(),
            library_dir: default_library_dir(),
            libraries: default_extension_libraries(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_extension_subdirectory() -> String {
    "devkit/ExtendedInterface".to_string()
}

fn default_extension_libraries() -> Vec<String> {
    vec!["ExtendedInterface.lib".to_string()]
}
