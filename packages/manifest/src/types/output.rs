use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Naming and placement of the built plug-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    /// Module name prefix; the version identifier is appended.
    #[serde(default = "default_module_prefix")]
    pub module_prefix: String,

    /// Folder beneath the default output directory that receives one
    /// sub-folder per version.
    #[serde(default = "default_staging_sub_folder")]
    pub staging_sub_folder: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            module_prefix: default_module_prefix(),
            staging_sub_folder: default_staging_sub_folder(),
        }
    }
}

fn default_module_prefix() -> String {
    "MayaLiveLinkPlugin".to_string()
}

fn default_staging_sub_folder() -> String {
    "Maya".to_string()
}
