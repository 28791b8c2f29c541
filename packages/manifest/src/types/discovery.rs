use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the SDK install location is found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DiscoverySettings {
    /// Conventional install path prefix. The version identifier is appended
    /// verbatim (e.g. `C:\Program Files\Autodesk\Maya` + `2020`).
    #[serde(default = "default_install_prefix")]
    pub install_prefix: String,

    /// Environment variable naming an alternate SDK root on build machines.
    #[serde(default = "default_sdk_root_var")]
    pub sdk_root_var: String,

    /// Path segments joined between the alternate root and the version.
    #[serde(default = "default_fallback_segments")]
    pub fallback_segments: Vec<String>,

    /// Header directory beneath the install location.
    #[serde(default = "default_include_dir")]
    pub include_dir: String,

    /// Library directory beneath the install location.
    #[serde(default = "default_library_dir")]
    pub library_dir: String,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            install_prefix: default_install_prefix(),
            sdk_root_var: default_sdk_root_var(),
            fallback_segments: default_fallback_segments(),
            include_dir: default_include_dir(),
            library_dir: default_library_dir(),
        }
    }
}

fn default_install_prefix() -> String {
    r"C:\Program Files\Autodesk\Maya".to_string()
}

fn default_sdk_root_var() -> String {
    "UE_SDKS_ROOT".to_string()
}

fn default_fallback_segments() -> Vec<String> {
    vec!["HostWin64".to_string(), "Win64".to_string(), "Maya".to_string()]
}

pub(crate) fn default_include_dir() -> String {
    "include".to_string()
}

pub(crate) fn default_library_dir() -> String {
    "lib".to_string()
}
