use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseKindError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

/// Platform a plug-in is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetPlatform {
    Win64,
    Linux,
    Mac,
}

impl TargetPlatform {
    /// SDK libraries are only linked on this platform.
    pub const LINK_SUPPORTED: TargetPlatform = TargetPlatform::Win64;

    pub fn links_sdk_libraries(self) -> bool {
        self == Self::LINK_SUPPORTED
    }

    /// Extension the linker gives the shared library.
    pub fn library_extension(self) -> &'static str {
        match self {
            TargetPlatform::Win64 => "dll",
            TargetPlatform::Linux => "so",
            TargetPlatform::Mac => "dylib",
        }
    }

    /// Extension Maya expects for a plug-in.
    pub fn plugin_extension(self) -> &'static str {
        match self {
            TargetPlatform::Win64 => "mll",
            TargetPlatform::Linux => "so",
            TargetPlatform::Mac => "bundle",
        }
    }

    pub fn uses_windows_shell(self) -> bool {
        self == TargetPlatform::Win64
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetPlatform::Win64 => write!(f, "Win64"),
            TargetPlatform::Linux => write!(f, "Linux"),
            TargetPlatform::Mac => write!(f, "Mac"),
        }
    }
}

impl FromStr for TargetPlatform {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "win64" | "windows" => Ok(TargetPlatform::Win64),
            "linux" => Ok(TargetPlatform::Linux),
            "mac" | "macos" | "darwin" => Ok(TargetPlatform::Mac),
            _ => Err(ParseKindError {
                kind: "platform",
                value: s.to_string(),
                expected: "Win64, Linux, Mac",
            }),
        }
    }
}

/// Build configuration, as named by the engine build tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BuildConfigurationKind {
    Debug,
    DebugGame,
    #[default]
    Development,
    Shipping,
    Test,
}

impl fmt::Display for BuildConfigurationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildConfigurationKind::Debug => write!(f, "Debug"),
            BuildConfigurationKind::DebugGame => write!(f, "DebugGame"),
            BuildConfigurationKind::Development => write!(f, "Development"),
            BuildConfigurationKind::Shipping => write!(f, "Shipping"),
            BuildConfigurationKind::Test => write!(f, "Test"),
        }
    }
}

impl FromStr for BuildConfigurationKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(BuildConfigurationKind::Debug),
            "debuggame" => Ok(BuildConfigurationKind::DebugGame),
            "development" => Ok(BuildConfigurationKind::Development),
            "shipping" => Ok(BuildConfigurationKind::Shipping),
            "test" => Ok(BuildConfigurationKind::Test),
            _ => Err(ParseKindError {
                kind: "configuration",
                value: s.to_string(),
                expected: "Debug, DebugGame, Development, Shipping, Test",
            }),
        }
    }
}

/// Platform detection service
pub struct PlatformDetector;

impl PlatformDetector {
    /// Target platform matching the machine we run on, if it is one we build for
    pub fn host_target() -> Option<TargetPlatform> {
        let info = os_info::get();
        Self::target_for(info.os_type(), std::env::consts::ARCH)
    }

    fn target_for(os_type: os_info::Type, arch: &str) -> Option<TargetPlatform> {
        match os_type {
            os_info::Type::Windows if arch == "x86_64" => Some(TargetPlatform::Win64),
            os_info::Type::Macos => Some(TargetPlatform::Mac),
            os_info::Type::Windows => None,
            os_info::Type::Alpine
            | os_info::Type::Arch
            | os_info::Type::CentOS
            | os_info::Type::Debian
            | os_info::Type::Fedora
            | os_info::Type::Linux
            | os_info::Type::Mint
            | os_info::Type::NixOS
            | os_info::Type::openSUSE
            | os_info::Type::OracleLinux
            | os_info::Type::Pop
            | os_info::Type::Redhat
            | os_info::Type::RedHatEnterprise
            | os_info::Type::Ubuntu => Some(TargetPlatform::Linux),
            _ => None,
        }
    }
}
