use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Module declaration shared by every version of the plug-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRules {
    pub private_include_paths: Vec<String>,
    pub private_dependency_modules: Vec<String>,
}

impl ModuleRules {
    pub fn live_link_plugin() -> Self {
        Self {
            // For LaunchEngineLoop.cpp
            private_include_paths: vec![
                "Runtime/Launch/Public".to_string(),
                "Runtime/Launch/Private".to_string(),
            ],
            private_dependency_modules: [
                "Core",
                "CoreUObject",
                "ApplicationCore",
                "Projects",
                "UdpMessaging",
                "LiveLinkInterface",
                "LiveLinkMessageBusFramework",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetType {
    Program,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkType {
    Monolithic,
}

/// Target declaration for one plug-in version.
///
/// The plug-in only needs a minimal slice of the engine, hence the switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRules {
    pub target_type: TargetType,
    pub link_type: LinkType,
    pub compile_as_dll: bool,
    pub solution_directory: String,
    pub launch_module_name: String,
    pub exe_binaries_sub_folder: PathBuf,
    pub build_developer_tools: bool,
    pub use_malloc_profiler: bool,
    pub build_with_editor_only_data: bool,
    pub compile_against_engine: bool,
    pub compile_against_core_uobject: bool,
    pub compile_icu: bool,
    pub has_exports: bool,
    pub build_in_solution_by_default: bool,
}

impl TargetRules {
    pub fn live_link_plugin(launch_module_name: String, exe_binaries_sub_folder: PathBuf) -> Self {
        Self {
            target_type: TargetType::Program,
            link_type: LinkType::Monolithic,
            compile_as_dll: true,
            solution_directory: "Programs/LiveLink".to_string(),
            launch_module_name,
            exe_binaries_sub_folder,
            build_developer_tools: false,
            use_malloc_profiler: false,
            build_with_editor_only_data: true,
            compile_against_engine: false,
            compile_against_core_uobject: true,
            compile_icu: false,
            has_exports: true,
            build_in_solution_by_default: false,
        }
    }
}
