use crate::entities::delta::{ConfigurationDelta, FeatureAvailability};
use crate::entities::install::InstallLocation;
use crate::entities::relocation::RelocationPlan;
use crate::entities::rules::{ModuleRules, TargetRules};
use crate::entities::version::MayaVersion;
use crate::system::platform::{BuildConfigurationKind, TargetPlatform};
use serde::{Deserialize, Serialize};

/// Everything a build needs to compile, link and place one plug-in version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfiguration {
    pub version: MayaVersion,
    pub platform: TargetPlatform,
    pub configuration: BuildConfigurationKind,
    pub install: InstallLocation,
    pub features: FeatureAvailability,
    pub module: ModuleRules,
    pub delta: ConfigurationDelta,
    pub target: TargetRules,
    pub relocation: RelocationPlan,
}

impl BuildConfiguration {
    /// Rendered post-build commands, in execution order.
    pub fn post_build_commands(&self) -> Vec<String> {
        self.relocation.command_lines(self.platform)
    }
}
