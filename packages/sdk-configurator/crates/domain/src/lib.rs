pub mod configurator;
pub mod entities;
pub mod ports;
pub mod system;

pub use configurator::{
    compute_output_relocation, output_name, probe_and_configure, resolve_install_location,
};
pub use entities::configuration::BuildConfiguration;
pub use entities::delta::{ConfigurationDelta, FeatureAvailability, ProbeOutcome};
pub use entities::install::{InstallLocation, InstallSource};
pub use entities::relocation::{PostBuildStep, RelocationError, RelocationPlan, RelocationRequest};
pub use entities::rules::{ModuleRules, TargetRules};
pub use entities::version::{MayaVersion, VersionError};
pub use ports::post_build::{PostBuildError, PostBuildRunner};
pub use ports::probe::{EnvironmentReader, FileSystemProbe};
pub use system::platform::{BuildConfigurationKind, ParseKindError, PlatformDetector, TargetPlatform};

// Settings types are part of the domain vocabulary.
pub use sdk_manifest::{
    DiscoverySettings, ExtensionSettings, LinkageSettings, OutputSettings, SdkSettings,
};
