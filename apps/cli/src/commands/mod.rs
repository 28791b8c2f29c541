use anyhow::{Context, Result};
use clap::Args;
use sdk_configurator::application::{ConfigureRequest, ConfigureService};
use sdk_configurator::domain::{
    BuildConfigurationKind, MayaVersion, PlatformDetector, TargetPlatform,
};
use sdk_configurator::infrastructure::system::host::absolute_dir;
use std::path::{Path, PathBuf};

use crate::core::error::CliError;
use crate::utils::loader::resolve_settings;

pub mod configure;
pub mod locate;
pub mod post_build;
pub mod probe;
pub mod relocate;
pub mod schema;
pub mod versions;

pub use configure::ConfigureCommand;
pub use locate::LocateCommand;
pub use post_build::PostBuildCommand;
pub use probe::ProbeCommand;
pub use relocate::RelocateCommand;
pub use schema::SchemaCommand;
pub use versions::VersionsCommand;

/// Identifies one plug-in target.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Maya SDK version (e.g. 2020)
    #[arg(long)]
    pub version: MayaVersion,

    /// Target platform; defaults to the host
    #[arg(long)]
    pub platform: Option<TargetPlatform>,

    /// Build configuration
    #[arg(long, default_value_t = BuildConfigurationKind::Development)]
    pub configuration: BuildConfigurationKind,

    /// Directory holding the plug-in build description; defaults to the current directory
    #[arg(long)]
    pub from: Option<PathBuf>,
}

impl TargetArgs {
    pub fn platform(&self) -> Result<TargetPlatform> {
        resolve_platform(self.platform)
    }

    pub fn request(&self) -> Result<ConfigureRequest> {
        let start = match &self.from {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to read current directory")?,
        };

        Ok(ConfigureRequest {
            version: self.version.clone(),
            platform: self.platform()?,
            configuration: self.configuration,
            start_dir: absolute_dir(&start)?,
        })
    }
}

pub fn resolve_platform(explicit: Option<TargetPlatform>) -> Result<TargetPlatform> {
    explicit
        .or_else(PlatformDetector::host_target)
        .ok_or_else(|| CliError::UnsupportedHost.into())
}

/// Configure service backed by the host, with settings resolved from the
/// current directory unless a path is given.
pub fn host_service(settings: Option<&Path>) -> Result<ConfigureService> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let (path, settings) = resolve_settings(settings, &cwd)?;
    if let Some(path) = path {
        tracing::info!(settings = %path.display(), "Loaded settings");
    }
    Ok(ConfigureService::host(settings))
}
