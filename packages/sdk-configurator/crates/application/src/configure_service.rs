use std::path::PathBuf;

use domain::entities::rules::{ModuleRules, TargetRules};
use domain::{
    compute_output_relocation, probe_and_configure, resolve_install_location, BuildConfiguration,
    BuildConfigurationKind, EnvironmentReader, FileSystemProbe, InstallLocation, MayaVersion,
    ProbeOutcome, RelocationError, RelocationPlan, RelocationRequest, SdkSettings, TargetPlatform,
};
use infrastructure::{HostFileSystem, ProcessEnvironment};

/// One plug-in target to configure.
#[derive(Debug, Clone)]
pub struct ConfigureRequest {
    pub version: MayaVersion,
    pub platform: TargetPlatform,
    pub configuration: BuildConfigurationKind,
    /// Directory holding the plug-in's build description.
    pub start_dir: PathBuf,
}

/// Install status of one SDK version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionStatus {
    pub version: MayaVersion,
    pub install: InstallLocation,
    pub installed: bool,
}

/// Wires locate → probe → relocate into a single `BuildConfiguration`.
///
/// Each call works from fresh probes; nothing is cached between calls.
pub struct ConfigureService {
    settings: SdkSettings,
    fs: Box<dyn FileSystemProbe>,
    env: Box<dyn EnvironmentReader>,
}

impl ConfigureService {
    pub fn new(
        settings: SdkSettings,
        fs: Box<dyn FileSystemProbe>,
        env: Box<dyn EnvironmentReader>,
    ) -> Self {
        Self { settings, fs, env }
    }

    /// Service backed by the real filesystem and process environment.
    pub fn host(settings: SdkSettings) -> Self {
        Self::new(settings, Box::new(HostFileSystem), Box::new(ProcessEnvironment))
    }

    pub fn settings(&self) -> &SdkSettings {
        &self.settings
    }

    pub fn module_name(&self, version: &MayaVersion) -> String {
        format!("{}{}", self.settings.output.module_prefix, version)
    }

    pub fn locate(&self, version: &MayaVersion) -> InstallLocation {
        let install = resolve_install_location(
            version,
            &self.settings.discovery,
            self.fs.as_ref(),
            self.env.as_ref(),
        );
        tracing::debug!(%version, path = %install.path.display(), source = %install.source, "Resolved install location");
        install
    }

    /// Whether the SDK directory of `install` exists.
    pub fn is_installed(&self, install: &InstallLocation) -> bool {
        self.fs.dir_exists(&install.path)
    }

    pub fn probe(&self, version: &MayaVersion, platform: TargetPlatform) -> (InstallLocation, ProbeOutcome) {
        let install = self.locate(version);
        let outcome = probe_and_configure(&install, platform, &self.settings, self.fs.as_ref());

        if !outcome.features.sdk {
            tracing::info!(%version, path = %install.path.display(), "Maya SDK not found, building without SDK support");
        }
        if outcome.features.extension {
            tracing::info!(%version, "Extended interface SDK found");
        }
        (install, outcome)
    }

    pub fn relocate(&self, request: &ConfigureRequest) -> Result<RelocationPlan, RelocationError> {
        compute_output_relocation(&RelocationRequest {
            module_name: self.module_name(&request.version),
            version: request.version.clone(),
            platform: request.platform,
            configuration: request.configuration,
            start_dir: request.start_dir.clone(),
            staging_sub_folder: self.settings.output.staging_sub_folder.clone(),
        })
    }

    pub fn configure(&self, request: &ConfigureRequest) -> Result<BuildConfiguration, RelocationError> {
        let (install, outcome) = self.probe(&request.version, request.platform);
        let relocation = self.relocate(request)?;

        tracing::info!(
            version = %request.version,
            output = %relocation.output_name,
            sub_folder = %relocation.binaries_sub_folder.display(),
            "Configured plug-in target"
        );

        let target = TargetRules::live_link_plugin(
            self.module_name(&request.version),
            relocation.binaries_sub_folder.clone(),
        );

        Ok(BuildConfiguration {
            version: request.version.clone(),
            platform: request.platform,
            configuration: request.configuration,
            install,
            features: outcome.features,
            module: ModuleRules::live_link_plugin(),
            delta: outcome.delta,
            target,
            relocation,
        })
    }

    /// Install status for every version a target ships for.
    pub fn known_versions(&self) -> Vec<VersionStatus> {
        MayaVersion::known()
            .into_iter()
            .map(|version| {
                let install = self.locate(&version);
                let installed = self.is_installed(&install);
                VersionStatus {
                    version,
                    install,
                    installed,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::Path;

    struct Dirs(HashSet<PathBuf>);

    impl FileSystemProbe for Dirs {
        fn dir_exists(&self, path: &Path) -> bool {
            self.0.contains(path)
        }
    }

    struct NoEnv;

    impl EnvironmentReader for NoEnv {
        fn var(&self, _name: &str) -> Option<String> {
            None
        }
    }

    fn service(installed: &[&str]) -> ConfigureService {
        let mut settings = SdkSettings::default();
        settings.discovery.install_prefix = "/autodesk/Maya".to_string();
        let dirs = installed.iter().map(PathBuf::from).collect();
        ConfigureService::new(settings, Box::new(Dirs(dirs)), Box::new(NoEnv))
    }

    fn request(version: &str) -> ConfigureRequest {
        ConfigureRequest {
            version: MayaVersion::parse(version).unwrap(),
            platform: TargetPlatform::Win64,
            configuration: BuildConfigurationKind::Development,
            start_dir: PathBuf::from("/ue/Engine/Source/Programs/MayaLiveLinkPlugin"),
        }
    }

    #[test]
    fn test_configure_merges_rules_delta_and_relocation() {
        let config = service(&["/autodesk/Maya2020"]).configure(&request("2020")).unwrap();

        assert!(config.features.sdk);
        assert_eq!(config.delta.libraries.len(), 4);
        assert_eq!(config.module.private_dependency_modules.len(), 7);
        assert_eq!(config.target.launch_module_name, "MayaLiveLinkPlugin2020");
        assert_eq!(config.target.exe_binaries_sub_folder, config.relocation.binaries_sub_folder);
        assert_eq!(config.relocation.output_name, "MayaLiveLinkPlugin2020");
        assert_eq!(config.post_build_commands().len(), 2);
    }

    #[test]
    fn test_missing_sdk_still_configures_target() {
        let config = service(&[]).configure(&request("2018")).unwrap();
        assert!(!config.features.sdk);
        assert!(config.delta.is_empty());
        assert_eq!(config.target.launch_module_name, "MayaLiveLinkPlugin2018");
    }

    #[test]
    fn test_relocation_failure_propagates() {
        let mut bad = request("2020");
        bad.start_dir = PathBuf::from("/tmp/MayaLiveLinkPlugin");
        assert!(matches!(
            service(&[]).configure(&bad),
            Err(RelocationError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_installed_check_uses_filesystem_port() {
        let service = service(&["/autodesk/Maya2019"]);
        let found = service.locate(&MayaVersion::parse("2019").unwrap());
        let missing = service.locate(&MayaVersion::parse("2020").unwrap());
        assert!(service.is_installed(&found));
        assert!(!service.is_installed(&missing));
    }

    #[test]
    fn test_known_versions_report_install_state() {
        let statuses = service(&["/autodesk/Maya2017", "/autodesk/Maya2022"]).known_versions();
        let installed: Vec<_> = statuses
            .iter()
            .filter(|s| s.installed)
            .map(|s| s.version.as_str())
            .collect();
        assert_eq!(statuses.len(), 6);
        assert_eq!(installed, vec!["2017", "2022"]);
    }
}
