use crate::entities::install::{InstallLocation, InstallSource};
use crate::entities::version::MayaVersion;
use crate::ports::probe::{EnvironmentReader, FileSystemProbe};
use sdk_manifest::DiscoverySettings;
use std::path::PathBuf;

/// Find where the SDK for `version` should be installed.
///
/// The conventional path wins whenever it exists. Otherwise a non-empty
/// SDK-root environment variable supplies a fallback. Existence of the
/// returned path is not guaranteed; callers probe it again.
pub fn resolve_install_location(
    version: &MayaVersion,
    settings: &DiscoverySettings,
    fs: &dyn FileSystemProbe,
    env: &dyn EnvironmentReader,
) -> InstallLocation {
    let conventional = PathBuf::from(format!("{}{}", settings.install_prefix, version));

    if fs.dir_exists(&conventional) {
        return InstallLocation {
            path: conventional,
            source: InstallSource::Conventional,
        };
    }

    match env.var(&settings.sdk_root_var) {
        Some(root) if !root.trim().is_empty() => {
            let path = settings
                .fallback_segments
                .iter()
                .fold(PathBuf::from(root.trim()), |path, segment| path.join(segment))
                .join(version.as_str());
            InstallLocation {
                path,
                source: InstallSource::EnvironmentFallback {
                    variable: settings.sdk_root_var.clone(),
                },
            }
        }
        _ => InstallLocation {
            path: conventional,
            source: InstallSource::Conventional,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configurator::fakes::{FakeEnv, FakeFs};

    fn settings() -> DiscoverySettings {
        DiscoverySettings {
            install_prefix: "/opt/autodesk/maya".to_string(),
            ..DiscoverySettings::default()
        }
    }

    fn v2020() -> MayaVersion {
        MayaVersion::parse("2020").unwrap()
    }

    #[test]
    fn test_conventional_path_wins_when_present() {
        let fs = FakeFs::with_dirs(&["/opt/autodesk/maya2020"]);
        let env = FakeEnv::with("UE_SDKS_ROOT", "/sdks");

        let location = resolve_install_location(&v2020(), &settings(), &fs, &env);
        assert_eq!(location.path, PathBuf::from("/opt/autodesk/maya2020"));
        assert_eq!(location.source, InstallSource::Conventional);
    }

    #[test]
    fn test_environment_fallback() {
        let fs = FakeFs::default();
        let env = FakeEnv::with("UE_SDKS_ROOT", "/sdks");

        let location = resolve_install_location(&v2020(), &settings(), &fs, &env);
        assert_eq!(
            location.path,
            PathBuf::from("/sdks/HostWin64/Win64/Maya/2020")
        );
        assert_eq!(
            location.source,
            InstallSource::EnvironmentFallback {
                variable: "UE_SDKS_ROOT".to_string()
            }
        );
    }

    #[test]
    fn test_empty_variable_is_ignored() {
        let fs = FakeFs::default();
        for env in [FakeEnv::default(), FakeEnv::with("UE_SDKS_ROOT", "  ")] {
            let location = resolve_install_location(&v2020(), &settings(), &fs, &env);
            assert_eq!(location.path, PathBuf::from("/opt/autodesk/maya2020"));
            assert_eq!(location.source, InstallSource::Conventional);
        }
    }

    #[test]
    fn test_fallback_does_not_require_existence() {
        // Neither path exists: the fallback is still returned, unverified.
        let fs = FakeFs::default();
        let env = FakeEnv::with("UE_SDKS_ROOT", "/missing");
        let location = resolve_install_location(&v2020(), &settings(), &fs, &env);
        assert!(!fs.dir_exists(&location.path));
        assert!(location.path.ends_with("Maya/2020"));
    }

    #[test]
    fn test_default_prefix_is_windows_program_files() {
        let fs = FakeFs::default();
        let env = FakeEnv::default();
        let location =
            resolve_install_location(&v2020(), &DiscoverySettings::default(), &fs, &env);
        assert_eq!(
            location.path,
            PathBuf::from(r"C:\Program Files\Autodesk\Maya2020")
        );
    }
}
