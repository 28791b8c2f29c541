use application::{ConfigureRequest, ConfigureService, PostBuildService};
use domain::{
    BuildConfigurationKind, EnvironmentReader, MayaVersion, PostBuildStep, SdkSettings,
    TargetPlatform,
};
use infrastructure::{HostFileSystem, NativeRunner};
use std::fs;
use tempfile::tempdir;

struct FarmEnv(Option<String>);

impl EnvironmentReader for FarmEnv {
    fn var(&self, name: &str) -> Option<String> {
        if name == "UE_SDKS_ROOT" {
            self.0.clone()
        } else {
            None
        }
    }
}

#[test]
fn test_configure_and_relocate_2020_plugin_on_disk() {
    let root = tempdir().unwrap();
    let maya = root.path().join("autodesk").join("Maya2020");
    fs::create_dir_all(&maya).unwrap();
    let plugin_source = root
        .path()
        .join("UE")
        .join("Engine")
        .join("Source")
        .join("Programs")
        .join("MayaLiveLinkPlugin");
    fs::create_dir_all(&plugin_source).unwrap();

    let mut settings = SdkSettings::default();
    settings.discovery.install_prefix =
        format!("{}", root.path().join("autodesk").join("Maya").display());

    let service = ConfigureService::new(settings, Box::new(HostFileSystem), Box::new(FarmEnv(None)));
    let config = service
        .configure(&ConfigureRequest {
            version: MayaVersion::parse("2020").unwrap(),
            platform: TargetPlatform::Win64,
            configuration: BuildConfigurationKind::Development,
            start_dir: plugin_source,
        })
        .unwrap();

    assert_eq!(config.install.path, maya);
    assert_eq!(config.delta.definitions.len(), 2);
    assert_eq!(config.delta.include_paths, vec![maya.join("include")]);
    assert_eq!(config.delta.libraries.len(), 4);

    match config.relocation.steps.last().unwrap() {
        PostBuildStep::CopyRename { from, to } => {
            assert_eq!(from.file_name().unwrap(), "MayaLiveLinkPlugin2020.dll");
            assert_eq!(to.file_name().unwrap(), "MayaLiveLinkPlugin2020.mll");
        }
        other => panic!("expected a rename, got {:?}", other),
    }

    // Pretend the linker ran.
    fs::create_dir_all(&config.relocation.link_output_dir).unwrap();
    fs::write(&config.relocation.primary_artifact, b"MZ").unwrap();

    let ran = PostBuildService::new(NativeRunner::new())
        .run(&config.relocation, config.platform)
        .unwrap();
    assert_eq!(ran, 2);
    assert_eq!(fs::read(&config.relocation.plugin_artifact).unwrap(), b"MZ");
}

#[test]
fn test_build_farm_sdk_with_extension() {
    let root = tempdir().unwrap();
    let sdk = root
        .path()
        .join("sdks")
        .join("HostWin64")
        .join("Win64")
        .join("Maya")
        .join("2022");
    fs::create_dir_all(sdk.join("devkit").join("ExtendedInterface")).unwrap();

    let mut settings = SdkSettings::default();
    settings.discovery.install_prefix =
        format!("{}", root.path().join("not-installed").join("Maya").display());
    let farm_root = root.path().join("sdks").display().to_string();

    let service = ConfigureService::new(
        settings,
        Box::new(HostFileSystem),
        Box::new(FarmEnv(Some(farm_root))),
    );
    let (install, outcome) = service.probe(&MayaVersion::parse("2022").unwrap(), TargetPlatform::Win64);

    assert_eq!(install.path, sdk);
    assert!(outcome.features.sdk);
    assert!(outcome.features.extension);
    assert_eq!(outcome.delta.include_paths.len(), 2);
    assert_eq!(outcome.delta.libraries.len(), 5);
}

#[test]
fn test_post_build_fails_when_link_output_missing() {
    let root = tempdir().unwrap();
    let plugin_source = root
        .path()
        .join("Engine")
        .join("Source")
        .join("Programs")
        .join("MayaLiveLinkPlugin");
    fs::create_dir_all(&plugin_source).unwrap();

    let service = ConfigureService::new(
        SdkSettings::default(),
        Box::new(HostFileSystem),
        Box::new(FarmEnv(None)),
    );
    let plan = service
        .relocate(&ConfigureRequest {
            version: MayaVersion::parse("2019").unwrap(),
            platform: TargetPlatform::Win64,
            configuration: BuildConfigurationKind::Debug,
            start_dir: plugin_source,
        })
        .unwrap();
    fs::create_dir_all(&plan.link_output_dir).unwrap();

    let result = PostBuildService::new(NativeRunner::new()).run(&plan, TargetPlatform::Win64);
    assert!(result.is_err());
    assert!(!plan.plugin_artifact.exists());
}
