use crate::entities::delta::{ConfigurationDelta, FeatureAvailability, ProbeOutcome};
use crate::entities::install::{join_relative, InstallLocation};
use crate::ports::probe::FileSystemProbe;
use crate::system::platform::TargetPlatform;
use sdk_manifest::SdkSettings;

/// Probe an install location and derive the build-configuration additions.
///
/// A missing SDK is not an error: the primary delta is simply empty. The
/// extended-interface probe runs regardless of the primary result.
pub fn probe_and_configure(
    install: &InstallLocation,
    platform: TargetPlatform,
    settings: &SdkSettings,
    fs: &dyn FileSystemProbe,
) -> ProbeOutcome {
    let sdk = fs.dir_exists(&install.path);
    let primary = if sdk {
        primary_delta(install, platform, settings)
    } else {
        ConfigurationDelta::empty()
    };

    let extension_dir = install.subpath(&settings.extension.subdirectory);
    let extension = settings.extension.enabled && fs.dir_exists(&extension_dir);
    let secondary = if extension {
        let ext = &settings.extension;
        let mut delta = ConfigurationDelta {
            include_paths: vec![join_relative(&extension_dir, &ext.include_dir)],
            ..ConfigurationDelta::default()
        };
        if platform.links_sdk_libraries() {
            delta.library_paths = vec![join_relative(&extension_dir, &ext.library_dir)];
            delta.libraries = ext.libraries.clone();
        }
        delta
    } else {
        ConfigurationDelta::empty()
    };

    ProbeOutcome {
        features: FeatureAvailability { sdk, extension },
        delta: primary.merge(secondary),
    }
}

fn primary_delta(
    install: &InstallLocation,
    platform: TargetPlatform,
    settings: &SdkSettings,
) -> ConfigurationDelta {
    let mut delta = ConfigurationDelta {
        definitions: settings.linkage.definitions.clone(),
        include_paths: vec![install.subpath(&settings.discovery.include_dir)],
        ..ConfigurationDelta::default()
    };

    // TODO: link the SDK libraries on Linux and Mac once their library names are known
    if platform.links_sdk_libraries() {
        delta.library_paths = vec![install.subpath(&settings.discovery.library_dir)];
        delta.libraries = settings.linkage.libraries.clone();
    }

    delta
}
