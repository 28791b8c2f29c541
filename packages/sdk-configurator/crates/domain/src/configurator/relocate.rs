use crate::entities::relocation::{PostBuildStep, RelocationError, RelocationPlan, RelocationRequest};
use crate::system::platform::{BuildConfigurationKind, TargetPlatform};
use std::path::{Component, Path, PathBuf};

const PROGRAMS_DIR: &str = "Programs";
const SOURCE_DIR: &str = "Source";
const ENGINE_DIR: &str = "Engine";
const BINARIES_DIR: &str = "Binaries";

/// Binary name for a build. Non-default configurations are disambiguated
/// with the platform and configuration.
pub fn output_name(
    module_name: &str,
    platform: TargetPlatform,
    configuration: BuildConfigurationKind,
) -> String {
    if configuration == BuildConfigurationKind::Development {
        module_name.to_string()
    } else {
        format!("{}-{}-{}", module_name, platform, configuration)
    }
}

/// Nearest directory at or above `start` named `name` (ASCII case-insensitive).
pub fn find_ancestor(start: &Path, name: &str) -> Result<PathBuf, RelocationError> {
    start
        .ancestors()
        .find(|dir| {
            dir.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
        .map(Path::to_path_buf)
        .ok_or_else(|| RelocationError::DirectoryNotFound {
            name: name.to_string(),
            from: start.to_path_buf(),
        })
}

/// Resolve `.` and `..` without touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Work out where the linker writes the plug-in, where Maya expects it, and
/// the post-build steps that move it there.
///
/// The `Programs` → `Source` → `Engine` ancestor chain must exist above the
/// start directory; without it the plan is meaningless and the error is fatal.
pub fn compute_output_relocation(
    request: &RelocationRequest,
) -> Result<RelocationPlan, RelocationError> {
    let output_name = output_name(&request.module_name, request.platform, request.configuration);

    let start = normalize_lexically(&request.start_dir);
    let programs_dir = find_ancestor(&start, PROGRAMS_DIR)?;
    let source_dir = find_ancestor(&programs_dir, SOURCE_DIR)?;
    let engine_dir = find_ancestor(&source_dir, ENGINE_DIR)?;

    let platform_dir = request.platform.to_string();
    let engine_binaries_dir = engine_dir.join(BINARIES_DIR).join(&platform_dir);
    let default_output_dir = source_dir
        .parent()
        .unwrap_or(&source_dir)
        .join(BINARIES_DIR)
        .join(&platform_dir);

    let binaries_sub_folder = pathdiff::diff_paths(&default_output_dir, &engine_binaries_dir)
        .ok_or_else(|| RelocationError::NoRelativePath {
            target: default_output_dir.clone(),
            base: engine_binaries_dir.clone(),
        })?;
    let link_output_dir = normalize_lexically(&engine_binaries_dir.join(&binaries_sub_folder));

    let staging_dir = default_output_dir
        .join(&request.staging_sub_folder)
        .join(request.version.as_str());

    let library_file = format!("{}.{}", output_name, request.platform.library_extension());
    let plugin_file = format!("{}.{}", output_name, request.platform.plugin_extension());

    let steps = vec![
        PostBuildStep::CopyMatching {
            source_dir: link_output_dir.clone(),
            base_name: output_name.clone(),
            destination_dir: staging_dir.clone(),
        },
        PostBuildStep::CopyRename {
            from: staging_dir.join(&library_file),
            to: staging_dir.join(&plugin_file),
        },
    ];

    Ok(RelocationPlan {
        primary_artifact: link_output_dir.join(&library_file),
        plugin_artifact: staging_dir.join(&plugin_file),
        output_name,
        programs_dir,
        source_dir,
        engine_dir,
        engine_binaries_dir,
        default_output_dir,
        binaries_sub_folder,
        link_output_dir,
        staging_dir,
        steps,
    })
}
