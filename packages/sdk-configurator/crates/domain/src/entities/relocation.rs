use crate::entities::version::MayaVersion;
use crate::system::platform::{BuildConfigurationKind, TargetPlatform};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelocationError {
    #[error("Directory not found: no ancestor named '{name}' above {from}")]
    DirectoryNotFound { name: String, from: PathBuf },
    #[error("Cannot express {target} relative to {base}")]
    NoRelativePath { target: PathBuf, base: PathBuf },
}

/// Inputs of the output relocation computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationRequest {
    pub module_name: String,
    pub version: MayaVersion,
    pub platform: TargetPlatform,
    pub configuration: BuildConfigurationKind,
    /// Directory holding the build description; the ancestor walk starts here.
    pub start_dir: PathBuf,
    /// Folder under the default output directory receiving per-version folders.
    pub staging_sub_folder: String,
}

/// One file operation run after a successful link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PostBuildStep {
    /// Copy every top-level file in `source_dir` whose stem is `base_name`.
    CopyMatching {
        source_dir: PathBuf,
        base_name: String,
        destination_dir: PathBuf,
    },
    /// Copy `from` to `to`, changing its name.
    CopyRename { from: PathBuf, to: PathBuf },
}

impl PostBuildStep {
    /// Literal command line for the shell of `platform`.
    pub fn command_line(&self, platform: TargetPlatform) -> String {
        if platform.uses_windows_shell() {
            match self {
                PostBuildStep::CopyMatching {
                    source_dir,
                    base_name,
                    destination_dir,
                } => format!(
                    "xcopy /Y /I \"{}\" \"{}\"",
                    windows_path(&source_dir.join(format!("{}.*", base_name))),
                    windows_path(destination_dir)
                ),
                PostBuildStep::CopyRename { from, to } => format!(
                    "copy /Y \"{}\" \"{}\"",
                    windows_path(from),
                    windows_path(to)
                ),
            }
        } else {
            match self {
                PostBuildStep::CopyMatching {
                    source_dir,
                    base_name,
                    destination_dir,
                } => {
                    let dest = sh_quote(&format!("{}/", destination_dir.display()));
                    let find = format!(
                        "find {} -maxdepth 1 -type f -name {}",
                        sh_quote(&source_dir.display().to_string()),
                        sh_quote(&format!("{}.*", glob_escape(base_name)))
                    );
                    // Directories such as `.dSYM` bundles are skipped; no regular file is a failure.
                    format!(
                        "mkdir -p {} && test -n \"$({} -print)\" && {} -exec cp -f {{}} {} \\;",
                        sh_quote(&destination_dir.display().to_string()),
                        find,
                        find,
                        dest
                    )
                }
                PostBuildStep::CopyRename { from, to } => format!(
                    "cp -f {} {}",
                    sh_quote(&from.display().to_string()),
                    sh_quote(&to.display().to_string())
                ),
            }
        }
    }
}

/// Single-quote `value` for `sh`.
fn sh_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

/// Escape `find -name` pattern characters so `value` matches literally.
fn glob_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '*' | '?' | '[' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn windows_path(path: &Path) -> String {
    path.display().to_string().replace('/', "\\")
}

/// Where the linker puts the plug-in and where Maya expects to find it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelocationPlan {
    pub output_name: String,
    pub programs_dir: PathBuf,
    pub source_dir: PathBuf,
    pub engine_dir: PathBuf,
    pub engine_binaries_dir: PathBuf,
    pub default_output_dir: PathBuf,
    /// `default_output_dir` relative to `engine_binaries_dir`; becomes the
    /// target's binaries sub-folder.
    pub binaries_sub_folder: PathBuf,
    /// Directory the linker writes to.
    pub link_output_dir: PathBuf,
    /// Per-version folder the final plug-in lands in.
    pub staging_dir: PathBuf,
    pub primary_artifact: PathBuf,
    pub plugin_artifact: PathBuf,
    pub steps: Vec<PostBuildStep>,
}

impl RelocationPlan {
    pub fn command_lines(&self, platform: TargetPlatform) -> Vec<String> {
        self.steps.iter().map(|s| s.command_line(platform)).collect()
    }
}
