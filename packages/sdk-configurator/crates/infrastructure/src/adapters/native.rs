use domain::entities::relocation::PostBuildStep;
use domain::ports::post_build::{PostBuildError, PostBuildRunner};
use domain::system::platform::TargetPlatform;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Performs the post-build copies with the filesystem API instead of a shell.
pub struct NativeRunner;

impl NativeRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NativeRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn io_error(index: usize, path: &Path) -> impl FnOnce(std::io::Error) -> PostBuildError + '_ {
    move |source| PostBuildError::Io {
        index,
        path: path.to_path_buf(),
        source,
    }
}

impl PostBuildRunner for NativeRunner {
    fn run_step(
        &self,
        index: usize,
        step: &PostBuildStep,
        _platform: TargetPlatform,
    ) -> Result<(), PostBuildError> {
        match step {
            PostBuildStep::CopyMatching {
                source_dir,
                base_name,
                destination_dir,
            } => {
                fs::create_dir_all(destination_dir).map_err(io_error(index, destination_dir))?;

                // Same selection as `<base>.*`
                let prefix = format!("{}.", base_name);
                let mut copied = 0usize;
                for entry in WalkDir::new(source_dir).min_depth(1).max_depth(1) {
                    let entry = entry.map_err(|e| PostBuildError::Io {
                        index,
                        path: source_dir.clone(),
                        source: e.into(),
                    })?;
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    let matches = entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| name.starts_with(&prefix));
                    if matches {
                        let target = destination_dir.join(entry.file_name());
                        tracing::debug!(from = %entry.path().display(), to = %target.display(), "Copying");
                        fs::copy(entry.path(), &target).map_err(io_error(index, entry.path()))?;
                        copied += 1;
                    }
                }

                if copied == 0 {
                    return Err(PostBuildError::NoMatchingFiles {
                        index,
                        base_name: base_name.clone(),
                        dir: source_dir.clone(),
                    });
                }
                tracing::info!(step = index, copied, "Copied build products");
                Ok(())
            }
            PostBuildStep::CopyRename { from, to } => {
                fs::copy(from, to).map_err(io_error(index, from))?;
                tracing::info!(step = index, to = %to.display(), "Renamed plug-in");
                Ok(())
            }
        }
    }
}
