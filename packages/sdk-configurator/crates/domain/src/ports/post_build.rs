use crate::entities::relocation::PostBuildStep;
use crate::system::platform::TargetPlatform;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostBuildError {
    #[error("Post-build step {index} failed: `{command}` exited with {status}")]
    CommandFailed {
        index: usize,
        command: String,
        status: String,
    },
    #[error("Post-build step {index}: no files named '{base_name}.*' in {dir}")]
    NoMatchingFiles {
        index: usize,
        base_name: String,
        dir: PathBuf,
    },
    #[error("Post-build step {index}: {path}: {source}")]
    Io {
        index: usize,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not launch shell: {0}")]
    ShellUnavailable(String),
}

/// Executes one post-build step. Steps are run in order by the caller and the
/// first failure aborts the remaining ones.
pub trait PostBuildRunner {
    fn run_step(
        &self,
        index: usize,
        step: &PostBuildStep,
        platform: TargetPlatform,
    ) -> Result<(), PostBuildError>;
}
