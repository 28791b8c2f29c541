use miette::Diagnostic;
use sdk_configurator::domain::RelocationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("No '{name}' directory above {}", .from.display())]
#[diagnostic(
    code(sdk_configurator::relocation::missing_ancestor),
    help("The plug-in build description must live under Engine/.../Source/Programs. Pass --from to point at it.")
)]
pub struct MissingAncestor {
    pub name: String,
    pub from: PathBuf,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Cannot place {} relative to {}", .target.display(), .base.display())]
#[diagnostic(code(sdk_configurator::relocation::unrelated_paths))]
pub struct UnrelatedPaths {
    pub target: PathBuf,
    pub base: PathBuf,
}

pub fn report_relocation_error(err: &RelocationError) {
    let report = match err.clone() {
        RelocationError::DirectoryNotFound { name, from } => {
            miette::Report::new(MissingAncestor { name, from })
        }
        RelocationError::NoRelativePath { target, base } => {
            miette::Report::new(UnrelatedPaths { target, base })
        }
    };
    eprintln!("{:?}", report);
}
