use domain::entities::relocation::PostBuildStep;
use domain::ports::post_build::{PostBuildError, PostBuildRunner};
use domain::system::platform::TargetPlatform;
use std::process::Command;

/// Runs each step as a literal command line through the platform shell,
/// the way the engine build tool runs post-build steps.
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }

    fn shell_for(platform: TargetPlatform) -> (&'static str, &'static str) {
        if platform.uses_windows_shell() {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

// `cmd` does not understand the `\"` escaping `Command::arg` applies, so the
// line is handed over untouched.
#[cfg(windows)]
fn push_command_line(command: &mut Command, line: &str, platform: TargetPlatform) {
    use std::os::windows::process::CommandExt;

    if platform.uses_windows_shell() {
        command.raw_arg(line);
    } else {
        command.arg(line);
    }
}

#[cfg(not(windows))]
fn push_command_line(command: &mut Command, line: &str, _platform: TargetPlatform) {
    command.arg(line);
}

impl PostBuildRunner for ShellRunner {
    fn run_step(
        &self,
        index: usize,
        step: &PostBuildStep,
        platform: TargetPlatform,
    ) -> Result<(), PostBuildError> {
        let (shell, flag) = Self::shell_for(platform);
        let shell_path =
            which::which(shell).map_err(|e| PostBuildError::ShellUnavailable(format!("{}: {}", shell, e)))?;

        let command = step.command_line(platform);
        tracing::info!(step = index, %command, "Running post-build step");

        let mut shell_command = Command::new(&shell_path);
        shell_command.arg(flag);
        push_command_line(&mut shell_command, &command, platform);
        let output = shell_command
            .output()
            .map_err(|source| PostBuildError::Io {
                index,
                path: shell_path.clone(),
                source,
            })?;

        if !output.status.success() {
            if !output.stderr.is_empty() {
                tracing::error!(step = index, "{}", String::from_utf8_lossy(&output.stderr));
            }
            return Err(PostBuildError::CommandFailed {
                index,
                command,
                status: output.status.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_copy_and_rename_through_sh() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir(&out).unwrap();
        std::fs::write(out.join("MayaLiveLinkPlugin2022.so"), b"elf").unwrap();
        std::fs::write(out.join("MayaLiveLinkPlugin2022.pdb"), b"dbg").unwrap();
        let staging = out.join("Maya").join("2022");

        let runner = ShellRunner::new();
        runner
            .run_step(
                0,
                &PostBuildStep::CopyMatching {
                    source_dir: out.clone(),
                    base_name: "MayaLiveLinkPlugin2022".to_string(),
                    destination_dir: staging.clone(),
                },
                TargetPlatform::Linux,
            )
            .unwrap();
        assert!(staging.join("MayaLiveLinkPlugin2022.pdb").is_file());

        runner
            .run_step(
                1,
                &PostBuildStep::CopyRename {
                    from: staging.join("MayaLiveLinkPlugin2022.so"),
                    to: staging.join("MayaLiveLinkPlugin2022.plugin.so"),
                },
                TargetPlatform::Linux,
            )
            .unwrap();
        assert_eq!(
            std::fs::read(staging.join("MayaLiveLinkPlugin2022.plugin.so")).unwrap(),
            b"elf"
        );
    }

    #[test]
    fn test_copy_skips_debug_bundle_directories() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(out.join("MayaLiveLinkPlugin2022.dSYM").join("Contents")).unwrap();
        std::fs::write(out.join("MayaLiveLinkPlugin2022.dylib"), b"macho").unwrap();
        let staging = out.join("Maya").join("2022");

        ShellRunner::new()
            .run_step(
                0,
                &PostBuildStep::CopyMatching {
                    source_dir: out.clone(),
                    base_name: "MayaLiveLinkPlugin2022".to_string(),
                    destination_dir: staging.clone(),
                },
                TargetPlatform::Mac,
            )
            .unwrap();

        assert!(staging.join("MayaLiveLinkPlugin2022.dylib").is_file());
        assert!(!staging.join("MayaLiveLinkPlugin2022.dSYM").exists());
    }

    #[test]
    fn test_copy_handles_spaces_and_quotes_in_names() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("it's out");
        std::fs::create_dir(&out).unwrap();
        std::fs::write(out.join("My Plugin2022.so"), b"elf").unwrap();
        std::fs::write(out.join("My PluginX.so"), b"other").unwrap();
        let staging = out.join("Maya").join("2022");

        ShellRunner::new()
            .run_step(
                0,
                &PostBuildStep::CopyMatching {
                    source_dir: out.clone(),
                    base_name: "My Plugin2022".to_string(),
                    destination_dir: staging.clone(),
                },
                TargetPlatform::Linux,
            )
            .unwrap();

        assert_eq!(std::fs::read(staging.join("My Plugin2022.so")).unwrap(), b"elf");
        assert!(!staging.join("My PluginX.so").exists());
    }

    #[test]
    fn test_copy_without_matching_files_fails() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("MayaLiveLinkPlugin2022.dSYM")).unwrap();

        let err = ShellRunner::new()
            .run_step(
                0,
                &PostBuildStep::CopyMatching {
                    source_dir: dir.path().to_path_buf(),
                    base_name: "MayaLiveLinkPlugin2022".to_string(),
                    destination_dir: dir.path().join("staging"),
                },
                TargetPlatform::Mac,
            )
            .unwrap_err();
        assert!(matches!(err, PostBuildError::CommandFailed { index: 0, .. }));
    }

    #[test]
    fn test_failing_command_reports_exit_status() {
        let dir = tempdir().unwrap();
        let step = PostBuildStep::CopyRename {
            from: dir.path().join("missing.so"),
            to: dir.path().join("target.so"),
        };

        let err = ShellRunner::new()
            .run_step(3, &step, TargetPlatform::Linux)
            .unwrap_err();
        match err {
            PostBuildError::CommandFailed { index, command, .. } => {
                assert_eq!(index, 3);
                assert!(command.starts_with("cp -f"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
