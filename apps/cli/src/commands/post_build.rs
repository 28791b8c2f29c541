use anyhow::Result;
use clap::Args;
use sdk_configurator::application::PostBuildService;
use sdk_configurator::infrastructure::{NativeRunner, ShellRunner};
use std::path::Path;

use super::{host_service, TargetArgs};
use crate::ui::{self, Theme};

#[derive(Args, Debug)]
pub struct PostBuildCommand {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Run the literal command lines through the platform shell
    #[arg(long)]
    pub shell: bool,

    /// Print the steps without running them
    #[arg(long)]
    pub dry_run: bool,
}

impl PostBuildCommand {
    pub fn execute(&self, settings: Option<&Path>) -> Result<()> {
        let service = host_service(settings)?;
        let request = self.target.request()?;
        let plan = service.relocate(&request)?;

        if self.dry_run {
            for command in plan.command_lines(request.platform) {
                ui::field("would run", command);
            }
            return Ok(());
        }

        let ran = if self.shell {
            PostBuildService::new(ShellRunner::new()).run(&plan, request.platform)?
        } else {
            PostBuildService::new(NativeRunner::new()).run(&plan, request.platform)?
        };

        println!(
            "{} {} step(s), plug-in at {}",
            Theme::success("Done:"),
            ran,
            plan.plugin_artifact.display()
        );
        Ok(())
    }
}
