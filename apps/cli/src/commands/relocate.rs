use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::{host_service, TargetArgs};
use crate::ui::{self, Theme};

#[derive(Args, Debug)]
pub struct RelocateCommand {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl RelocateCommand {
    pub fn execute(&self, settings: Option<&Path>) -> Result<()> {
        let service = host_service(settings)?;
        let request = self.target.request()?;
        let plan = service.relocate(&request)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
            return Ok(());
        }

        ui::heading(format!("{} ({}, {})", plan.output_name, request.platform, request.configuration));
        ui::field("engine", plan.engine_dir.display());
        ui::field("sub-folder", plan.binaries_sub_folder.display());
        ui::field("link output", plan.primary_artifact.display());
        ui::field("plug-in", Theme::success(plan.plugin_artifact.display()));
        ui::list("post-build", &plan.command_lines(request.platform));
        Ok(())
    }
}
