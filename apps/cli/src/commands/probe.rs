use anyhow::Result;
use clap::Args;
use serde_json::json;
use std::path::{Path, PathBuf};

use super::{host_service, TargetArgs};
use crate::ui;

#[derive(Args, Debug)]
pub struct ProbeCommand {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ProbeCommand {
    pub fn execute(&self, settings: Option<&Path>) -> Result<()> {
        let service = host_service(settings)?;
        let platform = self.target.platform()?;
        let (install, outcome) = service.probe(&self.target.version, platform);

        if self.json {
            let value = json!({
                "install": install,
                "features": outcome.features,
                "delta": outcome.delta,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }

        ui::heading(format!("Maya {} SDK ({})", self.target.version, platform));
        ui::field("install", install.path.display());
        ui::flag("sdk", outcome.features.sdk);
        ui::flag("extension", outcome.features.extension);
        ui::list("definitions", &outcome.delta.definitions);
        ui::list("include paths", &paths(&outcome.delta.include_paths));
        ui::list("library paths", &paths(&outcome.delta.library_paths));
        ui::list("libraries", &outcome.delta.libraries);
        Ok(())
    }
}

fn paths(items: &[PathBuf]) -> Vec<String> {
    items.iter().map(|p| p.display().to_string()).collect()
}
