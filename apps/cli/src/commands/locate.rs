use anyhow::Result;
use clap::Args;
use sdk_configurator::domain::MayaVersion;
use std::path::Path;

use super::host_service;
use crate::ui::{self, Theme};

#[derive(Args, Debug)]
pub struct LocateCommand {
    /// Maya SDK version (e.g. 2020)
    #[arg(long)]
    pub version: MayaVersion,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl LocateCommand {
    pub fn execute(&self, settings: Option<&Path>) -> Result<()> {
        let service = host_service(settings)?;
        let install = service.locate(&self.version);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&install)?);
            return Ok(());
        }

        ui::heading(format!("Maya {}", self.version));
        ui::field("path", install.path.display());
        ui::field("found via", Theme::muted(&install.source));
        ui::flag("installed", service.is_installed(&install));
        Ok(())
    }
}
