use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::host_service;
use crate::ui::{self, Theme};

#[derive(Args, Debug)]
pub struct VersionsCommand {}

impl VersionsCommand {
    pub fn execute(&self, settings: Option<&Path>) -> Result<()> {
        let service = host_service(settings)?;

        ui::heading("Maya SDK versions");
        for status in service.known_versions() {
            let state = if status.installed {
                Theme::success("installed")
            } else {
                Theme::warning("missing")
            };
            println!(
                "  {:<6} {:<10} {}",
                status.version,
                state,
                Theme::muted(status.install.path.display())
            );
        }
        Ok(())
    }
}
