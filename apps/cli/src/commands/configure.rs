use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use sdk_configurator::domain::BuildConfiguration;
use std::path::Path;

use super::{host_service, TargetArgs};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Toml,
    Yaml,
}

#[derive(Args, Debug)]
pub struct ConfigureCommand {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl ConfigureCommand {
    pub fn execute(&self, settings: Option<&Path>) -> Result<()> {
        let service = host_service(settings)?;
        let config = service.configure(&self.target.request()?)?;
        println!("{}", render(&config, self.format)?);
        Ok(())
    }
}

pub fn render(config: &BuildConfiguration, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(config).context("Failed to serialize configuration as JSON")
        }
        OutputFormat::Toml => {
            toml::to_string_pretty(config).context("Failed to serialize configuration as TOML")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(config).context("Failed to serialize configuration as YAML")
        }
    }
}
