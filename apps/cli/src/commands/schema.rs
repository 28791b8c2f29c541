use anyhow::Result;
use clap::Args;
use sdk_manifest::SdkSettings;

#[derive(Args, Debug)]
pub struct SchemaCommand {}

impl SchemaCommand {
    pub fn execute(&self) -> Result<()> {
        let schema = SdkSettings::json_schema();
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
