mod commands;
mod core;
mod ui;
mod utils;

use clap::{Parser, Subcommand};
use sdk_configurator::domain::RelocationError;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands::{
    ConfigureCommand, LocateCommand, PostBuildCommand, ProbeCommand, RelocateCommand,
    SchemaCommand, VersionsCommand,
};
use crate::core::error::CliError;

#[derive(Parser)]
#[command(name = "sdk-configurator")]
#[command(about = "Locate Maya SDKs and configure the Live Link plug-in build", long_about = None)]
struct Cli {
    /// Settings file (defaults to sdk.json, sdk.toml or sdk.yaml in the current directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// More log output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the SDK install location for a version
    Locate(LocateCommand),
    /// Probe the SDK and show the defines, paths and libraries it contributes
    Probe(ProbeCommand),
    /// Compute where the built plug-in goes and the post-build steps
    Relocate(RelocateCommand),
    /// Print the complete build configuration
    Configure(ConfigureCommand),
    /// Run the post-build copy and rename steps
    PostBuild(PostBuildCommand),
    /// List the SDK versions a target ships for and whether they are installed
    Versions(VersionsCommand),
    /// Print the JSON schema of the settings file
    Schema(SchemaCommand),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = cli.settings.as_deref();
    match cli.command {
        Commands::Locate(cmd) => cmd.execute(settings),
        Commands::Probe(cmd) => cmd.execute(settings),
        Commands::Relocate(cmd) => cmd.execute(settings),
        Commands::Configure(cmd) => cmd.execute(settings),
        Commands::PostBuild(cmd) => cmd.execute(settings),
        Commands::Versions(cmd) => cmd.execute(settings),
        Commands::Schema(cmd) => cmd.execute(),
    }
}

fn report(err: anyhow::Error) {
    if let Some(relocation) = err.downcast_ref::<RelocationError>() {
        ui::diagnostic::report_relocation_error(relocation);
        return;
    }
    match err.downcast::<CliError>() {
        Ok(cli_err) => cli_err.render(),
        Err(other) => CliError::Runtime(format!("{:#}", other)).render(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(err);
            ExitCode::FAILURE
        }
    }
}
