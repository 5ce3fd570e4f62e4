use anyhow::Result;

use clap::{Parser, Subcommand, ValueEnum};
use versync_core::UpdateType;

use crate::commands::{
    BumpArgs, ConfigArgs, InitArgs, SyncArgs, handle_bump, handle_config, handle_increment,
    handle_init, handle_sync,
};
pub mod commands;
mod logging;
pub mod options;
mod report;

pub use report::SyncFailed;

#[derive(ValueEnum, Debug, Clone)]
pub enum CliUpdateType {
    Major,
    Minor,
    Patch,
}

impl From<CliUpdateType> for UpdateType {
    fn from(value: CliUpdateType) -> Self {
        match value {
            CliUpdateType::Major => Self::Major,
            CliUpdateType::Minor => Self::Minor,
            CliUpdateType::Patch => Self::Patch,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "versync",
    author,
    version,
    about = "Keep package.json, iOS and Android versions and build numbers in sync",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Sync(SyncArgs),
    /// Bump the patch version, then sync
    Patch(SyncArgs),
    /// Bump the minor version, then sync
    Minor(SyncArgs),
    /// Bump the major version, then sync
    Major(SyncArgs),
    Bump(BumpArgs),
    Init(InitArgs),
    Config(ConfigArgs),
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    match cli.command {
        Commands::Sync(args) => handle_sync(&args).await?,
        Commands::Patch(args) => handle_increment(UpdateType::Patch, &args.flags).await?,
        Commands::Minor(args) => handle_increment(UpdateType::Minor, &args.flags).await?,
        Commands::Major(args) => handle_increment(UpdateType::Major, &args.flags).await?,
        Commands::Bump(args) => handle_bump(&args).await?,
        Commands::Init(args) => handle_init(&args).await?,
        Commands::Config(args) => handle_config(&args).await?,
    }
    Ok(())
}
