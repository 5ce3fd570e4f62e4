use anyhow::Result;
use clap::Args;
use versync_core::UpdateType;
use versync_manager::VersionManager;

use crate::{CliUpdateType, logging::init_logging, options::SyncFlags, report::report};

#[derive(Args, Debug)]
#[command(about = "Bump the package.json version, then sync it")]
pub struct BumpArgs {
    /// Version component to bump
    #[arg(value_enum)]
    pub update_type: CliUpdateType,

    #[command(flatten)]
    pub flags: SyncFlags,
}

/// Bump the manifest version by `update_type` and sync the result
///
/// # Errors
/// Returns error if the configuration cannot be loaded, the version cannot be bumped,
/// or any platform fails.
pub async fn handle_increment(update_type: UpdateType, flags: &SyncFlags) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let options = flags.resolve(&current_dir).await?;
    init_logging(options.verbose);

    let result = VersionManager::new(options)
        .increment_version(update_type)
        .await;
    report(&result, &flags.format)
}

pub async fn handle_bump(args: &BumpArgs) -> Result<()> {
    handle_increment(args.update_type.clone().into(), &args.flags).await
}
