use anyhow::Result;
use clap::Args;
use versync_manager::VersionManager;

use crate::{logging::init_logging, options::SyncFlags, report::report};

#[derive(Args, Debug)]
#[command(about = "Sync the package.json version and a build number to iOS and Android")]
pub struct SyncArgs {
    #[command(flatten)]
    pub flags: SyncFlags,
}

/// Sync the current manifest version without changing it
///
/// # Errors
/// Returns error if the configuration cannot be loaded or any platform fails.
pub async fn handle_sync(args: &SyncArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let options = args.flags.resolve(&current_dir).await?;
    init_logging(options.verbose);

    let result = VersionManager::new(options).sync_versions().await;
    report(&result, &args.flags.format)
}
