use tokio::fs::write;

use anyhow::Result;
use clap::Args;
use versync_core::SyncOptions;
use versync_utils::get_config_path;

#[derive(Args, Debug)]
#[command(about = "Write a versync.json with the default settings")]
pub struct InitArgs {
    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

/// Initialize a versync configuration in the current directory
///
/// # Errors
/// Returns error if `versync.json` already exists or cannot be written.
pub async fn handle_init(args: &InitArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let config_file = get_config_path(&current_dir);
    if config_file.exists() {
        return Err(anyhow::anyhow!(
            "versync already initialized at {}",
            config_file.display()
        ));
    }

    if !args.dry_run {
        let mut content = serde_json::to_string_pretty(&SyncOptions::default())?;
        content.push('\n');
        write(&config_file, content).await?;
    }

    println!("versync initialized in {}", config_file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        init: InitArgs,
    }

    #[test]
    fn test_init_args_dry_run() {
        let cli = TestCli::parse_from(["test", "--dry-run"]);
        assert!(cli.init.dry_run);
        let cli = TestCli::parse_from(["test"]);
        assert!(!cli.init.dry_run);
    }
}
