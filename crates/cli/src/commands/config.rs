use anyhow::Result;
use clap::Args;
use versync_utils::get_config;

#[derive(Args, Debug)]
#[command(about = "Show the effective versync configuration")]
pub struct ConfigArgs {}

/// Display versync configuration
///
/// # Errors
/// Returns error if reading the configuration fails.
pub async fn handle_config(_args: &ConfigArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let config = get_config(&current_dir).await?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
