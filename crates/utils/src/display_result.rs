use colored::Colorize;
use versync_core::{PlatformUpdateResult, SyncResult};

fn display_platform(result: &PlatformUpdateResult) -> String {
    if result.success() {
        let previous = match (result.previous_version(), result.previous_build_number()) {
            (Some(version), Some(build)) => format!(" (was {version} build {build})"),
            (Some(version), None) => format!(" (was {version})"),
            (None, Some(build)) => format!(" (was build {build})"),
            (None, None) => String::new(),
        };
        format!(
            "  {} {}: {} build {}{}",
            "✔".green(),
            result.platform(),
            result.new_version().bright_white().bold(),
            result.new_build_number(),
            previous.bright_black()
        )
    } else {
        format!(
            "  {} {}: {}",
            "✘".red(),
            result.platform(),
            result.error().unwrap_or("unknown error").red()
        )
    }
}

/// Human-readable summary of a sync run
#[must_use]
pub fn display_sync_result(result: &SyncResult) -> String {
    let mut lines = Vec::new();
    if result.success() {
        lines.push("Version sync complete".green().bold().to_string());
        lines.push(format!(
            "  Version: {}",
            result.version().version().bright_green()
        ));
        lines.push(format!(
            "  Build: {} {}",
            result.build().build_number().to_string().bright_cyan(),
            format!("(from {})", result.build().source()).bright_black()
        ));
    } else {
        lines.push("Version sync failed".red().bold().to_string());
    }
    if result.platforms().is_empty() {
        // Aborted before any platform ran
        lines.extend(
            result
                .errors()
                .iter()
                .map(|error| format!("  {} {}", "error:".red().bold(), error)),
        );
    } else {
        lines.extend(result.platforms().iter().map(display_platform));
    }
    lines.join("\n")
}
