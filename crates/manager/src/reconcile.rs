use tracing::{debug, warn};
use versync_core::{BuildInfo, BuildSource, PlatformUpdater, SyncOptions};

/// Decide the build number every requested platform will receive.
///
/// Platform files are read in the order given (iOS before Android); absent or
/// unreadable files count as "no build number". The highest value wins and names
/// the source, earlier platforms winning ties. A caller-supplied build number
/// overrides the result, keeping the discovered maximum as `previous_build_number`.
/// Without auto-increment the maximum is reused, never going below 1. A maximum of
/// `u64::MAX` cannot be incremented and is reused as well.
pub async fn next_build_number(
    updaters: &[Box<dyn PlatformUpdater>],
    options: &SyncOptions,
) -> BuildInfo {
    let mut highest = 0;
    let mut source = BuildSource::Manual;

    for updater in updaters {
        let platform = updater.platform();
        if !options.includes(platform) {
            continue;
        }
        match updater.read_build_number().await {
            Some(build_number) if build_number > highest => {
                debug!(platform = platform.key(), build_number, "new highest build number");
                highest = build_number;
                source = platform.into();
            }
            Some(build_number) => {
                debug!(platform = platform.key(), build_number, "build number not higher");
            }
            None => debug!(platform = platform.key(), "no build number found"),
        }
    }

    let previous = (highest > 0).then_some(highest);

    if let Some(custom) = options.custom_build_number {
        return BuildInfo::new(custom, previous, BuildSource::Manual);
    }

    let build_number = if options.increment_build_number {
        highest.checked_add(1).unwrap_or_else(|| {
            warn!(build_number = highest, "build number at maximum, reusing it");
            highest
        })
    } else {
        highest.max(1)
    };
    BuildInfo::new(build_number, previous, source)
}
