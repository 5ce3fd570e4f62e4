use anyhow::Result;
use thiserror::Error;
use versync_core::SyncResult;
use versync_utils::display_sync_result;

use crate::options::FormatOptions;

/// Returned when a run finished but at least one platform was not updated.
///
/// The details are already printed with the result, so the message stays short.
#[derive(Debug, Error)]
#[error("version sync failed with {errors} error(s)")]
pub struct SyncFailed {
    pub errors: usize,
}

/// Print a sync result in the requested format
///
/// # Errors
/// Returns [`SyncFailed`] if the result is not a success.
pub fn report(result: &SyncResult, format: &FormatOptions) -> Result<()> {
    format.print(
        &display_sync_result(result),
        &serde_json::to_string_pretty(result)?,
    );
    if result.success() {
        Ok(())
    } else {
        Err(SyncFailed {
            errors: result.errors().len(),
        }
        .into())
    }
}
