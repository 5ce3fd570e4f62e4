use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::{read_to_string, write};
use tracing::{debug, warn};

use crate::{
    error::VersyncError,
    platform::Platform,
    platform_update_result::{PlatformUpdateResult, PreviousFields},
};

/// Pattern-based rewrite of the version and build fields of one platform file.
///
/// Implementors supply file resolution and the two pure text operations; reading,
/// writing and error scoping are shared. `update_version` never fails: every error
/// comes back as a failed [`PlatformUpdateResult`].
#[async_trait]
pub trait PlatformUpdater: std::fmt::Debug + Send + Sync {
    fn platform(&self) -> Platform;

    /// Path or pattern as configured, used in "not found" messages
    fn configured_path(&self) -> &str;

    /// Existing file the configured location points at, if any
    async fn resolve_path(&self) -> Option<PathBuf>;

    /// Current version and build fields (first occurrence of each)
    fn extract(&self, content: &str) -> PreviousFields;

    /// Content with the version and build fields rewritten; everything else verbatim
    fn patch(&self, content: &str, version: &str, build_number: u64) -> String;

    /// Build number currently in the file, `None` when the file is absent,
    /// unreadable or has no build field
    async fn read_build_number(&self) -> Option<u64> {
        let path = self.resolve_path().await?;
        match read_to_string(&path).await {
            Ok(content) => self.extract(&content).build_number,
            Err(e) => {
                debug!(
                    platform = self.platform().key(),
                    path = %path.display(),
                    error = %e,
                    "skipping unreadable platform file"
                );
                None
            }
        }
    }

    /// # Errors
    /// Returns error if the file cannot be found, read or written.
    async fn apply(&self, version: &str, build_number: u64) -> Result<PreviousFields, VersyncError> {
        let path = self
            .resolve_path()
            .await
            .ok_or_else(|| VersyncError::PlatformFileNotFound {
                platform: self.platform(),
                path: self.configured_path().to_string(),
            })?;
        let content = read_to_string(&path)
            .await
            .map_err(|e| VersyncError::PlatformFileUnreadable {
                platform: self.platform(),
                path: path.clone(),
                reason: e.to_string(),
            })?;
        let previous = self.extract(&content);
        let updated = self.patch(&content, version, build_number);
        write(&path, updated)
            .await
            .map_err(|e| VersyncError::PlatformFileUnwritable {
                platform: self.platform(),
                path: path.clone(),
                reason: e.to_string(),
            })?;
        debug!(
            platform = self.platform().key(),
            path = %path.display(),
            previous_version = ?previous.version,
            previous_build_number = ?previous.build_number,
            version,
            build_number,
            "platform file updated"
        );
        Ok(previous)
    }

    async fn update_version(&self, version: &str, build_number: u64) -> PlatformUpdateResult {
        let outcome = self.apply(version, build_number).await;
        if let Err(e) = &outcome {
            warn!(platform = self.platform().key(), error = %e, "platform update failed");
        }
        PlatformUpdateResult::from_outcome(self.platform(), version, build_number, outcome)
    }
}
