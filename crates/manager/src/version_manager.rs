use futures::future::join_all;
use tracing::{debug, info, warn};
use versync_android::AndroidUpdater;
use versync_core::{
    Platform, PlatformUpdater, SyncOptions, SyncResult, UpdateType, VersionInfo, VersyncError,
};
use versync_ios::IosUpdater;
use versync_utils::{
    is_valid_semver, next_version, parse_version, read_manifest_version, write_manifest_version,
};

use crate::reconcile::next_build_number;

/// Keeps the manifest version and the platform build numbers in step.
///
/// Built once per run from immutable options. Both entry points always return a
/// [`SyncResult`]; callers branch on `success()` instead of on errors.
#[derive(Debug)]
pub struct VersionManager {
    options: SyncOptions,
    updaters: Vec<Box<dyn PlatformUpdater>>,
}

fn default_updaters(options: &SyncOptions) -> Vec<Box<dyn PlatformUpdater>> {
    options
        .requested_platforms()
        .into_iter()
        .map(|platform| -> Box<dyn PlatformUpdater> {
            match platform {
                Platform::Ios => Box::new(IosUpdater::new(
                    options.config.ios_project_path.clone(),
                )),
                Platform::Android => {
                    Box::new(AndroidUpdater::new(&options.config.android_gradle_path))
                }
            }
        })
        .collect()
}

impl VersionManager {
    #[must_use]
    pub fn new(options: SyncOptions) -> Self {
        let updaters = default_updaters(&options);
        Self { options, updaters }
    }

    /// Uses the given updaters instead of the file-based iOS and Android ones.
    ///
    /// Updaters for platforms that are not requested are dropped; the rest run in
    /// canonical platform order.
    #[must_use]
    pub fn with_updaters(options: SyncOptions, mut updaters: Vec<Box<dyn PlatformUpdater>>) -> Self {
        updaters.retain(|updater| options.includes(updater.platform()));
        updaters.sort_by_key(|updater| updater.platform());
        Self { options, updaters }
    }

    async fn package_version(&self) -> Result<String, VersyncError> {
        let version = read_manifest_version(&self.options.config.manifest_path).await?;
        if self.options.validate_semver && !is_valid_semver(&version) {
            return Err(VersyncError::InvalidVersion(version));
        }
        Ok(version)
    }

    async fn try_sync(&self) -> Result<SyncResult, VersyncError> {
        let version = self.package_version().await?;
        let version_info = if self.options.validate_semver {
            parse_version(&version)?
        } else {
            parse_version(&version).unwrap_or_else(|_| VersionInfo::unparsed(version.clone()))
        };

        let build = next_build_number(&self.updaters, &self.options).await;
        debug!(
            version = %version,
            build_number = build.build_number(),
            source = %build.source(),
            "reconciled build number"
        );

        // Independent files; join_all keeps the canonical result order
        let platforms = join_all(
            self.updaters
                .iter()
                .map(|updater| updater.update_version(&version, build.build_number())),
        )
        .await;

        Ok(SyncResult::from_platforms(version_info, build, platforms))
    }

    /// Propagate the manifest version to every requested platform
    pub async fn sync_versions(&self) -> SyncResult {
        match self.try_sync().await {
            Ok(result) => {
                if result.success() {
                    info!(
                        version = result.version().version(),
                        build_number = result.build().build_number(),
                        "versions synced"
                    );
                }
                result
            }
            Err(e) => {
                warn!(error = %e, "sync aborted before updating platforms");
                SyncResult::aborted(e.to_string())
            }
        }
    }

    async fn bump_manifest(&self, update_type: UpdateType) -> Result<(), VersyncError> {
        let current = self.package_version().await?;
        let next = next_version(&current, update_type)?;
        write_manifest_version(&self.options.config.manifest_path, &next).await?;
        info!(from = %current, to = %next, "manifest version bumped");
        Ok(())
    }

    /// Bump the manifest version, then propagate it to every requested platform
    pub async fn increment_version(&self, update_type: UpdateType) -> SyncResult {
        if let Err(e) = self.bump_manifest(update_type).await {
            warn!(error = %e, "increment aborted before updating platforms");
            return SyncResult::aborted(e.to_string());
        }
        self.sync_versions().await
    }
}
