use versync_core::{SyncOptions, SyncResult, UpdateType};

use crate::VersionManager;

/// Sync the current manifest version to the requested platforms
pub async fn sync_versions(options: SyncOptions) -> SyncResult {
    VersionManager::new(options).sync_versions().await
}

/// Bump the manifest version and sync it to the requested platforms
pub async fn increment_version(update_type: UpdateType, options: SyncOptions) -> SyncResult {
    VersionManager::new(options)
        .increment_version(update_type)
        .await
}

pub async fn increment_patch(options: SyncOptions) -> SyncResult {
    increment_version(UpdateType::Patch, options).await
}

pub async fn increment_minor(options: SyncOptions) -> SyncResult {
    increment_version(UpdateType::Minor, options).await
}

pub async fn increment_major(options: SyncOptions) -> SyncResult {
    increment_version(UpdateType::Major, options).await
}
