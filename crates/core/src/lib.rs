//! # versync-core
//!
//! Core types and traits for versync.
//!
//! Holds the value objects produced by a sync run (`VersionInfo`, `BuildInfo`,
//! `PlatformUpdateResult`, `SyncResult`), the run configuration, the error kinds and
//! the `PlatformUpdater` trait implemented by the iOS and Android crates.

pub mod build_info;
pub mod config;
pub mod error;
pub mod platform;
pub mod platform_update_result;
pub mod platform_updater;
pub mod sync_result;
pub mod update_type;
pub mod version_info;

pub use build_info::{BuildInfo, BuildSource};
pub use config::{PlatformConfig, SyncOptions};
pub use error::VersyncError;
pub use platform::Platform;
pub use platform_update_result::{PlatformUpdateResult, PreviousFields};
pub use platform_updater::PlatformUpdater;
pub use sync_result::SyncResult;
pub use update_type::UpdateType;
pub use version_info::VersionInfo;
