//! # versync-ios
//!
//! iOS project support for versync.
//!
//! Rewrites the marketing version and build number of an Xcode `project.pbxproj`
//! by pattern, leaving the rest of the file untouched. The project path may be a
//! glob pattern; the first match is used.

pub mod updater;
pub mod version_updater;

pub use updater::IosUpdater;
pub use version_updater::{extract_marketing_version, extract_project_version, update_ios_content};
