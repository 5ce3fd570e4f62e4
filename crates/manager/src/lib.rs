//! # versync-manager
//!
//! Orchestrates a version sync: reads the manifest version, reconciles the next build
//! number across the platform files and hands both to each platform updater.

mod api;
mod reconcile;
mod version_manager;

pub use api::{increment_major, increment_minor, increment_patch, increment_version, sync_versions};
pub use reconcile::next_build_number;
pub use version_manager::VersionManager;
