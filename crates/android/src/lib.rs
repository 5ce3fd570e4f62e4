//! # versync-android
//!
//! Android project support for versync.
//!
//! Rewrites `versionName` and `versionCode` in the app module build file. Handles both
//! Groovy (`build.gradle`) and Kotlin DSL (`build.gradle.kts`) spellings.

pub mod updater;
pub mod version_updater;

pub use updater::AndroidUpdater;
pub use version_updater::{extract_version_code, extract_version_name, update_gradle_content};
