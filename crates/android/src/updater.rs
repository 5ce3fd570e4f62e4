use std::path::{Path, PathBuf};

use async_trait::async_trait;
use versync_core::{Platform, PlatformUpdater, PreviousFields};
use versync_utils::resolve_path;

use crate::version_updater::{extract_version_code, extract_version_name, update_gradle_content};

/// Updates `versionName` and `versionCode` in an app module Gradle build file.
#[derive(Debug, Clone)]
pub struct AndroidUpdater {
    gradle_path: String,
}

impl AndroidUpdater {
    pub fn new(gradle_path: &Path) -> Self {
        Self {
            gradle_path: gradle_path.to_string_lossy().to_string(),
        }
    }
}

#[async_trait]
impl PlatformUpdater for AndroidUpdater {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn configured_path(&self) -> &str {
        &self.gradle_path
    }

    async fn resolve_path(&self) -> Option<PathBuf> {
        resolve_path(&self.gradle_path)
    }

    fn extract(&self, content: &str) -> PreviousFields {
        PreviousFields {
            version: extract_version_name(content),
            build_number: extract_version_code(content),
        }
    }

    fn patch(&self, content: &str, version: &str, build_number: u64) -> String {
        update_gradle_content(content, version, build_number)
    }
}
