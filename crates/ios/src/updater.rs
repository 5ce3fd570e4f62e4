use std::path::PathBuf;

use async_trait::async_trait;
use versync_core::{Platform, PlatformUpdater, PreviousFields};
use versync_utils::resolve_path;

use crate::version_updater::{extract_marketing_version, extract_project_version, update_ios_content};

/// Updates `MARKETING_VERSION` and `CURRENT_PROJECT_VERSION` in an Xcode project.
#[derive(Debug, Clone)]
pub struct IosUpdater {
    project_path: String,
}

impl IosUpdater {
    /// `project_path` may be a glob such as `./ios/*.xcodeproj/project.pbxproj`
    pub fn new(project_path: impl Into<String>) -> Self {
        Self {
            project_path: project_path.into(),
        }
    }
}

#[async_trait]
impl PlatformUpdater for IosUpdater {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    fn configured_path(&self) -> &str {
        &self.project_path
    }

    async fn resolve_path(&self) -> Option<PathBuf> {
        resolve_path(&self.project_path)
    }

    fn extract(&self, content: &str) -> PreviousFields {
        PreviousFields {
            version: extract_marketing_version(content),
            build_number: extract_project_version(content),
        }
    }

    fn patch(&self, content: &str, version: &str, build_number: u64) -> String {
        update_ios_content(content, version, build_number)
    }
}
