use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::platform::Platform;

pub const DEFAULT_MANIFEST_PATH: &str = "./package.json";
pub const DEFAULT_IOS_PROJECT_PATH: &str = "./ios/*.xcodeproj/project.pbxproj";
pub const DEFAULT_ANDROID_GRADLE_PATH: &str = "./android/app/build.gradle";

/// Locations of the manifest and the platform project files.
///
/// `ios_project_path` may be a glob pattern; the first match is used.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformConfig {
    /// Package manifest holding the authoritative `version` field
    #[serde(alias = "packageJsonPath")]
    pub manifest_path: PathBuf,

    /// Path or glob pattern of the Xcode `project.pbxproj`
    pub ios_project_path: String,

    /// Path of the app module `build.gradle` / `build.gradle.kts`
    pub android_gradle_path: PathBuf,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            ios_project_path: DEFAULT_IOS_PROJECT_PATH.to_string(),
            android_gradle_path: PathBuf::from(DEFAULT_ANDROID_GRADLE_PATH),
        }
    }
}

impl PlatformConfig {
    /// Default layout anchored at a project directory
    #[must_use]
    pub fn with_root(root: &Path) -> Self {
        Self {
            manifest_path: root.join("package.json"),
            ios_project_path: root
                .join("ios")
                .join("*.xcodeproj")
                .join("project.pbxproj")
                .to_string_lossy()
                .to_string(),
            android_gradle_path: root.join("android").join("app").join("build.gradle"),
        }
    }

    /// Re-anchors relative paths at `root`, leaving absolute ones untouched
    #[must_use]
    pub fn rooted(&self, root: &Path) -> Self {
        let anchor = |path: &Path| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                root.join(path.strip_prefix(".").unwrap_or(path))
            }
        };
        Self {
            manifest_path: anchor(&self.manifest_path),
            ios_project_path: anchor(Path::new(&self.ios_project_path))
                .to_string_lossy()
                .to_string(),
            android_gradle_path: anchor(&self.android_gradle_path),
        }
    }
}

/// Options for one sync run, merged over the documented defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncOptions {
    pub config: PlatformConfig,

    /// Reject manifest versions that are not SemVer 2.0.0
    #[serde(rename = "validateSemVer")]
    pub validate_semver: bool,

    /// Write `max + 1` instead of the highest build number found
    pub increment_build_number: bool,

    /// Explicit build number, bypassing discovery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_build_number: Option<u64>,

    pub platforms: Vec<Platform>,

    pub verbose: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            config: PlatformConfig::default(),
            validate_semver: true,
            increment_build_number: true,
            custom_build_number: None,
            platforms: Platform::ALL.to_vec(),
            verbose: false,
        }
    }
}

impl SyncOptions {
    /// Requested platforms, deduplicated, in canonical order (iOS before Android)
    #[must_use]
    pub fn requested_platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|platform| self.platforms.contains(platform))
            .collect()
    }

    #[must_use]
    pub fn includes(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}
