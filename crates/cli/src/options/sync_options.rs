use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use versync_core::{Platform, SyncOptions};
use versync_utils::load_config;

use super::FormatOptions;

/// Flags shared by every command that writes versions.
///
/// Values given here override `versync.json`, which overrides the defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct SyncFlags {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Update iOS only
    #[arg(long, conflicts_with = "android_only")]
    pub ios_only: bool,

    /// Update Android only
    #[arg(long)]
    pub android_only: bool,

    /// Use this build number instead of reconciling one
    #[arg(short, long)]
    pub build_number: Option<u64>,

    /// Reuse the highest existing build number instead of incrementing it
    #[arg(long)]
    pub no_increment_build: bool,

    /// Accept manifest versions that are not SemVer 2.0.0
    #[arg(long)]
    pub no_validate: bool,

    /// Path to package.json
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Path or glob pattern of the Xcode project.pbxproj
    #[arg(long)]
    pub ios_project: Option<String>,

    /// Path to the Android app build.gradle
    #[arg(long)]
    pub android_gradle: Option<PathBuf>,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

impl SyncFlags {
    /// Layer these flags over the configuration found in `project_dir`
    ///
    /// # Errors
    /// Returns error if `versync.json` exists but cannot be loaded.
    pub async fn resolve(&self, project_dir: &Path) -> Result<SyncOptions> {
        let mut options = load_config(project_dir).await?;

        options.verbose |= self.verbose;
        if self.ios_only {
            options.platforms = vec![Platform::Ios];
        } else if self.android_only {
            options.platforms = vec![Platform::Android];
        }
        if let Some(build_number) = self.build_number {
            options.custom_build_number = Some(build_number);
        }
        if self.no_increment_build {
            options.increment_build_number = false;
        }
        if self.no_validate {
            options.validate_semver = false;
        }
        if let Some(manifest) = &self.manifest {
            options.config.manifest_path = manifest.clone();
        }
        if let Some(ios_project) = &self.ios_project {
            options.config.ios_project_path = ios_project.clone();
        }
        if let Some(android_gradle) = &self.android_gradle {
            options.config.android_gradle_path = android_gradle.clone();
        }
        options.config = options.config.rooted(project_dir);

        Ok(options)
    }
}
