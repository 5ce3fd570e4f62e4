use std::path::{Path, PathBuf};

use tokio::fs::read_to_string;
use tracing::debug;
use versync_core::{SyncOptions, VersyncError};

pub const CONFIG_FILE_NAME: &str = "versync.json";

#[must_use]
pub fn get_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(CONFIG_FILE_NAME)
}

/// Load `versync.json` from a project directory, merged over the defaults.
///
/// Paths are returned as written; see [`get_config`] for the anchored form.
///
/// # Errors
/// Returns `Config` if the file exists but cannot be read or parsed.
pub async fn load_config(project_dir: &Path) -> Result<SyncOptions, VersyncError> {
    let config_path = get_config_path(project_dir);
    if !config_path.is_file() {
        return Ok(SyncOptions::default());
    }
    let content = read_to_string(&config_path)
        .await
        .map_err(|e| VersyncError::Config {
            path: config_path.clone(),
            reason: e.to_string(),
        })?;
    debug!(path = %config_path.display(), "loaded config file");
    serde_json::from_str::<SyncOptions>(&content).map_err(|e| VersyncError::Config {
        path: config_path.clone(),
        reason: e.to_string(),
    })
}

/// [`load_config`] with relative paths anchored at `project_dir`
///
/// # Errors
/// Returns `Config` if the file exists but cannot be read or parsed.
pub async fn get_config(project_dir: &Path) -> Result<SyncOptions, VersyncError> {
    let mut options = load_config(project_dir).await?;
    options.config = options.config.rooted(project_dir);
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::fs;
    use versync_core::Platform;

    #[tokio::test]
    async fn test_get_config_defaults_when_missing() {
        let temp_dir = TempDir::new().unwrap();

        let options = get_config(temp_dir.path()).await.unwrap();

        assert_eq!(options.platforms, vec![Platform::Ios, Platform::Android]);
        assert_eq!(
            options.config.manifest_path,
            temp_dir.path().join("package.json")
        );
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_get_config_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"{
  "incrementBuildNumber": false,
  "platforms": ["android"],
  "config": { "androidGradlePath": "android/app/build.gradle.kts" }
}"#,
        )
        .await
        .unwrap();

        let options = get_config(temp_dir.path()).await.unwrap();

        assert!(!options.increment_build_number);
        assert_eq!(options.platforms, vec![Platform::Android]);
        assert_eq!(
            options.config.android_gradle_path,
            temp_dir.path().join("android/app/build.gradle.kts")
        );
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_get_config_malformed() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "{ not json")
            .await
            .unwrap();

        let err = get_config(temp_dir.path()).await.unwrap_err();
        assert!(matches!(err, VersyncError::Config { .. }));
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_load_config_keeps_paths_as_written() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"{ "config": { "manifestPath": "app/package.json" } }"#,
        )
        .await
        .unwrap();

        let options = load_config(temp_dir.path()).await.unwrap();

        assert_eq!(
            options.config.manifest_path,
            std::path::PathBuf::from("app/package.json")
        );
        assert_eq!(
            options.config.ios_project_path,
            "./ios/*.xcodeproj/project.pbxproj"
        );
        temp_dir.close().unwrap();
    }
}
