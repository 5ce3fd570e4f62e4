use std::path::PathBuf;

use thiserror::Error;

use crate::platform::Platform;

/// Every failure the version and build synchronization can report.
///
/// Engine-level kinds (`InvalidVersion`, `InvalidVersionType`) abort a whole run.
/// Platform-level kinds are scoped to one file and end up as a failed
/// [`PlatformUpdateResult`](crate::PlatformUpdateResult) instead of propagating.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersyncError {
    #[error("Invalid semantic version: {0}")]
    InvalidVersion(String),

    #[error("Invalid version type: {0}")]
    InvalidVersionType(String),

    #[error("Failed to read manifest at {}: {reason}", path.display())]
    ManifestUnreadable { path: PathBuf, reason: String },

    #[error("Failed to write manifest at {}: {reason}", path.display())]
    ManifestUnwritable { path: PathBuf, reason: String },

    #[error("{} project file not found at: {path}", platform.label())]
    PlatformFileNotFound { platform: Platform, path: String },

    #[error("Failed to read {} project file {}: {reason}", platform.label(), path.display())]
    PlatformFileUnreadable {
        platform: Platform,
        path: PathBuf,
        reason: String,
    },

    #[error("Failed to write {} project file {}: {reason}", platform.label(), path.display())]
    PlatformFileUnwritable {
        platform: Platform,
        path: PathBuf,
        reason: String,
    },

    #[error("Invalid configuration at {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(VersyncError::InvalidVersion("1.2".to_string()), "Invalid semantic version: 1.2")]
    #[case(VersyncError::InvalidVersionType("huge".to_string()), "Invalid version type: huge")]
    #[case(
        VersyncError::PlatformFileNotFound {
            platform: Platform::Ios,
            path: "./ios/*.xcodeproj/project.pbxproj".to_string(),
        },
        "iOS project file not found at: ./ios/*.xcodeproj/project.pbxproj"
    )]
    #[case(
        VersyncError::ManifestUnreadable {
            path: PathBuf::from("package.json"),
            reason: "missing".to_string(),
        },
        "Failed to read manifest at package.json: missing"
    )]
    #[case(
        VersyncError::PlatformFileUnwritable {
            platform: Platform::Android,
            path: PathBuf::from("build.gradle"),
            reason: "denied".to_string(),
        },
        "Failed to write Android project file build.gradle: denied"
    )]
    fn test_error_display(#[case] error: VersyncError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
