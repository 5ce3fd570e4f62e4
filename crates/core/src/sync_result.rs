use serde::{Deserialize, Serialize};

use crate::{build_info::BuildInfo, platform_update_result::PlatformUpdateResult, version_info::VersionInfo};

/// Aggregate outcome of one sync or increment run.
///
/// `success` holds iff every requested platform was updated. A result built by
/// [`SyncResult::aborted`] means nothing was written to any platform file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResult {
    success: bool,
    version: VersionInfo,
    build: BuildInfo,
    platforms: Vec<PlatformUpdateResult>,
    errors: Vec<String>,
}

impl SyncResult {
    /// Aggregates per-platform results, prefixing each platform error with its label
    #[must_use]
    pub fn from_platforms(
        version: VersionInfo,
        build: BuildInfo,
        platforms: Vec<PlatformUpdateResult>,
    ) -> Self {
        let errors = platforms
            .iter()
            .filter(|result| !result.success())
            .filter_map(|result| {
                result
                    .error()
                    .map(|error| format!("{}: {}", result.platform().label(), error))
            })
            .collect();
        Self {
            success: platforms.iter().all(PlatformUpdateResult::success),
            version,
            build,
            platforms,
            errors,
        }
    }

    /// Failure before any platform file was touched
    #[must_use]
    pub fn aborted(error: impl Into<String>) -> Self {
        Self {
            success: false,
            version: VersionInfo::default(),
            build: BuildInfo::default(),
            platforms: Vec::new(),
            errors: vec![error.into()],
        }
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub const fn version(&self) -> &VersionInfo {
        &self.version
    }

    #[must_use]
    pub const fn build(&self) -> &BuildInfo {
        &self.build
    }

    #[must_use]
    pub fn platforms(&self) -> &[PlatformUpdateResult] {
        &self.platforms
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuildSource, Platform, PreviousFields};

    fn version() -> VersionInfo {
        VersionInfo::new("1.0.0".to_string(), 1, 0, 0, None, None)
    }

    #[test]
    fn test_from_platforms_all_success() {
        let result = SyncResult::from_platforms(
            version(),
            BuildInfo::new(6, Some(5), BuildSource::Ios),
            vec![
                PlatformUpdateResult::updated(Platform::Ios, "1.0.0", 6, PreviousFields::default()),
                PlatformUpdateResult::updated(
                    Platform::Android,
                    "1.0.0",
                    6,
                    PreviousFields::default(),
                ),
            ],
        );

        assert!(result.success());
        assert!(result.errors().is_empty());
        assert_eq!(result.platforms().len(), 2);
    }

    #[test]
    fn test_from_platforms_collects_errors_in_order() {
        let result = SyncResult::from_platforms(
            version(),
            BuildInfo::new(1, None, BuildSource::Manual),
            vec![
                PlatformUpdateResult::failed(Platform::Ios, "1.0.0", 1, "missing"),
                PlatformUpdateResult::failed(Platform::Android, "1.0.0", 1, "denied"),
            ],
        );

        assert!(!result.success());
        assert_eq!(result.errors(), ["iOS: missing", "Android: denied"]);
    }

    #[test]
    fn test_from_platforms_empty_is_vacuous_success() {
        let result = SyncResult::from_platforms(version(), BuildInfo::default(), Vec::new());
        assert!(result.success());
    }

    #[test]
    fn test_aborted_is_zeroed() {
        let result = SyncResult::aborted("Invalid semantic version: 1.2");

        assert!(!result.success());
        assert_eq!(result.version(), &VersionInfo::default());
        assert_eq!(result.build(), &BuildInfo::default());
        assert!(result.platforms().is_empty());
        assert_eq!(result.errors(), ["Invalid semantic version: 1.2"]);
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(SyncResult::aborted("boom")).unwrap();
        assert_eq!(json["success"], serde_json::Value::Bool(false));
        assert_eq!(json["version"]["version"], "0.0.0");
        assert_eq!(json["build"]["source"], "manual");
        assert_eq!(json["errors"][0], "boom");
    }
}
