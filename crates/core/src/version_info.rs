use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Parsed semantic version.
///
/// `version` keeps the exact string the value was parsed from. The value is never
/// mutated; a bump produces a new string which is parsed again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    version: String,
    major: u64,
    minor: u64,
    patch: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prerelease: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    build_metadata: Option<String>,
}

impl VersionInfo {
    #[must_use]
    pub const fn new(
        version: String,
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Option<String>,
        build_metadata: Option<String>,
    ) -> Self {
        Self {
            version,
            major,
            minor,
            patch,
            prerelease,
            build_metadata,
        }
    }

    /// Raw version string that was not validated; numeric parts stay zero
    #[must_use]
    pub const fn unparsed(version: String) -> Self {
        Self::new(version, 0, 0, 0, None, None)
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub const fn major(&self) -> u64 {
        self.major
    }

    #[must_use]
    pub const fn minor(&self) -> u64 {
        self.minor
    }

    #[must_use]
    pub const fn patch(&self) -> u64 {
        self.patch
    }

    #[must_use]
    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    #[must_use]
    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }
}

/// The zeroed `0.0.0` value reported when a run fails before anything is written
impl Default for VersionInfo {
    fn default() -> Self {
        Self::new("0.0.0".to_string(), 0, 0, 0, None, None)
    }
}

impl Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.version)
    }
}
