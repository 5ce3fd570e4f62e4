use serde::{Deserialize, Serialize};

use crate::{error::VersyncError, platform::Platform};

/// Field values found in a platform file before it was rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviousFields {
    pub version: Option<String>,
    pub build_number: Option<u64>,
}

/// Effect of patching one platform file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformUpdateResult {
    success: bool,
    platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    previous_version: Option<String>,
    new_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    previous_build_number: Option<u64>,
    new_build_number: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl PlatformUpdateResult {
    #[must_use]
    pub fn updated(
        platform: Platform,
        new_version: &str,
        new_build_number: u64,
        previous: PreviousFields,
    ) -> Self {
        Self {
            success: true,
            platform,
            previous_version: previous.version,
            new_version: new_version.to_string(),
            previous_build_number: previous.build_number,
            new_build_number,
            error: None,
        }
    }

    #[must_use]
    pub fn failed(
        platform: Platform,
        new_version: &str,
        new_build_number: u64,
        error: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            platform,
            previous_version: None,
            new_version: new_version.to_string(),
            previous_build_number: None,
            new_build_number,
            error: Some(error.into()),
        }
    }

    /// Folds the outcome of a patch attempt into a result record
    #[must_use]
    pub fn from_outcome(
        platform: Platform,
        new_version: &str,
        new_build_number: u64,
        outcome: Result<PreviousFields, VersyncError>,
    ) -> Self {
        match outcome {
            Ok(previous) => Self::updated(platform, new_version, new_build_number, previous),
            Err(e) => Self::failed(platform, new_version, new_build_number, e.to_string()),
        }
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn previous_version(&self) -> Option<&str> {
        self.previous_version.as_deref()
    }

    #[must_use]
    pub fn new_version(&self) -> &str {
        &self.new_version
    }

    #[must_use]
    pub const fn previous_build_number(&self) -> Option<u64> {
        self.previous_build_number
    }

    #[must_use]
    pub const fn new_build_number(&self) -> u64 {
        self.new_build_number
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
