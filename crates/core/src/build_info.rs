use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Where the reconciled build number came from.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildSource {
    Ios,
    Android,
    /// Supplied by the caller, or no platform reported a build number
    #[default]
    Manual,
}

impl From<Platform> for BuildSource {
    fn from(value: Platform) -> Self {
        match value {
            Platform::Ios => Self::Ios,
            Platform::Android => Self::Android,
        }
    }
}

impl Display for BuildSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Manual => "manual",
        })
    }
}

/// Next build number decided for one sync run.
///
/// Recomputed every run from the platform files; never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    build_number: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    previous_build_number: Option<u64>,
    source: BuildSource,
}

impl BuildInfo {
    #[must_use]
    pub const fn new(
        build_number: u64,
        previous_build_number: Option<u64>,
        source: BuildSource,
    ) -> Self {
        Self {
            build_number,
            previous_build_number,
            source,
        }
    }

    #[must_use]
    pub const fn build_number(&self) -> u64 {
        self.build_number
    }

    #[must_use]
    pub const fn previous_build_number(&self) -> Option<u64> {
        self.previous_build_number
    }

    #[must_use]
    pub const fn source(&self) -> BuildSource {
        self.source
    }
}
