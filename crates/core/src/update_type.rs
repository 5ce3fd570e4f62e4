use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VersyncError;

/// Which part of the manifest version a bump increments.
///
/// Parsed case-insensitively from `major`, `minor` or `patch`; lower parts reset to zero.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UpdateType {
    /// `X.0.0`
    Major,
    /// `x.X.0`
    Minor,
    /// `x.y.X`
    Patch,
}

impl FromStr for UpdateType {
    type Err = VersyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            _ => Err(VersyncError::InvalidVersionType(s.to_string())),
        }
    }
}
