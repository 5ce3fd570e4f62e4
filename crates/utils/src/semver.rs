use std::{cmp::Ordering, sync::LazyLock};

use regex::Regex;
use versync_core::{UpdateType, VersionInfo, VersyncError};

/// SemVer 2.0.0 grammar: `MAJOR.MINOR.PATCH[-prerelease][+buildmetadata]`.
///
/// Numeric parts and numeric prerelease identifiers carry no leading zeros;
/// build metadata identifiers may.
static SEMVER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)",
        r"(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
        r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
        r"(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    ))
    .expect("hardcoded regex must compile")
});

#[must_use]
pub fn is_valid_semver(version: &str) -> bool {
    SEMVER_PATTERN.is_match(version)
}

/// Parse a semantic version string into its components
///
/// # Errors
/// Returns `InvalidVersion` if the string is not SemVer 2.0.0.
pub fn parse_version(version: &str) -> Result<VersionInfo, VersyncError> {
    let invalid = || VersyncError::InvalidVersion(version.to_string());
    let captures = SEMVER_PATTERN.captures(version).ok_or_else(invalid)?;
    let number = |index: usize| -> Result<u64, VersyncError> {
        captures[index].parse::<u64>().map_err(|_| invalid())
    };

    Ok(VersionInfo::new(
        version.to_string(),
        number(1)?,
        number(2)?,
        number(3)?,
        captures.get(4).map(|m| m.as_str().to_string()),
        captures.get(5).map(|m| m.as_str().to_string()),
    ))
}

/// Compare two version strings by precedence
///
/// Major, minor and patch compare numerically. With equal numbers a prerelease sorts
/// before the release; two prereleases compare as plain strings (not per identifier).
/// Build metadata is ignored.
///
/// # Errors
/// Returns `InvalidVersion` if either string is not SemVer 2.0.0.
pub fn compare_versions(left: &str, right: &str) -> Result<Ordering, VersyncError> {
    let left = parse_version(left)?;
    let right = parse_version(right)?;

    Ok(left
        .major()
        .cmp(&right.major())
        .then(left.minor().cmp(&right.minor()))
        .then(left.patch().cmp(&right.patch()))
        .then_with(|| match (left.prerelease(), right.prerelease()) {
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(l), Some(r)) => l.cmp(r),
            (None, None) => Ordering::Equal,
        }))
}

/// Next release version for a bump; prerelease and build metadata are dropped
///
/// # Errors
/// Returns `InvalidVersion` if `version` is not SemVer 2.0.0 or the bumped part
/// would overflow.
pub fn next_version(version: &str, update_type: UpdateType) -> Result<String, VersyncError> {
    let parsed = parse_version(version)?;
    let (major, minor, patch) = (parsed.major(), parsed.minor(), parsed.patch());
    let bump = |part: u64| {
        part.checked_add(1)
            .ok_or_else(|| VersyncError::InvalidVersion(version.to_string()))
    };

    Ok(match update_type {
        UpdateType::Major => format!("{}.0.0", bump(major)?),
        UpdateType::Minor => format!("{major}.{}.0", bump(minor)?),
        UpdateType::Patch => format!("{major}.{minor}.{}", bump(patch)?),
    })
}

/// [`next_version`] with the bump unit given as text
///
/// # Errors
/// Returns `InvalidVersionType` for an unknown unit, `InvalidVersion` for a bad version.
pub fn increment_version(version: &str, update_type: &str) -> Result<String, VersyncError> {
    next_version(version, update_type.parse()?)
}

#[must_use]
pub fn format_version(info: &VersionInfo) -> String {
    let mut version = format!("{}.{}.{}", info.major(), info.minor(), info.patch());
    if let Some(prerelease) = info.prerelease() {
        version.push('-');
        version.push_str(prerelease);
    }
    if let Some(build_metadata) = info.build_metadata() {
        version.push('+');
        version.push_str(build_metadata);
    }
    version
}
