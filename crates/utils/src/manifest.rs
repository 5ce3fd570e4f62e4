use std::path::Path;

use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};
use tokio::fs::{read_to_string, write};
use tracing::debug;
use versync_core::VersyncError;

use crate::detect_indent;

fn unreadable(path: &Path, reason: impl ToString) -> VersyncError {
    VersyncError::ManifestUnreadable {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn unwritable(path: &Path, reason: impl ToString) -> VersyncError {
    VersyncError::ManifestUnwritable {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

async fn read_manifest(path: &Path) -> Result<(String, Value), VersyncError> {
    let content = read_to_string(path)
        .await
        .map_err(|e| unreadable(path, e))?;
    let manifest: Value = serde_json::from_str(&content).map_err(|e| unreadable(path, e))?;
    if !manifest.is_object() {
        return Err(unreadable(path, "manifest is not a JSON object"));
    }
    Ok((content, manifest))
}

/// Read the `version` string field of a package manifest
///
/// # Errors
/// Returns `ManifestUnreadable` if the file is missing, is not a JSON object or
/// has no string `version` field.
pub async fn read_manifest_version(path: &Path) -> Result<String, VersyncError> {
    let (_, manifest) = read_manifest(path).await?;
    let version = manifest
        .get("version")
        .and_then(Value::as_str)
        .ok_or_else(|| unreadable(path, "missing string field `version`"))?;
    debug!(path = %path.display(), version, "read manifest version");
    Ok(version.to_string())
}

/// Rewrite the `version` field of a package manifest in place
///
/// Key order and indentation are kept; the file ends with a newline.
///
/// # Errors
/// Returns `ManifestUnreadable` if the manifest cannot be read or parsed and
/// `ManifestUnwritable` if it cannot be written back.
pub async fn write_manifest_version(path: &Path, version: &str) -> Result<(), VersyncError> {
    let (content, mut manifest) = read_manifest(path).await?;
    manifest["version"] = Value::String(version.to_string());

    let indent = detect_indent(&content);
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    manifest
        .serialize(&mut serializer)
        .map_err(|e| unwritable(path, e))?;
    buf.push(b'\n');

    write(path, buf).await.map_err(|e| unwritable(path, e))?;
    debug!(path = %path.display(), version, "wrote manifest version");
    Ok(())
}
