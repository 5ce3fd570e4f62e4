use std::path::{Path, PathBuf};

use glob::glob;
use tracing::{debug, warn};

/// Resolve a file path that may be a glob pattern.
///
/// Plain paths resolve to themselves when the file exists. Patterns resolve to their
/// first match in glob order; extra matches are logged and ignored.
#[must_use]
pub fn resolve_path(pattern: &str) -> Option<PathBuf> {
    if !pattern.contains(['*', '?', '[']) {
        let path = Path::new(pattern);
        return path.is_file().then(|| path.to_path_buf());
    }

    let entries = match glob(pattern) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(pattern, error = %e, "invalid glob pattern");
            return None;
        }
    };
    let matches: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();
    if matches.len() > 1 {
        debug!(
            pattern,
            count = matches.len(),
            chosen = %matches[0].display(),
            "glob matched several files, using the first"
        );
    }
    matches.into_iter().next()
}
