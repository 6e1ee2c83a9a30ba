//! Target normalization into canonical path strings.

use crate::options::PathFormat;

/// Normalizes a raw target into the path used for registry lookup, and as
/// the fallback permalink when nothing in the registry matches.
///
/// Heading and alias never pass through here; the permalink is computed
/// purely from the target field.
pub fn normalize(target: &str, format: PathFormat) -> String {
    // An empty target is a same-page heading reference; no format gives it
    // a path.
    if target.is_empty() {
        return String::new();
    }
    let path = match format {
        // Shortened names carry no folder context, so there is nothing to
        // rewrite; folder-aware matching happens at resolution time.
        PathFormat::Raw | PathFormat::ObsidianShort => target.to_string(),
        PathFormat::ObsidianAbsolute => {
            if target.starts_with('/') {
                target.to_string()
            } else {
                format!("/{target}")
            }
        }
    };
    collapse_index(path)
}

/// Drops a trailing `index` segment, leaving the parent folder path.
///
/// `/index` alone is the root page and collapses to `/`.
pub(crate) fn collapse_index(path: String) -> String {
    if path == "/index" {
        return "/".to_string();
    }
    if path == "index" {
        return String::new();
    }
    match path.strip_suffix("/index") {
        Some(parent) => parent.to_string(),
        None => path,
    }
}
