//! Matching normalized paths against the registry of known permalinks.

use indexmap::IndexSet;

use crate::options::{PathFormat, WikiLinkResolver};
use crate::path::normalize;

/// The caller-supplied set of permalinks known to exist.
///
/// Entries keep insertion order, which is the documented tie-break when
/// several entries share a suffix under the shortened path format.
#[derive(Debug, Clone, Default)]
pub struct PermalinkRegistry {
    entries: IndexSet<String>,
}

impl PermalinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, permalink: impl Into<String>) {
        self.entries.insert(permalink.into());
    }

    pub fn contains(&self, permalink: &str) -> bool {
        self.entries.contains(permalink)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PermalinkRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of resolving a target against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    /// Always a concrete string; an empty target resolves to an empty
    /// permalink (same-page heading reference).
    pub permalink: String,
    /// True iff the permalink matches a registry entry.
    pub exists: bool,
}

/// Resolves a raw target through the optional candidate resolver and the
/// registry.
///
/// The resolver receives the pre-normalization page name and returns
/// candidates tried in order; the first registry hit wins. Under
/// [`PathFormat::ObsidianShort`] a candidate additionally matches any entry
/// ending in `/<candidate>` (shortened links resolve at any folder depth),
/// with exact matches taking precedence and suffix ambiguity broken by
/// insertion order. When nothing matches, the permalink falls back to the
/// normalized first candidate.
pub fn resolve(
    target: &str,
    format: PathFormat,
    resolver: Option<&WikiLinkResolver>,
    registry: &PermalinkRegistry,
) -> ResolvedLink {
    let candidates = match resolver {
        Some(resolve_candidates) => resolve_candidates(target),
        None => vec![target.to_string()],
    };

    let mut fallback: Option<String> = None;
    for candidate in &candidates {
        let normalized = normalize(candidate, format);
        if registry.contains(&normalized) {
            return ResolvedLink {
                permalink: normalized,
                exists: true,
            };
        }
        if format == PathFormat::ObsidianShort
            && !normalized.is_empty()
            && let Some(entry) = registry
                .iter()
                .find(|entry| entry.ends_with(&format!("/{normalized}")))
        {
            return ResolvedLink {
                permalink: entry.to_string(),
                exists: true,
            };
        }
        fallback.get_or_insert(normalized);
    }

    ResolvedLink {
        // A resolver returning no candidates leaves the plain normalized
        // target as the permalink.
        permalink: fallback.unwrap_or_else(|| normalize(target, format)),
        exists: false,
    }
}
