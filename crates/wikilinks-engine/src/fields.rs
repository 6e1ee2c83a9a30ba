//! Splitting raw span content into target, heading and alias.

use crate::scan::WikiLink;

/// The sub-fields of a wiki link's inner content.
///
/// Fields are verbatim slices of the source: no trimming, no whitespace
/// collapse, only the divider characters themselves are removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFields<'a> {
    /// The page being referenced. Empty for a same-page heading link
    /// (`[[#Some Heading]]`), never absent.
    pub target: &'a str,
    /// Heading within the target page, after the first `#`.
    pub heading: Option<&'a str>,
    /// Display alias, after the first alias divider.
    pub alias: Option<&'a str>,
}

impl<'a> LinkFields<'a> {
    /// Splits raw inner content on the first `alias_divider`, then the left
    /// part on the first `#`. Precedence matters: a divider inside the alias
    /// text is kept, and a `#` after the divider belongs to the alias.
    pub fn split(inner: &'a str, alias_divider: &str) -> Self {
        let (left, alias) = match inner.split_once(alias_divider) {
            Some((left, alias)) => (left, Some(alias)),
            None => (inner, None),
        };
        let (target, heading) = match left.split_once(WikiLink::HEADING as char) {
            Some((target, heading)) => (target, Some(heading)),
            None => (left, None),
        };
        Self {
            target,
            heading,
            alias,
        }
    }
}
