//! Construction-time configuration for a processing run.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::scan::WikiLink;

/// Strategy producing candidate permalinks for a raw page name, tried in
/// order against the registry. Injected as a function value so callers
/// supply behavior without the core growing a trait hierarchy.
pub type WikiLinkResolver = Arc<dyn Fn(&str) -> Vec<String> + Send + Sync>;

/// Maps a resolved permalink onto the href base (e.g. prefixing a site URL).
pub type HrefTemplate = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// How a raw target string becomes a canonical path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathFormat {
    /// Target used exactly as written.
    #[default]
    Raw,
    /// Obsidian shortened convention: a bare page name that may match a
    /// registry entry at any folder depth by path suffix.
    ObsidianShort,
    /// Obsidian absolute convention: target is a path from the vault root,
    /// written without the leading slash.
    ObsidianAbsolute,
}

impl PathFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            PathFormat::Raw => "raw",
            PathFormat::ObsidianShort => "obsidian-short",
            PathFormat::ObsidianAbsolute => "obsidian-absolute",
        }
    }
}

impl fmt::Display for PathFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected at configuration time; never surfaces per-document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized path format `{0}`, expected `raw`, `obsidian-short` or `obsidian-absolute`")]
pub struct PathFormatError(String);

impl FromStr for PathFormat {
    type Err = PathFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(PathFormat::Raw),
            "obsidian-short" => Ok(PathFormat::ObsidianShort),
            "obsidian-absolute" => Ok(PathFormat::ObsidianAbsolute),
            other => Err(PathFormatError(other.to_string())),
        }
    }
}

/// Options captured once when a [`WikiLinkParser`](crate::WikiLinkParser) is
/// built, immutable for the lifetime of the run.
#[derive(Clone)]
pub struct WikiLinkOptions {
    pub(crate) permalinks: Vec<String>,
    pub(crate) path_format: PathFormat,
    pub(crate) alias_divider: String,
    pub(crate) resolver: Option<WikiLinkResolver>,
    pub(crate) wiki_link_class_name: Option<String>,
    pub(crate) new_class_name: Option<String>,
    pub(crate) href_template: Option<HrefTemplate>,
}

impl Default for WikiLinkOptions {
    fn default() -> Self {
        Self {
            permalinks: Vec::new(),
            path_format: PathFormat::default(),
            alias_divider: WikiLink::ALIAS.to_string(),
            resolver: None,
            wiki_link_class_name: None,
            new_class_name: None,
            href_template: None,
        }
    }
}

impl WikiLinkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Known page permalinks; the registry the existence flag is computed
    /// against.
    pub fn permalinks<I, S>(mut self, permalinks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permalinks = permalinks.into_iter().map(Into::into).collect();
        self
    }

    pub fn path_format(mut self, format: PathFormat) -> Self {
        self.path_format = format;
        self
    }

    /// Divider between target and alias, `|` by default.
    pub fn alias_divider(mut self, divider: impl Into<String>) -> Self {
        self.alias_divider = divider.into();
        self
    }

    /// Maps a raw page name to an ordered list of candidate permalinks.
    pub fn wiki_link_resolver(mut self, resolver: WikiLinkResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Synonym for [`wiki_link_resolver`](Self::wiki_link_resolver), kept
    /// for callers used to the older option name.
    pub fn page_resolver(self, resolver: WikiLinkResolver) -> Self {
        self.wiki_link_resolver(resolver)
    }

    /// Replaces the whole computed class string on hyperlinks.
    pub fn wiki_link_class_name(mut self, class: impl Into<String>) -> Self {
        self.wiki_link_class_name = Some(class.into());
        self
    }

    /// Class marking links whose target does not resolve, `new` by default.
    pub fn new_class_name(mut self, class: impl Into<String>) -> Self {
        self.new_class_name = Some(class.into());
        self
    }

    pub fn href_template(mut self, template: HrefTemplate) -> Self {
        self.href_template = Some(template);
        self
    }
}

impl fmt::Debug for WikiLinkOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WikiLinkOptions")
            .field("permalinks", &self.permalinks)
            .field("path_format", &self.path_format)
            .field("alias_divider", &self.alias_divider)
            .field("resolver", &self.resolver.as_ref().map(|_| "<fn>"))
            .field("wiki_link_class_name", &self.wiki_link_class_name)
            .field("new_class_name", &self.new_class_name)
            .field("href_template", &self.href_template.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
