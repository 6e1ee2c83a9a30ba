//! The parser context and the structured node handed back to the host.

use crate::fields::LinkFields;
use crate::options::WikiLinkOptions;
use crate::render::{self, RenderDescriptor};
use crate::resolve::{self, PermalinkRegistry, ResolvedLink};
use crate::scan::{self, LinkSyntax};
use crate::span::Span;

/// A fully processed wiki link or embed, ready for the host to splice into
/// its own tree in place of the matched span.
#[derive(Debug, Clone, PartialEq)]
pub struct WikiLinkNode {
    pub is_embed: bool,
    pub target: String,
    pub heading: Option<String>,
    pub alias: Option<String>,
    /// Canonical path, always concrete; empty for same-page heading links.
    pub permalink: String,
    /// True iff the permalink matches a registry entry.
    pub exists: bool,
    /// What a later rendering stage maps onto concrete markup.
    pub html: RenderDescriptor,
    /// Byte range of the original construct in the scanned buffer.
    pub span: Span,
}

/// Options and registry packaged into one immutable context.
///
/// Every call is independent and reentrant; the parser never mutates shared
/// state, so one instance can serve concurrent threads.
#[derive(Debug, Clone)]
pub struct WikiLinkParser {
    options: WikiLinkOptions,
    registry: PermalinkRegistry,
}

impl WikiLinkParser {
    pub fn new(options: WikiLinkOptions) -> Self {
        let registry = options.permalinks.iter().cloned().collect();
        Self { options, registry }
    }

    pub fn registry(&self) -> &PermalinkRegistry {
        &self.registry
    }

    /// Parses the next wiki link at or after byte offset `from`.
    ///
    /// The host calls this at successive offsets (each time from the end of
    /// the previous match) until no match remains.
    pub fn parse_next(&self, text: &str, from: usize) -> Option<WikiLinkNode> {
        scan::scan_next(text, from).map(|syntax| self.build_node(&syntax))
    }

    /// Parses every wiki link in the buffer, in source order.
    pub fn parse_all(&self, text: &str) -> Vec<WikiLinkNode> {
        let mut nodes = Vec::new();
        let mut pos = 0;
        while let Some(node) = self.parse_next(text, pos) {
            pos = node.span.end;
            nodes.push(node);
        }
        nodes
    }

    /// Resolves a bare target outside any scanned buffer, e.g. for callers
    /// that already hold the page name.
    pub fn resolve_target(&self, target: &str) -> ResolvedLink {
        resolve::resolve(
            target,
            self.options.path_format,
            self.options.resolver.as_ref(),
            &self.registry,
        )
    }

    fn build_node(&self, syntax: &LinkSyntax<'_>) -> WikiLinkNode {
        let fields = LinkFields::split(syntax.inner, &self.options.alias_divider);
        let resolved = self.resolve_target(fields.target);
        let html = render::build_descriptor(
            &self.options,
            &fields,
            &resolved,
            syntax.is_embed,
            syntax.raw,
        );
        WikiLinkNode {
            is_embed: syntax.is_embed,
            target: fields.target.to_string(),
            heading: fields.heading.map(str::to_string),
            alias: fields.alias.map(str::to_string),
            permalink: resolved.permalink,
            exists: resolved.exists,
            html,
            span: syntax.span,
        }
    }
}

impl Default for WikiLinkParser {
    fn default() -> Self {
        Self::new(WikiLinkOptions::default())
    }
}
