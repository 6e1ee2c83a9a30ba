//! Wiki-link parsing, resolution and rendering for markdown notes.
//!
//! The engine turns `[[Page]]`, `[[Page#Heading|Alias]]` and `![[Embed]]`
//! syntax into structured [`WikiLinkNode`]s: the link is scanned out of the
//! surrounding text, split into its fields, normalised according to the
//! configured [`PathFormat`], resolved against a registry of known
//! permalinks and finally turned into a [`RenderDescriptor`] a renderer can
//! serialise to HTML or any other output.
//!
//! Typical use goes through [`WikiLinkParser`]:
//!
//! ```
//! use wikilinks_engine::{WikiLinkOptions, WikiLinkParser};
//!
//! let parser = WikiLinkParser::new(WikiLinkOptions::new().permalinks(["Wiki Link"]));
//! let nodes = parser.parse_all("See [[Wiki Link]] for details.");
//! assert!(nodes[0].exists);
//! ```

pub mod fields;
pub mod inline;
pub mod io;
pub mod node;
pub mod options;
pub mod path;
pub mod render;
pub mod resolve;
pub mod scan;
pub mod span;

#[cfg(test)]
pub mod tests;

pub use fields::LinkFields;
pub use inline::{InlineNode, parse_inline};
pub use io::{IoError, permalinks_from_vault, read_file, scan_markdown_files, validate_notes_dir};
pub use node::{WikiLinkNode, WikiLinkParser};
pub use options::{HrefTemplate, PathFormat, PathFormatError, WikiLinkOptions, WikiLinkResolver};
pub use render::{RenderChild, RenderDescriptor, build_descriptor, slug};
pub use resolve::{PermalinkRegistry, ResolvedLink, resolve};
pub use scan::{LinkSyntax, scan_next};
pub use span::Span;
