//! Delimiter constants for the wiki link grammar.
//!
//! All delimiter bytes live here; the scanner and splitter call these
//! constants and never hardcode `[[` or `|`.

/// The `[[target]]` / `![[target]]` construct.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    pub const BRACKET_OPEN: u8 = b'[';
    pub const BRACKET_CLOSE: u8 = b']';
    pub const EMBED: u8 = b'!';
    pub const HEADING: u8 = b'#';
    pub const ESCAPE: u8 = b'\\';
    pub const PAREN_OPEN: u8 = b'(';
    pub const PAREN_CLOSE: u8 = b')';

    /// Default divider between target and display alias. Configurable per
    /// run via [`WikiLinkOptions`](crate::options::WikiLinkOptions).
    pub const ALIAS: &'static str = "|";
}
