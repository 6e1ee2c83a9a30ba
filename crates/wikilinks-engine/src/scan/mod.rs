//! # Span Scanning
//!
//! Cursor-based detection of `[[target]]` / `![[target]]` spans in a flat
//! inline-text buffer.
//!
//! ## Modules
//!
//! - **`syntax`**: delimiter constants owned in one place
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`scanner`**: `scan_next()` producing [`LinkSyntax`] matches
//!
//! Scanning is a pure function over an immutable buffer: malformed syntax is
//! a non-match, never an error, and the buffer is left untouched for the
//! host to treat as ordinary text.

pub mod cursor;
pub mod scanner;
pub mod syntax;

pub use scanner::{LinkSyntax, scan_next};
pub use syntax::WikiLink;
