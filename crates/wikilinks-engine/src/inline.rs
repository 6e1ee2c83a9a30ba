//! Host-side splicing of wiki link nodes into an inline-text buffer.
//!
//! The core hands back values; this walker is the integration layer that
//! turns a whole buffer into an alternating sequence of text runs and
//! parsed nodes. Backtick code spans are raw zones: a wiki link opening
//! inside one is left alone as ordinary text.

use crate::node::{WikiLinkNode, WikiLinkParser};
use crate::span::Span;

/// One piece of a walked inline buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineNode {
    /// Plain text between wiki links; slice the buffer with the span.
    Text(Span),
    WikiLink(WikiLinkNode),
}

/// Walks `text` and returns nodes covering the entire input in order.
pub fn parse_inline(parser: &WikiLinkParser, text: &str) -> Vec<InlineNode> {
    let code_spans = code_span_ranges(text);
    let mut out = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(node) = parser.parse_next(text, pos) {
        if let Some(zone) = code_spans
            .iter()
            .find(|zone| zone.start <= node.span.start && node.span.start < zone.end)
        {
            // Opened inside a code span; resume after the raw zone.
            pos = zone.end;
            continue;
        }
        if node.span.start > text_start {
            out.push(InlineNode::Text(Span {
                start: text_start,
                end: node.span.start,
            }));
        }
        pos = node.span.end;
        text_start = pos;
        out.push(InlineNode::WikiLink(node));
    }

    if text.len() > text_start {
        out.push(InlineNode::Text(Span {
            start: text_start,
            end: text.len(),
        }));
    }
    out
}

/// Spans of backtick-delimited code, delimiters included. An unclosed
/// backtick opens no zone.
fn code_span_ranges(text: &str) -> Vec<Span> {
    let bytes = text.as_bytes();
    let mut zones = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'`' {
            match bytes[i + 1..].iter().position(|&b| b == b'`') {
                Some(offset) => {
                    let end = i + 1 + offset + 1;
                    zones.push(Span { start: i, end });
                    i = end;
                    continue;
                }
                None => break,
            }
        }
        i += 1;
    }
    zones
}
