use crate::span::Span;

use super::{cursor::Cursor, syntax::WikiLink};

/// A candidate wiki link span found in a text buffer.
///
/// Produced per scan and consumed immediately by the field splitter; the
/// borrowed slices keep the scan allocation-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSyntax<'a> {
    /// The whole construct as written, including `!` and the delimiters.
    pub raw: &'a str,
    /// Content between `[[` and `]]`.
    pub inner: &'a str,
    /// Byte range of `raw` within the scanned buffer.
    pub span: Span,
    /// True iff the span is prefixed by `!`.
    pub is_embed: bool,
}

/// Finds the next well-formed wiki link span at or after byte offset `from`.
///
/// A span opens with `[[`, optionally preceded by `!`, and closes at the
/// first `]]` outside balanced parentheses. Malformed candidates (no closer,
/// unbalanced parentheses to end of input, empty content) are not errors:
/// the candidate is abandoned and scanning resumes at the next opener, so
/// the host treats the skipped text as ordinary content.
///
/// Escaping affects boundary detection only:
/// - an opener immediately preceded by a backslash is skipped;
/// - inside the span, a backslash makes the following bracket or parenthesis
///   plain content (no depth change, no closer start), except that the
///   terminating `]]` pair itself cannot be escaped, so a trailing backslash
///   stays literal in the content.
pub fn scan_next(text: &str, from: usize) -> Option<LinkSyntax<'_>> {
    let mut search = from;
    loop {
        let open = find_opener(text, search)?;
        match scan_candidate(text, open) {
            Some(syntax) => return Some(syntax),
            // Failed candidate: resume past this opener.
            None => search = open + WikiLink::OPEN.len(),
        }
    }
}

/// Locates the next `[[` at or after `from`. Escaped openers are not
/// filtered here; `scan_candidate` rejects them when it inspects the
/// preceding bytes.
fn find_opener(text: &str, from: usize) -> Option<usize> {
    let mut cur = Cursor::new(text, from);
    while !cur.eof() {
        if cur.starts_with(WikiLink::OPEN) {
            return Some(cur.pos());
        }
        cur.bump();
    }
    None
}

/// Attempts to scan a full span for the opener at byte offset `open`.
fn scan_candidate(text: &str, open: usize) -> Option<LinkSyntax<'_>> {
    let mut cur = Cursor::new(text, open);

    let mut is_embed = cur.peek_back(1) == Some(WikiLink::EMBED);
    let mut start = if is_embed { open - 1 } else { open };
    if is_embed && cur.peek_back(2) == Some(WikiLink::ESCAPE) {
        // `\![[x]]`: the bang is escaped text, the link itself still counts.
        is_embed = false;
        start = open;
    }
    if !is_embed && cur.peek_back(1) == Some(WikiLink::ESCAPE) {
        // `\[[x]]`: escaped opener, leave as plain text.
        return None;
    }

    cur.bump_n(WikiLink::OPEN.len());
    let inner_start = cur.pos();
    let mut depth: usize = 0;

    let inner_end = loop {
        if cur.eof() {
            // No closer before end of input.
            return None;
        }
        if cur.peek() == Some(WikiLink::ESCAPE) {
            let next = cur.peek_ahead(1);
            let at_closer = depth == 0
                && next == Some(WikiLink::BRACKET_CLOSE)
                && cur.peek_ahead(2) == Some(WikiLink::BRACKET_CLOSE);
            if !at_closer
                && matches!(
                    next,
                    Some(
                        WikiLink::PAREN_OPEN
                            | WikiLink::PAREN_CLOSE
                            | WikiLink::BRACKET_OPEN
                            | WikiLink::BRACKET_CLOSE
                    )
                )
            {
                cur.bump_n(2);
                continue;
            }
            // Literal backslash (including one right before the closer).
            cur.bump();
            continue;
        }
        if depth == 0 && cur.starts_with(WikiLink::CLOSE) {
            break cur.pos();
        }
        match cur.peek() {
            Some(WikiLink::PAREN_OPEN) => depth += 1,
            Some(WikiLink::PAREN_CLOSE) => depth = depth.saturating_sub(1),
            _ => {}
        }
        cur.bump();
    };

    if inner_end == inner_start {
        // `[[]]` carries no target and is left as plain text.
        return None;
    }

    let end = inner_end + WikiLink::CLOSE.len();
    Some(LinkSyntax {
        raw: &text[start..end],
        inner: &text[inner_start..inner_end],
        span: Span { start, end },
        is_embed,
    })
}
