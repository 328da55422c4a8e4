use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, Strong},
    types::{InlineSpan, LocatedSpan},
};

/// Inline construct categories, in tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Code,
    Link,
    Bold,
    Italic,
}

impl MatchKind {
    /// Scan order. Matches starting at the same offset keep this order.
    pub const ALL: [MatchKind; 4] = [
        MatchKind::Code,
        MatchKind::Link,
        MatchKind::Bold,
        MatchKind::Italic,
    ];
}

/// A raw match found by one of the per-kind scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineMatch {
    pub kind: MatchKind,
    /// Full span including delimiters.
    pub full: Span,
    /// Visible content: code, link text, bold or italic text.
    pub inner: Span,
    /// Link target, for `MatchKind::Link` only.
    pub url: Option<Span>,
}

/// Resolves one line into inline spans.
///
/// Never returns an empty vector: a line without formatting (including the
/// empty line) yields a single `PlainText`.
pub fn resolve_spans(line: &str) -> Vec<InlineSpan> {
    resolve_located_spans(line)
        .into_iter()
        .map(|l| l.inline)
        .collect()
}

/// Like [`resolve_spans`], keeping the source range of every span.
///
/// The returned spans cover `0..line.len()` without gaps or overlaps.
///
/// # Algorithm
/// Each kind is scanned independently over the whole line. All matches are
/// merged, stably sorted by start offset, then walked left to right with
/// plain text filling the gaps. A match that starts inside one already
/// emitted is dropped, so the earliest match always wins.
pub fn resolve_located_spans(line: &str) -> Vec<LocatedSpan> {
    let mut matches: Vec<InlineMatch> = MatchKind::ALL
        .iter()
        .flat_map(|&kind| scan(line, kind))
        .collect();
    matches.sort_by_key(|m| m.full.start);

    let mut out = vec![];
    let mut cursor = 0usize;

    fn flush_text(out: &mut Vec<LocatedSpan>, line: &str, start: usize, end: usize) {
        if end > start {
            out.push(LocatedSpan {
                span: Span::new(start, end),
                inline: InlineSpan::PlainText(line[start..end].to_string()),
            });
        }
    }

    for m in matches {
        if m.full.start < cursor {
            continue;
        }
        flush_text(&mut out, line, cursor, m.full.start);
        out.push(LocatedSpan {
            span: m.full,
            inline: to_inline(line, &m),
        });
        cursor = m.full.end;
    }
    flush_text(&mut out, line, cursor, line.len());

    if out.is_empty() {
        out.push(LocatedSpan {
            span: Span::new(0, line.len()),
            inline: InlineSpan::PlainText(line.to_string()),
        });
    }
    out
}

/// Finds every non-overlapping match of one kind, left to right.
pub fn scan(s: &str, kind: MatchKind) -> Vec<InlineMatch> {
    let try_parse: fn(&mut Cursor<'_>) -> Option<InlineMatch> = match kind {
        MatchKind::Code => try_parse_code_span,
        MatchKind::Link => try_parse_link,
        MatchKind::Bold => try_parse_bold,
        MatchKind::Italic => try_parse_italic,
    };

    let mut cur = Cursor::new(s, 0);
    let mut out = vec![];
    while !cur.eof() {
        match try_parse(&mut cur) {
            Some(m) => out.push(m),
            None => {
                cur.bump();
            }
        }
    }
    out
}

fn to_inline(line: &str, m: &InlineMatch) -> InlineSpan {
    let inner = line[m.inner.range()].to_string();
    match m.kind {
        MatchKind::Code => InlineSpan::InlineCode(inner),
        MatchKind::Bold => InlineSpan::Bold(inner),
        MatchKind::Italic => InlineSpan::Italic(inner),
        MatchKind::Link => InlineSpan::Link {
            text: inner,
            url: m.url.map(|u| line[u.range()].to_string()).unwrap_or_default(),
        },
    }
}

/// Attempts to parse a code span starting at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineMatch> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();
    cur.bump_until(&[CodeSpan::TICK]);
    let inner_end = cur.pos();

    if inner_end == inner_start || cur.peek() != Some(CodeSpan::TICK) {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(InlineMatch {
        kind: MatchKind::Code,
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
        url: None,
    })
}

/// Attempts to parse `[text](url)` starting at the current position.
///
/// The text runs to the first `]` and the url to the first `)`; both must be
/// non-empty. On failure, cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineMatch> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [
    let text_start = cur.pos();
    cur.bump_until(&[Link::TEXT_CLOSE]);
    let text_end = cur.pos();

    if text_end == text_start || !cur.starts_with(Link::MIDDLE) {
        *cur = saved;
        return None;
    }
    cur.bump_n(Link::MIDDLE.len());

    let url_start = cur.pos();
    cur.bump_until(&[Link::URL_CLOSE]);
    let url_end = cur.pos();

    if url_end == url_start || cur.peek() != Some(Link::URL_CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(InlineMatch {
        kind: MatchKind::Link,
        full: Span::new(start, cur.pos()),
        inner: Span::new(text_start, text_end),
        url: Some(Span::new(url_start, url_end)),
    })
}

/// Attempts to parse `**text**` starting at the current position.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<InlineMatch> {
    if !cur.starts_with(Strong::DELIM) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(Strong::DELIM.len());
    let inner_start = cur.pos();
    cur.bump_until(Strong::STOPS);
    let inner_end = cur.pos();

    if inner_end == inner_start || !cur.starts_with(Strong::DELIM) {
        *cur = saved;
        return None;
    }
    cur.bump_n(Strong::DELIM.len());

    Some(InlineMatch {
        kind: MatchKind::Bold,
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
        url: None,
    })
}

/// Attempts to parse `*text*` starting at the current position.
///
/// Neither delimiter may touch another `*`, so the delimiters of a bold pair
/// never register as italics.
fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<InlineMatch> {
    if cur.peek() != Some(Emphasis::STAR) || cur.prev() == Some(Emphasis::STAR) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // *
    let inner_start = cur.pos();
    cur.bump_until(Emphasis::STOPS);
    let inner_end = cur.pos();

    if inner_end == inner_start || cur.peek() != Some(Emphasis::STAR) {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing *
    if cur.peek() == Some(Emphasis::STAR) {
        *cur = saved;
        return None;
    }

    Some(InlineMatch {
        kind: MatchKind::Italic,
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
        url: None,
    })
}
