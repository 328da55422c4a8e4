use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::parsing::span::Span;

use super::{
    language::{SWIFT, keyword_pattern},
    types::{HighlightCategory, HighlightSpan},
};

/// Compiled patterns for the supported language.
struct Rules {
    strings: [Regex; 2],
    comments: [Regex; 2],
    keyword: Regex,
    number: Regex,
    type_identifier: Regex,
}

fn rules() -> &'static Rules {
    static RULES: OnceLock<Rules> = OnceLock::new();
    RULES.get_or_init(|| Rules {
        strings: [
            Regex::new(r#""[^"]*""#).expect("Invalid string regex"),
            Regex::new(r#"(?s)""".*?""""#).expect("Invalid multi-line string regex"),
        ],
        comments: [
            Regex::new(r"(?m)//.*$").expect("Invalid line comment regex"),
            Regex::new(r"(?s)/\*.*?\*/").expect("Invalid block comment regex"),
        ],
        keyword: Regex::new(&keyword_pattern()).expect("Invalid keyword regex"),
        number: Regex::new(r"\b\d+(?:\.\d+)?\b").expect("Invalid number regex"),
        type_identifier: Regex::new(r"\b[A-Z][a-zA-Z0-9_]*\b").expect("Invalid type regex"),
    })
}

/// Regex-based highlighter for fenced code blocks.
///
/// Highlighting is best effort and scoped to one language; blocks in any
/// other language come back as a single `Default` span.
#[derive(Debug, Clone)]
pub struct Highlighter {
    languages: Vec<String>,
}

impl Highlighter {
    /// A highlighter that accepts the canonical language name only.
    pub fn new() -> Self {
        Self::with_languages([SWIFT])
    }

    /// A highlighter that treats each of `languages` as the supported
    /// language. Matching is case-insensitive.
    pub fn with_languages<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Check if a fence language receives highlighting.
    pub fn supports(&self, language: &str) -> bool {
        let language = language.trim();
        self.languages
            .iter()
            .any(|l| l.eq_ignore_ascii_case(language))
    }

    /// Partitions `code` into highlight spans.
    ///
    /// The spans are ordered, never overlap and cover `0..code.len()`
    /// exactly; empty code yields no spans.
    pub fn highlight(&self, code: &str, language: &str) -> Vec<HighlightSpan> {
        if code.is_empty() {
            return vec![];
        }
        if !self.supports(language) {
            debug!("no highlighting for language {language:?}, rendering plain");
            return vec![HighlightSpan::new(
                Span::new(0, code.len()),
                HighlightCategory::Default,
            )];
        }

        let mut painter = Painter::new(code.len());
        let rules = rules();

        // Strings first: fixed once claimed.
        let strings = find_all(&rules.strings, code);
        for sp in &strings {
            painter.claim(*sp, HighlightCategory::String);
        }

        // Comments may only take what strings left, and never open inside
        // a string literal.
        let comments = find_comments(&rules.comments, code, &strings);
        for sp in &comments {
            painter.claim(*sp, HighlightCategory::Comment);
        }

        // Token classes skip any match starting in a string or comment
        // range; among themselves the later class overwrites.
        let opaque: Vec<Span> = strings.into_iter().chain(comments).collect();
        for (re, category) in [
            (&rules.keyword, HighlightCategory::Keyword),
            (&rules.number, HighlightCategory::Number),
            (&rules.type_identifier, HighlightCategory::TypeIdentifier),
        ] {
            for m in re.find_iter(code) {
                if opaque.iter().any(|sp| sp.contains(m.start())) {
                    continue;
                }
                painter.paint(Span::from(m.range()), category);
            }
        }

        painter.into_spans()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

fn find_all(patterns: &[Regex], code: &str) -> Vec<Span> {
    patterns
        .iter()
        .flat_map(|re| re.find_iter(code).map(|m| Span::from(m.range())))
        .collect()
}

/// Comment ranges in source order, scanning both comment forms together.
///
/// A comment opener inside a string is skipped by resuming after that
/// string; an opener inside an earlier comment belongs to that comment.
fn find_comments(patterns: &[Regex], code: &str, strings: &[Span]) -> Vec<Span> {
    let mut out = vec![];
    let mut at = 0;
    while let Some(m) = patterns
        .iter()
        .filter_map(|re| re.find_at(code, at))
        .min_by_key(|m| m.start())
    {
        if let Some(s) = strings.iter().find(|s| s.contains(m.start())) {
            at = s.end;
            continue;
        }
        out.push(Span::from(m.range()));
        at = m.end();
    }
    out
}

/// Per-byte category buffer.
struct Painter {
    cats: Vec<HighlightCategory>,
}

impl Painter {
    fn new(len: usize) -> Self {
        Self {
            cats: vec![HighlightCategory::Default; len],
        }
    }

    /// Sets `category` on positions of `sp` still at `Default`.
    fn claim(&mut self, sp: Span, category: HighlightCategory) {
        for c in &mut self.cats[sp.range()] {
            if *c == HighlightCategory::Default {
                *c = category;
            }
        }
    }

    /// Sets `category` on every position of `sp`.
    fn paint(&mut self, sp: Span, category: HighlightCategory) {
        self.cats[sp.range()].fill(category);
    }

    /// Collapses runs of equal categories into spans.
    fn into_spans(self) -> Vec<HighlightSpan> {
        let mut out: Vec<HighlightSpan> = vec![];
        for (i, &category) in self.cats.iter().enumerate() {
            match out.last_mut() {
                Some(last) if last.category == category => last.span.end = i + 1,
                _ => out.push(HighlightSpan::new(Span::new(i, i + 1), category)),
            }
        }
        out
    }
}
