//! Turns parsed blocks into styled terminal lines.
//!
//! Rendering is split in two: `render_blocks` lays a document out as lines of
//! role-tagged segments, and each front end (plain stdout, the pager) maps
//! roles to its own styling.

use crossterm::style::{Color, Stylize, style};
use markdown_reader_engine::{Block, HighlightCategory, Highlighter, InlineSpan, resolve_spans};

const RULE_WIDTH: usize = 40;

/// What a piece of rendered text represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Plain,
    Heading,
    Bold,
    Italic,
    Code,
    /// Link text; the index points into [`Rendered::links`].
    Link(usize),
    LinkUrl,
    Quote,
    Marker,
    Rule,
    Source(HighlightCategory),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub role: Role,
}

impl Segment {
    fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }
}

pub type RenderedLine = Vec<Segment>;

/// A laid out document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub lines: Vec<RenderedLine>,
    /// Link urls in reading order.
    pub links: Vec<String>,
}

pub fn render_blocks(blocks: &[Block], highlighter: &Highlighter) -> Rendered {
    let mut out = Rendered::default();

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let mut line = vec![Segment::new(
                    format!("{} ", "#".repeat(usize::from(*level))),
                    Role::Marker,
                )];
                push_inline(&mut out.links, &mut line, text, Role::Heading);
                out.lines.push(line);
            }
            Block::Paragraph { text } => {
                let mut line = vec![];
                push_inline(&mut out.links, &mut line, text, Role::Plain);
                out.lines.push(line);
            }
            Block::BulletList { items } => {
                for item in items {
                    let mut line = vec![Segment::new("• ", Role::Marker)];
                    push_inline(&mut out.links, &mut line, item, Role::Plain);
                    out.lines.push(line);
                }
            }
            Block::NumberedList { items } => {
                for (n, item) in items.iter().enumerate() {
                    let mut line = vec![Segment::new(format!("{}. ", n + 1), Role::Marker)];
                    push_inline(&mut out.links, &mut line, item, Role::Plain);
                    out.lines.push(line);
                }
            }
            Block::Blockquote { text } => {
                let mut line = vec![Segment::new("│ ", Role::Quote)];
                push_inline(&mut out.links, &mut line, text, Role::Quote);
                out.lines.push(line);
            }
            Block::HorizontalRule => {
                out.lines
                    .push(vec![Segment::new("─".repeat(RULE_WIDTH), Role::Rule)]);
            }
            Block::LineBreak => out.lines.push(vec![]),
            Block::CodeBlock { code, language } => {
                out.lines.extend(code_lines(code, language, highlighter));
            }
        }
    }

    out
}

fn push_inline(links: &mut Vec<String>, line: &mut RenderedLine, text: &str, plain: Role) {
    for span in resolve_spans(text) {
        match span {
            InlineSpan::PlainText(t) => line.push(Segment::new(t, plain)),
            InlineSpan::Bold(t) => line.push(Segment::new(t, Role::Bold)),
            InlineSpan::Italic(t) => line.push(Segment::new(t, Role::Italic)),
            InlineSpan::InlineCode(t) => line.push(Segment::new(t, Role::Code)),
            InlineSpan::Link { text, url } => {
                line.push(Segment::new(text, Role::Link(links.len())));
                line.push(Segment::new(format!(" ({url})"), Role::LinkUrl));
                links.push(url);
            }
        }
    }
}

/// Splits highlighted code into display lines. Always yields at least one
/// line so an empty block keeps its place.
fn code_lines(code: &str, language: &str, highlighter: &Highlighter) -> Vec<RenderedLine> {
    let mut lines = vec![];
    let mut current: RenderedLine = vec![];

    for hs in highlighter.highlight(code, language) {
        let role = Role::Source(hs.category);
        let mut pieces = code[hs.span.range()].split('\n');
        if let Some(first) = pieces.next()
            && !first.is_empty()
        {
            current.push(Segment::new(first, role));
        }
        for piece in pieces {
            lines.push(std::mem::take(&mut current));
            if !piece.is_empty() {
                current.push(Segment::new(piece, role));
            }
        }
    }
    lines.push(current);
    lines
}

/// Formats rendered lines for stdout, with ANSI styling when `color` is set.
pub fn to_ansi(rendered: &Rendered, color: bool) -> String {
    let mut out = String::new();
    for line in &rendered.lines {
        for seg in line {
            if color {
                out.push_str(&styled(seg));
            } else {
                out.push_str(&seg.text);
            }
        }
        out.push('\n');
    }
    out
}

fn styled(seg: &Segment) -> String {
    let text = seg.text.as_str();
    match seg.role {
        Role::Plain | Role::Source(HighlightCategory::Default) => text.to_string(),
        Role::Heading | Role::Bold => style(text).bold().to_string(),
        Role::Italic => style(text).italic().to_string(),
        Role::Code => style(text).with(Color::Yellow).to_string(),
        Role::Link(_) => style(text).with(Color::Blue).underlined().to_string(),
        Role::LinkUrl | Role::Marker | Role::Rule => style(text).dim().to_string(),
        Role::Quote => style(text).italic().dim().to_string(),
        Role::Source(category) => match source_color(category) {
            Some(c) => style(text).with(c).to_string(),
            None => text.to_string(),
        },
    }
}

/// Terminal colour for a highlight category.
pub fn source_color(category: HighlightCategory) -> Option<Color> {
    match category {
        HighlightCategory::String => Some(Color::Red),
        HighlightCategory::Comment => Some(Color::Green),
        HighlightCategory::Keyword => Some(Color::Magenta),
        HighlightCategory::Number => Some(Color::Blue),
        HighlightCategory::TypeIdentifier => Some(Color::Cyan),
        HighlightCategory::Default => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdown_reader_engine::parse_blocks;
    use pretty_assertions::assert_eq;

    fn render(text: &str) -> Rendered {
        render_blocks(&parse_blocks(text), &Highlighter::new())
    }

    #[test]
    fn plain_output_strips_markup() {
        let text = "# Title\n\nSome **bold** and [a link](b.md).\n- one\n1. first\n2. second\n> quoted\n---";
        assert_eq!(
            to_ansi(&render(text), false),
            format!(
                "# Title\n\nSome bold and a link (b.md).\n• one\n1. first\n2. second\n│ quoted\n{}\n",
                "─".repeat(RULE_WIDTH)
            )
        );
    }

    #[test]
    fn links_are_numbered_in_reading_order() {
        let rendered = render("[a](1.md) [b](https://x.io)\n- [c](2.md)");
        assert_eq!(rendered.links, vec!["1.md", "https://x.io", "2.md"]);

        let link_roles: Vec<_> = rendered
            .lines
            .iter()
            .flatten()
            .filter_map(|s| match s.role {
                Role::Link(i) => Some((s.text.as_str(), i)),
                _ => None,
            })
            .collect();
        assert_eq!(link_roles, vec![("a", 0), ("b", 1), ("c", 2)]);
    }

    #[test]
    fn code_blocks_split_into_highlighted_lines() {
        let rendered = render("```swift\nlet a = 1\n// done\n```");
        assert_eq!(
            rendered.lines,
            vec![
                vec![
                    Segment::new("let", Role::Source(HighlightCategory::Keyword)),
                    Segment::new(" a = ", Role::Source(HighlightCategory::Default)),
                    Segment::new("1", Role::Source(HighlightCategory::Number)),
                ],
                vec![Segment::new(
                    "// done",
                    Role::Source(HighlightCategory::Comment)
                )],
            ]
        );
    }

    #[test]
    fn multi_line_span_keeps_its_category_on_each_line() {
        let rendered = render("```swift\n/* a\nb */\n```");
        let comment = Role::Source(HighlightCategory::Comment);
        assert_eq!(
            rendered.lines,
            vec![
                vec![Segment::new("/* a", comment)],
                vec![Segment::new("b */", comment)],
            ]
        );
    }

    #[test]
    fn empty_code_block_keeps_one_line() {
        let rendered = render("```\n```");
        assert_eq!(rendered.lines, vec![Vec::<Segment>::new()]);
    }

    #[test]
    fn color_output_keeps_every_segment_text() {
        let out = to_ansi(&render("Some **bold** and `code`\n```swift\nlet n = 5\n```"), true);
        for text in ["Some ", "bold", " and ", "code", "let", " n = ", "5"] {
            assert!(out.contains(text), "missing {text:?} in {out:?}");
        }
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn color_output_styles_headings() {
        let out = to_ansi(&render("# Title"), true);
        assert!(out.contains('\u{1b}'));
        assert!(out.contains("Title"));
    }
}
