use crate::parsing::lines::LineCursor;

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{BulletList, CodeFence, NumberedList},
    types::Block,
};

/// Groups classified lines into blocks.
///
/// Each step classifies the line under the cursor and lets the matching
/// construct consume as many lines as it spans. Single-line constructs take
/// one line; lists and fences advance the cursor past everything they
/// absorbed.
pub struct BlockBuilder {
    classifier: MarkdownLineClassifier,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            out: vec![],
        }
    }

    /// Consumes the construct starting at the cursor.
    pub fn push(&mut self, cur: &mut LineCursor<'_>) {
        let Some(raw) = cur.peek() else {
            return;
        };

        match self.classifier.classify(raw) {
            LineClass::Blank => {
                cur.bump();
                // Leading blank lines are dropped, every later one is kept.
                if !self.out.is_empty() {
                    self.out.push(Block::LineBreak);
                }
            }
            LineClass::Heading { level, text } => {
                cur.bump();
                self.out.push(Block::Heading {
                    level,
                    text: text.to_string(),
                });
            }
            LineClass::ThematicBreak => {
                cur.bump();
                self.out.push(Block::HorizontalRule);
            }
            LineClass::FenceOpen { language } => {
                cur.bump();
                self.consume_fence(cur, language);
            }
            LineClass::Quote { text } => {
                cur.bump();
                self.out.push(Block::Blockquote {
                    text: text.to_string(),
                });
            }
            LineClass::BulletItem { .. } => {
                let items = cur.take_while_map(|l| BulletList::item(l.trim()).map(str::to_string));
                self.out.push(Block::BulletList { items });
            }
            LineClass::NumberedItem { .. } => {
                let items =
                    cur.take_while_map(|l| NumberedList::item(l.trim()).map(str::to_string));
                self.out.push(Block::NumberedList { items });
            }
            LineClass::Text { text } => {
                cur.bump();
                self.out.push(Block::Paragraph {
                    text: text.to_string(),
                });
            }
        }
    }

    pub fn finish(self) -> Vec<Block> {
        self.out
    }

    fn consume_fence(&mut self, cur: &mut LineCursor<'_>, language: &str) {
        let start = cur.pos();
        let (lines, closed) = cur.take_until(CodeFence::closes);
        if !closed {
            // Unterminated fence: everything to EOF is code.
            log::debug!("code fence opened before line {start} is never closed");
        }
        self.out.push(Block::CodeBlock {
            code: lines.join("\n"),
            language: language.to_string(),
        });
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
