pub mod blocks;
pub mod inline;
pub mod lines;
pub mod span;

use blocks::{Block, BlockBuilder};
use inline::InlineSpan;
use lines::LineCursor;

/// Parses a whole document into blocks, in document order.
///
/// Total: every input produces a block list, unrecognized lines degrade to
/// paragraphs and an unterminated fence runs to the end of the text.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut cur = LineCursor::new(text);
    let mut builder = BlockBuilder::new();

    while !cur.eof() {
        builder.push(&mut cur);
    }

    let blocks = builder.finish();
    log::debug!(
        "parsed {} lines into {} blocks",
        cur.pos(),
        blocks.len()
    );
    blocks
}

/// Convenience: inline resolution for every text a block displays.
///
/// Returns one span list per text, so list blocks yield one entry per item
/// and code blocks yield nothing.
pub fn inline_spans_for_block(b: &Block) -> Vec<Vec<InlineSpan>> {
    b.inline_texts()
        .into_iter()
        .map(inline::resolve_spans)
        .collect()
}
