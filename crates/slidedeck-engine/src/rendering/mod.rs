//! The block renderer: raw slide text in, ordered typed blocks out.
//!
//! A single-pass, line-oriented pipeline: blank lines are filtered, each
//! remaining line is classified ([`classify`]), consecutive bullet lines
//! are grouped into lists ([`builder`]), and emphasis markers are resolved
//! into typed spans ([`inline`]). The result is truncated per the caller's
//! [`ViewContext`].
//!
//! The renderer is pure and total: it holds no state between calls, does
//! no I/O, and produces a (possibly empty) block sequence for every input
//! string. Malformed markers degrade to literal text, never to an error.

pub mod block;
pub mod builder;
pub mod classify;
pub mod inline;
pub mod view;

pub use block::Block;
pub use inline::{InlineSpan, plain_text, resolve_spans};
pub use view::{THUMBNAIL_BLOCK_CAP, ViewContext};

use builder::BlockBuilder;
use classify::{classify_line, is_blank};

/// Renders one slide's raw content into an ordered block sequence.
///
/// Re-run on every content change; there is no incremental contract.
pub fn render(content: &str, view: ViewContext) -> Vec<Block> {
    let mut b = BlockBuilder::new();
    for line in content.lines().filter(|line| !is_blank(line)) {
        b.push(classify_line(line));
    }
    let mut blocks = b.finish();

    if let Some(cap) = view.max_blocks() {
        blocks.truncate(cap);
    }
    blocks
}
