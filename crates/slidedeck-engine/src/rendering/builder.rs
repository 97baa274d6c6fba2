use super::block::Block;
use super::classify::LineKind;
use super::inline::resolve_spans;

/// Accumulates classified lines into blocks, grouping bullet runs.
///
/// Bullet items are buffered until the run ends; any non-bullet line (or
/// end of input) flushes the buffer as a single [`Block::List`]. Blank
/// lines are filtered out before lines reach the builder, so a blank line
/// never breaks a run. Every other line kind maps to one block.
pub struct BlockBuilder {
    pending_items: Vec<Vec<super::inline::InlineSpan>>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            pending_items: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, kind: LineKind) {
        if let LineKind::BulletItem(text) = kind {
            self.pending_items.push(resolve_spans(&text));
            return;
        }

        self.flush_list();
        let block = match kind {
            LineKind::Title(text) => Block::Title {
                spans: resolve_spans(&text),
            },
            LineKind::SectionHeader(text) => Block::SectionHeader {
                spans: resolve_spans(&text),
            },
            LineKind::SubsectionHeader(text) => Block::SubsectionHeader {
                spans: resolve_spans(&text),
            },
            LineKind::OrderedItem { index, text } => Block::OrderedItem {
                index,
                spans: resolve_spans(&text),
            },
            LineKind::Paragraph(text) => Block::Paragraph {
                spans: resolve_spans(&text),
            },
            LineKind::BulletItem(_) => unreachable!("bullet items are buffered above"),
        };
        self.out.push(block);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // Input ending mid-run is itself a last-of-run condition.
        self.flush_list();
        self.out
    }

    fn flush_list(&mut self) {
        if !self.pending_items.is_empty() {
            let items = std::mem::take(&mut self.pending_items);
            self.out.push(Block::List { items });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
