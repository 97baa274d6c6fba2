use serde::{Deserialize, Serialize};

use super::inline::InlineSpan;

/// One classified, renderable unit derived from one or more input lines.
///
/// Blocks are what view layers consume. The concatenation of blocks, in
/// order, reconstructs the semantic content of the non-blank input lines:
/// nothing is dropped, and each maximal run of consecutive bullet lines
/// collapses into exactly one [`Block::List`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// Slide title, from a line starting with `"# "`.
    Title { spans: Vec<InlineSpan> },
    /// Section header, from `"## "`.
    SectionHeader { spans: Vec<InlineSpan> },
    /// Subsection header, from `"### "`.
    SubsectionHeader { spans: Vec<InlineSpan> },
    /// A bullet list accumulated from consecutive `"- "` / `"• "` lines.
    List { items: Vec<Vec<InlineSpan>> },
    /// A single numbered line (`"<digits>. "`). Numbered lines are never
    /// grouped; each yields its own block with its literal index.
    OrderedItem { index: u32, spans: Vec<InlineSpan> },
    /// Any other non-blank line.
    Paragraph { spans: Vec<InlineSpan> },
}
