use serde::{Deserialize, Serialize};

/// How many blocks a thumbnail shows before cutting off.
pub const THUMBNAIL_BLOCK_CAP: usize = 12;

/// The consumption mode that determines post-render truncation.
///
/// The editable view is not a context here: while editing, callers bypass
/// the renderer entirely and work on raw text, reverting to `Full` when
/// edit mode exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewContext {
    /// Renders every block.
    Full,
    /// Renders only the first [`THUMBNAIL_BLOCK_CAP`] blocks; anything
    /// past the cap is dropped, not summarized.
    Thumbnail,
}

impl ViewContext {
    pub(crate) fn max_blocks(self) -> Option<usize> {
        match self {
            ViewContext::Full => None,
            ViewContext::Thumbnail => Some(THUMBNAIL_BLOCK_CAP),
        }
    }
}
