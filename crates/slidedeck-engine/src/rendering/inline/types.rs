use serde::{Deserialize, Serialize};

/// A resolved inline span: a marked sub-range of a line's text.
///
/// Spans are single-level by design. `Strong` and `Emphasis` carry their
/// content verbatim; content is never re-scanned for nested emphasis.
/// View layers render these without any raw-markup injection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineSpan {
    /// Plain text that isn't part of any emphasis construct.
    Text(String),
    /// Bold text from a `**…**` pair.
    Strong(String),
    /// Italic text from a `*…*` pair.
    Emphasis(String),
}

impl InlineSpan {
    /// The span's text content, regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Text(s) | InlineSpan::Strong(s) | InlineSpan::Emphasis(s) => s,
        }
    }
}

/// Concatenates the plain text of a span sequence, dropping markup kinds.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::text).collect()
}
