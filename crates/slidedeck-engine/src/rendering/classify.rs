use std::sync::OnceLock;

use regex::Regex;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of rendering: each non-blank line is classified
/// independently, without reference to surrounding context. Whether a
/// bullet item opens, extends, or closes a list is decided later by the
/// [`BlockBuilder`](super::builder::BlockBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `"# "` prefix; carries the remainder after the prefix.
    Title(String),
    /// `"## "` prefix.
    SectionHeader(String),
    /// `"### "` prefix.
    SubsectionHeader(String),
    /// `"- "` or `"• "` prefix; one item of a (possibly longer) run.
    BulletItem(String),
    /// `"<digits>. "` prefix; carries the parsed index and the remainder.
    OrderedItem { index: u32, text: String },
    /// Anything else; carries the full line.
    Paragraph(String),
}

/// Matches "one or more digits, a literal period, one or more spaces" at
/// line start. Capture 1 is the digit run, capture 2 the remainder.
fn ordered_item_regex() -> &'static Regex {
    static ORDERED_ITEM: OnceLock<Regex> = OnceLock::new();
    ORDERED_ITEM
        .get_or_init(|| Regex::new(r"^(\d+)\.\s+(.*)$").expect("invalid ordered-item regex"))
}

/// Classifies one non-blank line into the block kind it would produce in
/// isolation.
///
/// Checks run in precedence order, first match wins. Prefix matches
/// require the literal space: `"#No space"` falls through to
/// [`LineKind::Paragraph`].
pub fn classify_line(line: &str) -> LineKind {
    if let Some(rest) = line.strip_prefix("# ") {
        return LineKind::Title(rest.to_string());
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return LineKind::SectionHeader(rest.to_string());
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return LineKind::SubsectionHeader(rest.to_string());
    }
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("• ")) {
        return LineKind::BulletItem(rest.to_string());
    }
    if let Some(caps) = ordered_item_regex().captures(line) {
        // A digit run too long for u32 is not a plausible list index;
        // treat the line as prose instead.
        if let Ok(index) = caps[1].parse::<u32>() {
            return LineKind::OrderedItem {
                index,
                text: caps[2].to_string(),
            };
        }
    }
    LineKind::Paragraph(line.to_string())
}

/// Lines consisting only of whitespace are discarded before classification.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
