use super::types::InlineSpan;

/// Resolves emphasis markers in one line (or list item) of text.
///
/// Two independent passes, in a fixed order:
///
/// 1. Every non-overlapping `**content**` pair (non-greedy, shortest match)
///    becomes [`InlineSpan::Strong`]. Content is taken verbatim and not
///    re-scanned.
/// 2. The plain text left over from pass 1 is scanned again: every
///    non-overlapping `*content*` pair becomes [`InlineSpan::Emphasis`].
///
/// Pass 1 already consumed paired `**` markers, so pass 2 only sees single
/// asterisks (and any `**` that failed to close). Unmatched markers stay
/// literal; no input can fail to resolve.
pub fn resolve_spans(text: &str) -> Vec<InlineSpan> {
    let mut out = Vec::new();
    for span in strong_pass(text) {
        match span {
            InlineSpan::Text(t) => out.extend(emphasis_pass(&t)),
            other => out.push(other),
        }
    }
    out
}

/// Pass 1: splits `text` into `Text` / `Strong` spans on `**…**` pairs.
fn strong_pass(text: &str) -> Vec<InlineSpan> {
    let mut out = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;
    let bytes = text.as_bytes();

    while i < bytes.len() {
        if bytes[i..].starts_with(b"**")
            && let Some(close) = text[i + 2..].find("**")
        {
            flush_text(&mut out, text, plain_start, i);
            out.push(InlineSpan::Strong(text[i + 2..i + 2 + close].to_string()));
            i += 2 + close + 2;
            plain_start = i;
            continue;
        }
        // Not an opener (or unclosed): the marker stays literal and the
        // scan moves on one byte, same as a failed regex match position.
        i += next_char_len(text, i);
    }

    flush_text(&mut out, text, plain_start, text.len());
    out
}

/// Pass 2: splits pass-1 plain text into `Text` / `Emphasis` spans on
/// `*…*` pairs.
fn emphasis_pass(text: &str) -> Vec<InlineSpan> {
    let mut out = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;
    let bytes = text.as_bytes();

    while i < bytes.len() {
        if bytes[i] == b'*'
            && let Some(close) = text[i + 1..].find('*')
        {
            flush_text(&mut out, text, plain_start, i);
            out.push(InlineSpan::Emphasis(text[i + 1..i + 1 + close].to_string()));
            i += 1 + close + 1;
            plain_start = i;
            continue;
        }
        i += next_char_len(text, i);
    }

    flush_text(&mut out, text, plain_start, text.len());
    out
}

fn flush_text(out: &mut Vec<InlineSpan>, text: &str, start: usize, end: usize) {
    if end > start {
        out.push(InlineSpan::Text(text[start..end].to_string()));
    }
}

fn next_char_len(text: &str, i: usize) -> usize {
    text[i..].chars().next().map_or(1, char::len_utf8)
}
