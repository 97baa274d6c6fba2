use pretty_assertions::assert_eq;
use rstest::rstest;
use slidedeck_engine::rendering::{
    Block, InlineSpan, THUMBNAIL_BLOCK_CAP, ViewContext, plain_text, render,
};

fn text(s: &str) -> Vec<InlineSpan> {
    vec![InlineSpan::Text(s.to_string())]
}

#[test]
fn empty_input_produces_no_blocks() {
    assert_eq!(render("", ViewContext::Full), Vec::<Block>::new());
    assert_eq!(render("\n\n   \n", ViewContext::Full), Vec::<Block>::new());
}

#[test]
fn full_slide_renders_every_kind() {
    let content = "# Title\n## Section\n### Subsection\n- one\n- two\n1. first\nplain text";
    let blocks = render(content, ViewContext::Full);
    assert_eq!(
        blocks,
        vec![
            Block::Title {
                spans: text("Title")
            },
            Block::SectionHeader {
                spans: text("Section")
            },
            Block::SubsectionHeader {
                spans: text("Subsection")
            },
            Block::List {
                items: vec![text("one"), text("two")]
            },
            Block::OrderedItem {
                index: 1,
                spans: text("first")
            },
            Block::Paragraph {
                spans: text("plain text")
            },
        ]
    );
}

#[test]
fn renderer_is_idempotent() {
    let content = "# T\n- a\n\n- b\n**x** *y*\n3. z";
    assert_eq!(
        render(content, ViewContext::Full),
        render(content, ViewContext::Full)
    );
}

#[test]
fn single_bullet_line_is_a_one_item_list() {
    let blocks = render("- lonely", ViewContext::Full);
    assert_eq!(
        blocks,
        vec![Block::List {
            items: vec![text("lonely")]
        }]
    );
}

#[test]
fn blank_lines_do_not_break_a_bullet_run() {
    let blocks = render("- a\n\n- b", ViewContext::Full);
    assert_eq!(
        blocks,
        vec![Block::List {
            items: vec![text("a"), text("b")]
        }]
    );
}

#[test]
fn non_bullet_line_splits_runs() {
    let blocks = render("- a\nbetween\n- b", ViewContext::Full);
    assert_eq!(
        blocks,
        vec![
            Block::List {
                items: vec![text("a")]
            },
            Block::Paragraph {
                spans: text("between")
            },
            Block::List {
                items: vec![text("b")]
            },
        ]
    );
}

#[test]
fn input_ending_mid_run_still_flushes() {
    let blocks = render("intro\n- a\n- b", ViewContext::Full);
    assert_eq!(blocks.len(), 2);
    assert_eq!(
        blocks[1],
        Block::List {
            items: vec![text("a"), text("b")]
        }
    );
}

#[test]
fn numbered_lines_stay_separate_blocks() {
    let blocks = render("1. First\n2. Second", ViewContext::Full);
    assert_eq!(
        blocks,
        vec![
            Block::OrderedItem {
                index: 1,
                spans: text("First")
            },
            Block::OrderedItem {
                index: 2,
                spans: text("Second")
            },
        ]
    );
}

#[rstest]
#[case("#Heading")]
#[case("##Heading")]
#[case("###Heading")]
fn hash_without_space_is_a_paragraph(#[case] line: &str) {
    assert_eq!(
        render(line, ViewContext::Full),
        vec![Block::Paragraph { spans: text(line) }]
    );
}

#[test]
fn emphasis_resolves_inside_list_items() {
    let blocks = render("- **bold** and *italic*", ViewContext::Full);
    assert_eq!(
        blocks,
        vec![Block::List {
            items: vec![vec![
                InlineSpan::Strong("bold".to_string()),
                InlineSpan::Text(" and ".to_string()),
                InlineSpan::Emphasis("italic".to_string()),
            ]]
        }]
    );
}

#[test]
fn unmatched_marker_degrades_to_literal_text() {
    let blocks = render("* unmatched", ViewContext::Full);
    assert_eq!(
        blocks,
        vec![Block::Paragraph {
            spans: text("* unmatched")
        }]
    );
}

#[test]
fn thumbnail_caps_at_twelve_blocks() {
    let content: String = (1..=15)
        .map(|i| format!("paragraph {i}\n"))
        .collect();

    let full = render(&content, ViewContext::Full);
    let thumb = render(&content, ViewContext::Thumbnail);

    assert_eq!(full.len(), 15);
    assert_eq!(thumb.len(), THUMBNAIL_BLOCK_CAP);
    assert_eq!(thumb[..], full[..THUMBNAIL_BLOCK_CAP]);
}

#[test]
fn thumbnail_under_cap_is_untruncated() {
    let blocks = render("# T\npara", ViewContext::Thumbnail);
    assert_eq!(blocks.len(), 2);
}

/// Block count equals the number of maximal segments in the filtered line
/// sequence: each non-bullet line is its own segment, each bullet run is
/// one.
#[rstest]
#[case("# a\n## b\npara", 3)]
#[case("- a\n- b\n- c", 1)]
#[case("- a\nx\n- b\n- c\ny", 4)]
#[case("1. a\n2. b\n- c\n- d", 3)]
#[case("", 0)]
fn block_count_matches_segment_count(#[case] content: &str, #[case] expected: usize) {
    assert_eq!(render(content, ViewContext::Full).len(), expected);
}

/// No line is silently dropped: every filtered input line's text shows up
/// in the rendered blocks.
#[test]
fn semantic_content_is_preserved() {
    let content = "# Title\n- first\n- second\n7. step\nclosing words";
    let blocks = render(content, ViewContext::Full);

    let mut rendered = String::new();
    for block in &blocks {
        match block {
            Block::Title { spans }
            | Block::SectionHeader { spans }
            | Block::SubsectionHeader { spans }
            | Block::OrderedItem { spans, .. }
            | Block::Paragraph { spans } => rendered.push_str(&plain_text(spans)),
            Block::List { items } => {
                for item in items {
                    rendered.push_str(&plain_text(item));
                }
            }
        }
        rendered.push('\n');
    }

    for fragment in ["Title", "first", "second", "step", "closing words"] {
        assert!(rendered.contains(fragment), "missing {fragment:?}");
    }
}
