//! HTML formatting for rendered blocks.
//!
//! Text reaches the output exclusively through [`html_escape`]; emphasis
//! arrives as typed spans from the renderer, so no raw markup from slide
//! content is ever injected.

use std::fmt::Write;

use crate::models::Slide;
use crate::rendering::{Block, InlineSpan, ViewContext, render};

/// Per-context class mapping. The same block tree renders under different
/// class vocabularies depending on the consuming view.
struct ViewClasses {
    root: &'static str,
    title: &'static str,
    section: &'static str,
    subsection: &'static str,
    list: &'static str,
    ordered: &'static str,
    paragraph: &'static str,
}

impl ViewClasses {
    fn for_view(view: ViewContext) -> Self {
        match view {
            ViewContext::Full => Self {
                root: "slide",
                title: "slide-title",
                section: "slide-section",
                subsection: "slide-subsection",
                list: "slide-list",
                ordered: "slide-ordered-item",
                paragraph: "slide-paragraph",
            },
            ViewContext::Thumbnail => Self {
                root: "thumb",
                title: "thumb-title",
                section: "thumb-section",
                subsection: "thumb-subsection",
                list: "thumb-list",
                ordered: "thumb-ordered-item",
                paragraph: "thumb-paragraph",
            },
        }
    }
}

/// Renders one slide's content to an HTML fragment for the given view.
pub fn render_slide_html(slide: &Slide, view: ViewContext) -> String {
    let classes = ViewClasses::for_view(view);
    let mut out = String::new();
    let _ = writeln!(out, "<section class=\"{}\">", classes.root);
    for block in render(&slide.content, view) {
        write_block(&mut out, &block, &classes);
    }
    out.push_str("</section>\n");
    out
}

/// Renders the whole deck as a standalone HTML document, slides in
/// presentation order. `deck_title` becomes the document title; it is the
/// deck's own name, independent of slide order.
pub fn render_deck_html(slides: &[Slide], deck_title: &str) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(
        out,
        "<title>{}</title>",
        html_escape::encode_text(deck_title)
    );
    out.push_str("</head>\n<body>\n");
    for slide in slides {
        out.push_str(&render_slide_html(slide, ViewContext::Full));
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn write_block(out: &mut String, block: &Block, classes: &ViewClasses) {
    match block {
        Block::Title { spans } => {
            let _ = writeln!(
                out,
                "<h1 class=\"{}\">{}</h1>",
                classes.title,
                spans_html(spans)
            );
        }
        Block::SectionHeader { spans } => {
            let _ = writeln!(
                out,
                "<h2 class=\"{}\">{}</h2>",
                classes.section,
                spans_html(spans)
            );
        }
        Block::SubsectionHeader { spans } => {
            let _ = writeln!(
                out,
                "<h3 class=\"{}\">{}</h3>",
                classes.subsection,
                spans_html(spans)
            );
        }
        Block::List { items } => {
            let _ = writeln!(out, "<ul class=\"{}\">", classes.list);
            for item in items {
                let _ = writeln!(out, "<li>{}</li>", spans_html(item));
            }
            out.push_str("</ul>\n");
        }
        Block::OrderedItem { index, spans } => {
            let _ = writeln!(
                out,
                "<div class=\"{}\"><span class=\"index\">{}</span> {}</div>",
                classes.ordered,
                index,
                spans_html(spans)
            );
        }
        Block::Paragraph { spans } => {
            let _ = writeln!(
                out,
                "<p class=\"{}\">{}</p>",
                classes.paragraph,
                spans_html(spans)
            );
        }
    }
}

fn spans_html(spans: &[InlineSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            InlineSpan::Text(t) => {
                let _ = write!(out, "{}", html_escape::encode_text(t));
            }
            InlineSpan::Strong(t) => {
                let _ = write!(out, "<strong>{}</strong>", html_escape::encode_text(t));
            }
            InlineSpan::Emphasis(t) => {
                let _ = write!(out, "<em>{}</em>", html_escape::encode_text(t));
            }
        }
    }
    out
}
