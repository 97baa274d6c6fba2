use pretty_assertions::assert_eq;
use slidedeck_engine::io::{load_deck, save_deck};
use slidedeck_engine::{SlideStore, SlideUpdate, ViewContext, render};
use tempfile::TempDir;

/// End-to-end pass over the editor's persistence round trip: create,
/// update, reorder, delete, save, reload, render.
#[test]
fn deck_lifecycle_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deck.json");

    let mut store = SlideStore::new();
    let a = store.create("Alpha", "# Alpha\n- one\n- two", 0).unwrap();
    let b = store.create("Beta", "# Beta", 1).unwrap();
    let c = store.create("Gamma", "# Gamma", 2).unwrap();

    // Editing content takes effect on the next render, nothing is cached
    store
        .update(a.id, SlideUpdate::content("# Alpha\n- one\n- two\n- three"))
        .unwrap();
    let rendered = render(&store.get(a.id).unwrap().content, ViewContext::Full);
    assert_eq!(rendered.len(), 2); // title + one list

    // Move Gamma to the front via a coherent full renumbering
    for (position, slide) in [c.id, a.id, b.id].into_iter().enumerate() {
        store.reorder(slide, position as i32).unwrap();
    }
    let titles: Vec<_> = store.list().into_iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["Gamma", "Alpha", "Beta"]);

    store.soft_delete(b.id).unwrap();

    save_deck(&store, &path).unwrap();
    let reloaded = load_deck(&path).unwrap();

    let titles: Vec<_> = reloaded.list().into_iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["Gamma", "Alpha"]);
    assert!(reloaded.get(b.id).is_err());
}

#[test]
fn seeded_deck_renders_without_errors() {
    let store = SlideStore::seeded();
    for slide in store.list() {
        let blocks = render(&slide.content, ViewContext::Full);
        assert!(!blocks.is_empty(), "seed slide {} rendered empty", slide.id);
        // Thumbnail is always a prefix of the full render
        let thumb = render(&slide.content, ViewContext::Thumbnail);
        assert_eq!(thumb[..], blocks[..thumb.len()]);
    }
}
