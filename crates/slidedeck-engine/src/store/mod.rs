use serde::{Deserialize, Serialize};

use crate::models::{SEED_SLIDES, Slide, SlideId, SlideUpdate};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("slide not found: {0}")]
    NotFound(SlideId),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("title exceeds {MAX_TITLE_LEN} characters")]
    TitleTooLong,
}

/// Upper bound on title length, carried over from the original schema.
pub const MAX_TITLE_LEN: usize = 255;

/// A stored slide plus its active flag. Deleting a slide flips the flag;
/// the record is retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SlideRecord {
    #[serde(flatten)]
    slide: Slide,
    is_active: bool,
}

/// In-memory slide store with soft delete and explicit ordering.
///
/// Listing returns active slides sorted by `order` ascending, ties broken
/// by id ascending. `reorder` sets a slide's `order` field directly and
/// never renumbers other rows; callers wanting contiguous order submit a
/// full renumbering themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideStore {
    records: Vec<SlideRecord>,
    next_id: u32,
}

impl Default for SlideStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideStore {
    pub fn new() -> Self {
        Self {
            records: vec![],
            next_id: 1,
        }
    }

    /// A store pre-populated with the sample deck.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (i, (title, content)) in SEED_SLIDES.iter().enumerate() {
            store
                .create(title, content, i as i32)
                .expect("seed slides are valid");
        }
        store
    }

    /// Active slides in presentation order.
    pub fn list(&self) -> Vec<Slide> {
        let mut slides: Vec<Slide> = self
            .records
            .iter()
            .filter(|r| r.is_active)
            .map(|r| r.slide.clone())
            .collect();
        slides.sort_by_key(|s| (s.order, s.id));
        slides
    }

    /// Looks up an active slide. Soft-deleted ids report `NotFound`, same
    /// as ids that never existed.
    pub fn get(&self, id: SlideId) -> Result<Slide, StoreError> {
        self.active_record(id).map(|r| r.slide.clone())
    }

    pub fn create(
        &mut self,
        title: &str,
        content: &str,
        order: i32,
    ) -> Result<Slide, StoreError> {
        let title = validate_title(title)?;
        let content = validate_content(content)?;

        let slide = Slide {
            id: SlideId(self.next_id),
            title,
            content,
            order,
        };
        self.next_id += 1;
        self.records.push(SlideRecord {
            slide: slide.clone(),
            is_active: true,
        });
        Ok(slide)
    }

    /// Applies the provided fields, leaving the rest untouched. Text
    /// fields are trimmed and validated like on create.
    pub fn update(&mut self, id: SlideId, update: SlideUpdate) -> Result<Slide, StoreError> {
        let title = update.title.map(|t| validate_title(&t)).transpose()?;
        let content = update.content.map(|c| validate_content(&c)).transpose()?;

        let record = self.active_record_mut(id)?;
        if let Some(title) = title {
            record.slide.title = title;
        }
        if let Some(content) = content {
            record.slide.content = content;
        }
        if let Some(order) = update.order {
            record.slide.order = order;
        }
        Ok(record.slide.clone())
    }

    /// Flips the active flag; the record stays in the store.
    pub fn soft_delete(&mut self, id: SlideId) -> Result<(), StoreError> {
        let record = self.active_record_mut(id)?;
        record.is_active = false;
        Ok(())
    }

    /// Sets the slide's `order` directly. Other rows keep their order.
    pub fn reorder(&mut self, id: SlideId, new_order: i32) -> Result<Slide, StoreError> {
        let record = self.active_record_mut(id)?;
        record.slide.order = new_order;
        Ok(record.slide.clone())
    }

    /// Number of active slides.
    pub fn len(&self) -> usize {
        self.records.iter().filter(|r| r.is_active).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn active_record(&self, id: SlideId) -> Result<&SlideRecord, StoreError> {
        self.records
            .iter()
            .find(|r| r.slide.id == id && r.is_active)
            .ok_or(StoreError::NotFound(id))
    }

    fn active_record_mut(&mut self, id: SlideId) -> Result<&mut SlideRecord, StoreError> {
        self.records
            .iter_mut()
            .find(|r| r.slide.id == id && r.is_active)
            .ok_or(StoreError::NotFound(id))
    }
}

fn validate_title(title: &str) -> Result<String, StoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(StoreError::EmptyField("title"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(StoreError::TitleTooLong);
    }
    Ok(title.to_string())
}

fn validate_content(content: &str) -> Result<String, StoreError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(StoreError::EmptyField("content"));
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(titles: &[(&str, i32)]) -> SlideStore {
        let mut store = SlideStore::new();
        for (title, order) in titles {
            store.create(title, "# Body", *order).unwrap();
        }
        store
    }

    #[test]
    fn list_sorts_by_order_then_id() {
        let store = store_with(&[("b", 2), ("a", 1), ("tie", 2)]);
        let titles: Vec<_> = store.list().into_iter().map(|s| s.title).collect();
        // "b" (id 1) sorts before "tie" (id 3) at equal order
        assert_eq!(titles, vec!["a", "b", "tie"]);
    }

    #[test]
    fn soft_delete_hides_but_retains() {
        let mut store = store_with(&[("one", 0), ("two", 1)]);
        let id = store.list()[0].id;
        store.soft_delete(id).unwrap();

        assert_eq!(store.len(), 1);
        assert!(matches!(store.get(id), Err(StoreError::NotFound(_))));
        // Record survives a serialization round trip
        let json = serde_json::to_string(&store).unwrap();
        let restored: SlideStore = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.records.len(), 2);
    }

    #[test]
    fn deleted_id_is_never_reused() {
        let mut store = store_with(&[("one", 0)]);
        let id = store.list()[0].id;
        store.soft_delete(id).unwrap();
        let fresh = store.create("two", "# Body", 0).unwrap();
        assert_ne!(fresh.id, id);
    }

    #[test]
    fn create_trims_and_validates() {
        let mut store = SlideStore::new();
        let slide = store.create("  padded  ", "  # Body  ", 0).unwrap();
        assert_eq!(slide.title, "padded");
        assert_eq!(slide.content, "# Body");

        assert!(matches!(
            store.create("   ", "# Body", 0),
            Err(StoreError::EmptyField("title"))
        ));
        assert!(matches!(
            store.create("t", "  ", 0),
            Err(StoreError::EmptyField("content"))
        ));
        let long = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(matches!(
            store.create(&long, "# Body", 0),
            Err(StoreError::TitleTooLong)
        ));
    }

    #[test]
    fn update_is_partial() {
        let mut store = store_with(&[("before", 3)]);
        let id = store.list()[0].id;

        let updated = store.update(id, SlideUpdate::title("after")).unwrap();
        assert_eq!(updated.title, "after");
        assert_eq!(updated.order, 3);
        assert_eq!(updated.content, "# Body");
    }

    #[test]
    fn reorder_leaves_other_rows_alone() {
        let mut store = store_with(&[("a", 0), ("b", 1), ("c", 2)]);
        let ids: Vec<_> = store.list().into_iter().map(|s| s.id).collect();

        store.reorder(ids[0], 5).unwrap();

        let listed = store.list();
        assert_eq!(listed[0].order, 1); // "b" untouched
        assert_eq!(listed[1].order, 2); // "c" untouched
        assert_eq!(listed[2].order, 5);
    }

    #[test]
    fn operations_on_missing_slide_fail() {
        let mut store = SlideStore::new();
        let ghost = SlideId(99);
        assert!(matches!(store.get(ghost), Err(StoreError::NotFound(_))));
        assert!(matches!(
            store.update(ghost, SlideUpdate::order(1)),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.soft_delete(ghost),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.reorder(ghost, 1),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn seeded_store_has_sample_slides() {
        let store = SlideStore::seeded();
        assert_eq!(store.len(), crate::models::SEED_SLIDES.len());
        assert_eq!(store.list()[0].title, "Welcome");
    }
}
