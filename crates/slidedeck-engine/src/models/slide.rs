use serde::{Deserialize, Serialize};

/// Store-assigned slide identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SlideId(pub u32);

impl std::fmt::Display for SlideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One slide as exposed to view layers.
///
/// `content` is the raw newline-delimited body; all structure is derived
/// at render time from this string, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    pub content: String,
    pub order: i32,
}

/// Partial update for [`SlideStore::update`](crate::store::SlideStore::update);
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub order: Option<i32>,
}

impl SlideUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn order(order: i32) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }
}
