use std::fs;
use std::path::{Path, PathBuf};

use crate::store::SlideStore;

#[derive(Debug, thiserror::Error)]
pub enum DeckIoError {
    #[error("Deck file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid deck file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a deck file and return the slide store it contains.
pub fn load_deck(path: &Path) -> Result<SlideStore, DeckIoError> {
    if !path.exists() {
        return Err(DeckIoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write the slide store to a deck file, creating parent directories if
/// they don't exist.
pub fn save_deck(store: &SlideStore, path: &Path) -> Result<(), DeckIoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(store)?;
    fs::write(path, content)?;
    Ok(())
}
