//! Settings for the slidedeck frontends.
//!
//! The settings file lives at `~/.config/slidedeck/config.toml` and is
//! optional. When it is absent the deck falls back to a default location
//! under the user's data directory, so a first run needs no setup at all.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings at {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse settings at {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot write settings at {path}: {source}")]
    Unwritable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("deck path {0} is a directory, expected a JSON deck file")]
    DeckPathIsDirectory(PathBuf),
}

/// Where the settings file lives.
pub fn config_file() -> PathBuf {
    expand(Path::new("~/.config/slidedeck/config.toml"))
}

/// Deck location used when no settings file names one.
pub fn default_deck_path() -> PathBuf {
    expand(Path::new("~/.local/share/slidedeck/deck.json"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Deck file the frontends open when no path argument is given.
    pub deck_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deck_path: default_deck_path(),
        }
    }
}

impl Config {
    /// Loads the user's settings, falling back to defaults when the file
    /// does not exist. Tilde and `$VAR` references in `deck_path` are
    /// expanded, and a path that names a directory is rejected outright
    /// rather than surfacing later as a deck read failure.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: Config = toml::from_str(&raw).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

        let deck_path = expand(&parsed.deck_path);
        if deck_path.is_dir() {
            return Err(ConfigError::DeckPathIsDirectory(deck_path));
        }
        Ok(Self { deck_path })
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let body = toml::to_string_pretty(self)?;
        let write = |p: &Path| -> std::io::Result<()> {
            if let Some(parent) = p.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(p, &body)
        };
        write(path).map_err(|source| ConfigError::Unwritable {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Expands `~` and `$VAR` references. Unresolvable references leave the
/// path as written; the deck loader will report the miss with the literal
/// path, which is more useful than failing here.
fn expand(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}
