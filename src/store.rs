//! Persistent storage for the high score, coin balance and unlocked colors.
//!
//! The record lives in a single JSON file and is rewritten in full after every
//! mutation. Writes go to a sibling temp file first and are renamed into
//! place, so a crash mid-write leaves the previous record intact.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cosmetics::SnakeColor;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write record {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

fn default_unlocked() -> Vec<String> {
    vec![SnakeColor::default().name().to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(default)]
    pub high_score: u32,
    #[serde(default)]
    pub coins: u32,
    #[serde(default = "default_unlocked")]
    pub unlocked_colors: Vec<String>,
}

impl Default for GameRecord {
    fn default() -> Self {
        Self {
            high_score: 0,
            coins: 0,
            unlocked_colors: default_unlocked(),
        }
    }
}

impl GameRecord {
    pub fn is_unlocked(&self, color: SnakeColor) -> bool {
        self.unlocked_colors.iter().any(|name| name == color.name())
    }

    /// Adds `color` to the unlocked set. Returns false if it was already there.
    pub fn unlock(&mut self, color: SnakeColor) -> bool {
        if self.is_unlocked(color) {
            return false;
        }
        self.unlocked_colors.push(color.name().to_string());
        true
    }

    /// Raises the high score if `score` beats it.
    pub fn offer_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    // Hand-edited files may drop the default color or repeat entries.
    fn normalize(&mut self) {
        let mut seen: Vec<String> = Vec::with_capacity(self.unlocked_colors.len() + 1);
        for name in self.unlocked_colors.drain(..) {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        self.unlocked_colors = seen;
        self.unlock(SnakeColor::default());
    }
}

#[derive(Debug, Clone)]
pub struct PersistentStore {
    path: PathBuf,
}

impl PersistentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the record, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load(&self) -> GameRecord {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no saved record, starting fresh");
                return GameRecord::default();
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "record unreadable, using defaults");
                return GameRecord::default();
            }
        };

        let mut record = match serde_json::from_str::<GameRecord>(&text) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "record corrupt, using defaults");
                GameRecord::default()
            }
        };
        record.normalize();
        tracing::info!(
            high_score = record.high_score,
            coins = record.coins,
            unlocked = record.unlocked_colors.len(),
            "record loaded"
        );
        record
    }

    /// Overwrites the whole record in one atomic step.
    pub fn save(&self, record: &GameRecord) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(record)?;
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let tmp = self.temp_path();
        fs::write(&tmp, text).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        tracing::trace!(path = %self.path.display(), "record saved");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
