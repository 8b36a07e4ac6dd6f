//! File-backed store: one flat JSON array per list.

use crate::store::{parse_word_list, DictionaryStore};
use std::path::{Path, PathBuf};
use valence_types::{ListKind, ValenceError};

/// Directory-backed store.
///
/// Each list lives in `<root>/<kind>.json` (`pos.json`, `neg.json`,
/// `neu.json`, `ign.json`, `prefix.json`) as a flat JSON array of strings.
/// Single-process use is assumed; writes are plain file replacement.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Creates a store rooted at `root`. The directory is not created or
    /// checked here; a missing directory surfaces on first access.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file backing `kind`.
    #[must_use]
    pub fn path_for(&self, kind: ListKind) -> PathBuf {
        self.root.join(format!("{}.json", kind))
    }

    /// Root directory of the store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DictionaryStore for JsonStore {
    fn word_list(&self, kind: ListKind) -> Result<Vec<String>, ValenceError> {
        let path = self.path_for(kind);
        let raw = std::fs::read_to_string(&path).map_err(|error| {
            tracing::debug!(list = %kind, path = %path.display(), %error, "word list unreadable");
            ValenceError::SourceUnavailable { list: kind }
        })?;

        // A stored file that is not a flat array of strings is as
        // unusable as a missing one.
        let value: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|_| ValenceError::SourceUnavailable { list: kind })?;
        let words = parse_word_list(&value)
            .map_err(|_| ValenceError::SourceUnavailable { list: kind })?;

        tracing::debug!(list = %kind, words = words.len(), "word list loaded");
        Ok(words.iter().map(|w| w.trim().to_owned()).collect())
    }

    fn store_word_list(&mut self, kind: ListKind, words: &[String]) -> Result<(), ValenceError> {
        let path = self.path_for(kind);
        let payload = serde_json::to_string_pretty(words)
            .map_err(|_| ValenceError::SourceUnavailable { list: kind })?;
        std::fs::write(&path, payload).map_err(|error| {
            tracing::debug!(list = %kind, path = %path.display(), %error, "word list write failed");
            ValenceError::SourceUnavailable { list: kind }
        })?;

        tracing::debug!(list = %kind, words = words.len(), "word list stored");
        Ok(())
    }
}
