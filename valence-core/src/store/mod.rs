//! Word-list supply and persistence boundary.
//!
//! The engine never touches an on-disk format directly: everything flows
//! through [`DictionaryStore`], which supplies and accepts flat ordered
//! lists of strings keyed by [`ListKind`]. Two implementations ship here:
//!
//! - [`MemoryStore`]: map-backed, for tests and embedding.
//! - [`JsonStore`]: one flat JSON array per list under a root directory.
//!
//! Training (appending words to a persisted class list) also lives at this
//! boundary, because it is pure list plumbing: read, extend, store back.
//! The JSON entry point validates shape first, so a malformed payload
//! never modifies the store.

mod json;

pub use json::JsonStore;

use rustc_hash::FxHashMap;
use valence_types::{Class, ListKind, ValenceError};

/// Supplies and persists word lists.
///
/// A missing or unreadable list must surface as
/// [`ValenceError::SourceUnavailable`]; implementations never substitute
/// an empty list for a source they could not read.
pub trait DictionaryStore {
    /// Returns the flat word list for `kind`, trimmed of surrounding
    /// whitespace.
    fn word_list(&self, kind: ListKind) -> Result<Vec<String>, ValenceError>;

    /// Replaces the stored word list for `kind`.
    fn store_word_list(&mut self, kind: ListKind, words: &[String]) -> Result<(), ValenceError>;
}

/// In-memory store backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    lists: FxHashMap<ListKind, Vec<String>>,
}

impl MemoryStore {
    /// Creates an empty store. Every list is initially unavailable.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a list, builder-style.
    #[must_use]
    pub fn with_list(mut self, kind: ListKind, words: &[&str]) -> Self {
        self.lists
            .insert(kind, words.iter().map(|w| w.to_string()).collect());
        self
    }
}

impl DictionaryStore for MemoryStore {
    fn word_list(&self, kind: ListKind) -> Result<Vec<String>, ValenceError> {
        self.lists
            .get(&kind)
            .map(|words| words.iter().map(|w| w.trim().to_owned()).collect())
            .ok_or(ValenceError::SourceUnavailable { list: kind })
    }

    fn store_word_list(&mut self, kind: ListKind, words: &[String]) -> Result<(), ValenceError> {
        self.lists.insert(kind, words.to_vec());
        Ok(())
    }
}

/// Appends `words` to the persisted list for `class`.
///
/// Append-only: existing entries are kept as-is, new words are trimmed and
/// blanks dropped.
///
/// # Errors
///
/// [`ValenceError::SourceUnavailable`] if the current list cannot be read
/// or the updated list cannot be written.
pub fn train<S, W>(store: &mut S, class: Class, words: &[W]) -> Result<(), ValenceError>
where
    S: DictionaryStore + ?Sized,
    W: AsRef<str>,
{
    let kind = ListKind::Class(class);
    let mut list = store.word_list(kind)?;
    let before = list.len();
    list.extend(
        words
            .iter()
            .map(|w| w.as_ref().trim().to_owned())
            .filter(|w| !w.is_empty()),
    );
    tracing::debug!(class = %class, appended = list.len() - before, "training words appended");
    store.store_word_list(kind, &list)
}

/// Appends a JSON training payload to the persisted list for `class`.
///
/// The payload must be a flat array of strings. Validation happens before
/// the store is touched, so a malformed payload leaves the persisted list
/// unmodified.
///
/// # Errors
///
/// [`ValenceError::InvalidTrainingInput`] if the payload is not a flat
/// array of strings; [`ValenceError::SourceUnavailable`] as for [`train`].
pub fn train_json<S>(
    store: &mut S,
    class: Class,
    payload: &serde_json::Value,
) -> Result<(), ValenceError>
where
    S: DictionaryStore + ?Sized,
{
    let words = parse_word_list(payload)?;
    train(store, class, &words)
}

/// Validates that a JSON value is a flat array of strings and extracts it.
///
/// # Errors
///
/// [`ValenceError::InvalidTrainingInput`] naming the first offense: not an
/// array, a nested array element, or a non-string element.
pub fn parse_word_list(value: &serde_json::Value) -> Result<Vec<String>, ValenceError> {
    let items = value
        .as_array()
        .ok_or(ValenceError::InvalidTrainingInput {
            reason: "payload must be an array of strings",
        })?;

    let mut words = Vec::with_capacity(items.len());
    for item in items {
        match item {
            serde_json::Value::String(word) => words.push(word.clone()),
            serde_json::Value::Array(_) => {
                return Err(ValenceError::InvalidTrainingInput {
                    reason: "nested arrays are not allowed; expected a flat array of strings",
                })
            }
            _ => {
                return Err(ValenceError::InvalidTrainingInput {
                    reason: "array elements must be strings",
                })
            }
        }
    }
    Ok(words)
}
