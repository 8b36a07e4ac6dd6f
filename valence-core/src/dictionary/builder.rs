//! Dictionary building logic.

use crate::dictionary::Dictionary;
use crate::store::DictionaryStore;
use valence_types::{Class, ListKind, ValenceError};

/// Accumulates word lists into a [`Dictionary`].
///
/// All loading is additive; nothing is ever removed or decremented. The
/// builder is also the re-load path: [`Dictionary::into_builder`] reopens a
/// built dictionary with its entries and counters intact, so building again
/// yields a merged value rather than mutating one shared in place.
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    inner: Dictionary,
}

impl DictionaryBuilder {
    /// Starts from an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_dictionary(inner: Dictionary) -> Self {
        Self { inner }
    }

    /// Loads every list a store supplies: the three class lists, the
    /// ignore list and the negation prefixes.
    ///
    /// # Errors
    ///
    /// Returns [`ValenceError::SourceUnavailable`] if the store cannot
    /// supply one of the lists. Nothing is loaded partially in that case
    /// relative to the failing list; lists already read remain loaded.
    pub fn from_store<S: DictionaryStore + ?Sized>(store: &S) -> Result<Self, ValenceError> {
        let mut builder = Self::new();
        for class in Class::ALL {
            let list = store.word_list(ListKind::Class(class))?;
            builder = builder.words(class, &list);
        }
        let ignore = store.word_list(ListKind::Ignore)?;
        let prefixes = store.word_list(ListKind::Prefixes)?;
        Ok(builder.ignore(&ignore).negation_prefixes(&prefixes))
    }

    /// Loads a word list for one class.
    ///
    /// Each word is trimmed; a `(word, class)` pair already present keeps
    /// its count of 1. The aggregate counters increment for every word
    /// regardless (duplicates and blanks included), which means repeated
    /// loads of the same list inflate them. That drift is part of the
    /// contract; the counters feed statistics, never scoring.
    #[must_use]
    pub fn words<S: AsRef<str>>(mut self, class: Class, words: &[S]) -> Self {
        let mut inserted = 0usize;
        for word in words {
            let word = word.as_ref().trim();

            if !word.is_empty() {
                let counts = self.inner.entries.entry(word.to_owned()).or_default();
                if counts[class.index()] == 0 {
                    counts[class.index()] = 1;
                    inserted += 1;
                }
            }

            self.inner.class_token_counts[class.index()] += 1;
            self.inner.token_count += 1;
            self.inner.class_entry_counts[class.index()] += 1;
            self.inner.entry_count += 1;
        }

        tracing::debug!(
            class = %class,
            loaded = words.len(),
            inserted,
            "loaded class word list"
        );
        self
    }

    /// Adds stop words to the ignore list.
    #[must_use]
    pub fn ignore<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.inner.ignore.insert(word.to_owned());
            }
        }
        self
    }

    /// Appends negation prefixes, preserving order.
    #[must_use]
    pub fn negation_prefixes<S: AsRef<str>>(mut self, prefixes: &[S]) -> Self {
        for prefix in prefixes {
            let prefix = prefix.as_ref().trim();
            if !prefix.is_empty() {
                self.inner.negation_prefixes.push(prefix.to_owned());
            }
        }
        self
    }

    /// Finalizes the dictionary.
    #[must_use]
    pub fn build(self) -> Dictionary {
        tracing::debug!(
            distinct_tokens = self.inner.entries.len(),
            total_loaded = self.inner.token_count,
            "dictionary built"
        );
        self.inner
    }
}
