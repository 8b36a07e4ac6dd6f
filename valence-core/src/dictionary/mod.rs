//! In-memory sentiment dictionary.
//!
//! Maps tokens to per-class presence counts, and carries the two auxiliary
//! word lists scoring needs: the ignore list (stop words) and the negation
//! prefix list.
//!
//! Lifecycle:
//! - Built once through [`DictionaryBuilder`], read-only afterwards.
//! - Re-loading merges additively: [`Dictionary::into_builder`] reopens the
//!   value, and building again yields a new merged dictionary. Aggregate
//!   counters are carried over and keep growing across re-loads; see the
//!   counter notes on [`DictionaryBuilder::words`].
//!
//! Threading: a built [`Dictionary`] is immutable and freely shareable;
//! all lookup methods take `&self`.

mod builder;
mod stats;

pub use builder::DictionaryBuilder;
pub use stats::DictionaryStats;

use rustc_hash::{FxHashMap, FxHashSet};
use valence_types::{Class, CLASS_COUNT};

/// Token → per-class presence counts, plus ignore and negation-prefix
/// lists. Immutable after build.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    pub(crate) entries: FxHashMap<String, [u32; CLASS_COUNT]>,
    pub(crate) ignore: FxHashSet<String>,
    pub(crate) negation_prefixes: Vec<String>,
    // Aggregate counters. Incremented on every loaded word, duplicates
    // included, and never consumed by scoring; surfaced via stats() only.
    pub(crate) class_token_counts: [u64; CLASS_COUNT],
    pub(crate) class_entry_counts: [u64; CLASS_COUNT],
    pub(crate) token_count: u64,
    pub(crate) entry_count: u64,
}

impl Dictionary {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::new()
    }

    /// Reopens this dictionary for additive merging. The returned builder
    /// starts from the current entries and counters.
    #[must_use]
    pub fn into_builder(self) -> DictionaryBuilder {
        DictionaryBuilder::from_dictionary(self)
    }

    /// Presence count of `token` for `class`; 0 if absent.
    #[inline]
    #[must_use]
    pub fn count(&self, token: &str, class: Class) -> u32 {
        self.entries
            .get(token)
            .map_or(0, |counts| counts[class.index()])
    }

    /// Whether `token` is a stop word excluded from scoring.
    #[inline]
    #[must_use]
    pub fn is_ignored(&self, token: &str) -> bool {
        self.ignore.contains(token)
    }

    /// Negation prefixes, in load order.
    #[inline]
    #[must_use]
    pub fn negation_prefixes(&self) -> &[String] {
        &self.negation_prefixes
    }

    /// Number of distinct tokens across all classes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no class words are loaded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct tokens carrying a count for `class`.
    #[must_use]
    pub fn distinct_tokens(&self, class: Class) -> usize {
        self.entries
            .values()
            .filter(|counts| counts[class.index()] > 0)
            .count()
    }

    /// Snapshot of dictionary statistics.
    #[must_use]
    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            distinct_tokens: self.entries.len(),
            ignore_words: self.ignore.len(),
            negation_prefixes: self.negation_prefixes.len(),
            class_token_counts: self.class_token_counts,
            class_entry_counts: self.class_entry_counts,
            token_count: self.token_count,
            entry_count: self.entry_count,
        }
    }
}
