//! Naive-Bayes-style sentiment classification.
//!
//! A [`Classifier`] owns an immutable [`Dictionary`] and a [`Tokenizer`]
//! and scores text fragments against the three sentiment classes. Scoring
//! is O(tokens × classes), allocates one prepared buffer per call, and
//! never blocks.
//!
//! Threading:
//! - [`score`](Classifier::score) and [`categorize`](Classifier::categorize)
//!   take `&self` and are safe to call concurrently on a shared instance;
//!   there is no interior mutability.
//! - [`load_class`](Classifier::load_class) takes `&mut self` and rebuilds
//!   the dictionary as a new merged value. Exclusive access is the
//!   serialization required between re-loads and concurrent scoring.

mod score;

use crate::analyzer::Tokenizer;
use crate::dictionary::{Dictionary, DictionaryBuilder};
use crate::store::DictionaryStore;
use valence_types::{Class, ListKind, ScoreConfig, ValenceError};

/// Scores text fragments into positive/negative/neutral probabilities.
pub struct Classifier {
    pub(crate) dictionary: Dictionary,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) config: ScoreConfig,
}

impl Classifier {
    /// Creates a classifier with the default configuration and a
    /// locale-free tokenizer.
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_config(dictionary, ScoreConfig::default())
    }

    /// Creates a classifier with a custom scoring configuration.
    #[must_use]
    pub fn with_config(dictionary: Dictionary, config: ScoreConfig) -> Self {
        Self {
            dictionary,
            tokenizer: Tokenizer::default(),
            config,
        }
    }

    /// Replaces the tokenizer, e.g. to normalize with a specific locale.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Builds a classifier by loading every word list from a store.
    ///
    /// # Errors
    ///
    /// [`ValenceError::SourceUnavailable`] if the store cannot supply one
    /// of the five lists.
    pub fn from_store<S: DictionaryStore + ?Sized>(store: &S) -> Result<Self, ValenceError> {
        Ok(Self::new(DictionaryBuilder::from_store(store)?.build()))
    }

    /// Appends a word list to one class, rebuilding the dictionary.
    ///
    /// Additive, like every load: existing entries keep their counts and
    /// the aggregate counters continue to grow (repeat loads drift them;
    /// see [`DictionaryBuilder::words`]).
    pub fn load_class<W: AsRef<str>>(&mut self, class: Class, words: &[W]) {
        let dictionary = std::mem::take(&mut self.dictionary);
        self.dictionary = dictionary.into_builder().words(class, words).build();
    }

    /// Appends one class's word list from a store, rebuilding the
    /// dictionary.
    ///
    /// # Errors
    ///
    /// [`ValenceError::SourceUnavailable`] if the store cannot supply the
    /// list; the dictionary is unchanged in that case.
    pub fn load_class_from_store<S: DictionaryStore + ?Sized>(
        &mut self,
        store: &S,
        class: Class,
    ) -> Result<(), ValenceError> {
        let words = store.word_list(ListKind::Class(class))?;
        self.load_class(class, &words);
        Ok(())
    }

    /// Transliterates accented characters to ASCII using this classifier's
    /// normalizer. Exposed standalone for reuse.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        self.tokenizer.normalizer().normalize(text)
    }

    /// The dictionary backing this classifier.
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The scoring configuration.
    #[must_use]
    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }
}
