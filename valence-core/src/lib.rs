//! Lexicon-driven Naive Bayes sentiment scoring engine.
//!
//! Classifies short text fragments into positive, negative or neutral
//! using word-frequency dictionaries. The pipeline:
//!
//! ```text
//! raw text → TextNormalizer → Tokenizer → Classifier → ranked Scores
//!                                              │
//!                                         Dictionary
//!                                    (built from a DictionaryStore)
//! ```
//!
//! - [`analyzer`]: accent transliteration (with locale overrides and an
//!   ISO-8859-1 fallback) and tokenization with negation-prefix gluing.
//! - [`dictionary`]: the immutable-after-build token → per-class count map,
//!   ignore list and negation prefixes.
//! - [`store`]: the word-list supply/persistence boundary and training.
//! - [`classifier`]: the scoring engine itself.
//!
//! # Example
//!
//! ```
//! use valence_core::{Classifier, Dictionary};
//! use valence_types::Class;
//!
//! let dictionary = Dictionary::builder()
//!     .words(Class::Positive, &["love", "great"])
//!     .words(Class::Negative, &["bad", "awful"])
//!     .ignore(&["the", "is"])
//!     .negation_prefixes(&["isn't"])
//!     .build();
//!
//! let classifier = Classifier::new(dictionary);
//! assert_eq!(classifier.categorize("what a great day").unwrap(), Class::Positive);
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod classifier;
pub mod dictionary;
pub mod store;

pub use analyzer::{seems_utf8, NormalizerConfig, TextNormalizer, Tokenizer};
pub use classifier::Classifier;
pub use dictionary::{Dictionary, DictionaryBuilder, DictionaryStats};
pub use store::{train, train_json, DictionaryStore, JsonStore, MemoryStore};
