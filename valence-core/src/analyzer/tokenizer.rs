//! Whitespace tokenizer with negation gluing.
//!
//! Turns a raw text fragment into the token sequence the scorer consumes.
//! The pipeline, in order:
//!
//! 1. Collapse CRLF line endings to a single space.
//! 2. Glue negation prefixes to the following word: for each configured
//!    prefix present in the text, the single space after every occurrence
//!    is removed, so `"isn't bad"` becomes the one token `"isn'tbad"` and
//!    keeps its negation context through scoring.
//! 3. Transliterate accents ([`TextNormalizer`]).
//! 4. Lowercase.
//! 5. Split on single ASCII spaces.
//!
//! ## Splitting contract
//!
//! The split is strict: consecutive spaces produce empty tokens, and empty
//! input produces one empty token. Callers filter by token length, so empty
//! tokens fall out naturally downstream; preserving them keeps positions
//! stable relative to the input.
//!
//! ## Gluing contract
//!
//! Prefix gluing is a raw substring replacement, not a word-boundary match:
//! a prefix occurring in the middle of an unrelated word also triggers it.
//! That behavior is part of the contract; callers control the prefix list.

use crate::analyzer::normalizer::TextNormalizer;
use memchr::{memchr_iter, memmem};

/// Streaming tokenizer over normalized, lowercased text.
///
/// Holds the normalizer it feeds text through; the negation prefix list is
/// an argument per call since it is dictionary data, not configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    normalizer: TextNormalizer,
}

impl Tokenizer {
    /// Creates a tokenizer around the given normalizer.
    pub const fn new(normalizer: TextNormalizer) -> Self {
        Self { normalizer }
    }

    /// The normalizer this tokenizer feeds text through.
    pub const fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Tokenizes `text` into owned tokens.
    #[must_use]
    pub fn tokenize(&self, text: &str, negation_prefixes: &[String]) -> Vec<String> {
        let mut out = Vec::new();
        self.tokenize_with(text, negation_prefixes, |token| {
            out.push(token.to_owned());
        });
        out
    }

    /// Tokenizes `text`, emitting each token as a borrowed slice of one
    /// prepared buffer. This is the scoring path: no per-token allocation.
    pub fn tokenize_with<F>(&self, text: &str, negation_prefixes: &[String], mut emit: F)
    where
        F: FnMut(&str),
    {
        let prepared = self.prepare(text, negation_prefixes);
        let bytes = prepared.as_bytes();

        let mut start = 0usize;
        for i in memchr_iter(b' ', bytes) {
            // Empty slices included: strict split semantics.
            emit(&prepared[start..i]);
            start = i + 1;
        }
        emit(&prepared[start..]);
    }

    /// Runs steps 1-4 of the pipeline, returning the buffer the token
    /// slices point into.
    fn prepare(&self, text: &str, negation_prefixes: &[String]) -> String {
        let mut text = if memmem::find(text.as_bytes(), b"\r\n").is_some() {
            text.replace("\r\n", " ")
        } else {
            text.to_owned()
        };

        for prefix in negation_prefixes {
            if prefix.is_empty() {
                continue;
            }
            if memmem::find(text.as_bytes(), prefix.as_bytes()).is_some() {
                let mut glued = String::with_capacity(prefix.len() + 1);
                glued.push_str(prefix);
                glued.push(' ');
                text = text.replace(&glued, prefix);
            }
        }

        self.normalizer.normalize(&text).to_lowercase()
    }
}
