//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Transliterates accented characters to ASCII
//! - **Tokenizer**: Glues negation prefixes, then splits into tokens

pub mod normalizer;
pub mod tokenizer;
pub(crate) mod translit;

pub use normalizer::{seems_utf8, NormalizerConfig, TextNormalizer};
pub use tokenizer::Tokenizer;
