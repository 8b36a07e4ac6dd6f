//! Dictionary statistics.

use valence_types::{Class, CLASS_COUNT};

/// A snapshot of dictionary statistics.
///
/// The per-class and global counters accumulate across every load,
/// duplicates included, and across re-loads of the same list. They exist
/// for observability and for parity with stores that track corpus totals;
/// the scoring formula does not read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Number of distinct tokens across all classes.
    pub distinct_tokens: usize,
    /// Number of stop words in the ignore list.
    pub ignore_words: usize,
    /// Number of negation prefixes.
    pub negation_prefixes: usize,
    /// Words loaded per class, indexed by [`Class::index`].
    pub class_token_counts: [u64; CLASS_COUNT],
    /// Entries loaded per class, indexed by [`Class::index`].
    pub class_entry_counts: [u64; CLASS_COUNT],
    /// Total words loaded across all classes.
    pub token_count: u64,
    /// Total entries loaded across all classes.
    pub entry_count: u64,
}

impl core::fmt::Display for DictionaryStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} distinct tokens, {} loaded (",
            self.distinct_tokens, self.token_count
        )?;
        for (i, class) in Class::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", class, self.class_token_counts[class.index()])?;
        }
        write!(
            f,
            "), {} ignored, {} prefixes",
            self.ignore_words, self.negation_prefixes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    #[test]
    fn display_format() {
        let dict = Dictionary::builder()
            .words(Class::Positive, &["love", "great"])
            .words(Class::Negative, &["bad"])
            .ignore(&["the"])
            .negation_prefixes(&["isn't"])
            .build();

        assert_eq!(
            dict.stats().to_string(),
            "3 distinct tokens, 3 loaded (pos=2 neg=1 neu=0), 1 ignored, 1 prefixes"
        );
    }

    #[test]
    fn empty_stats() {
        let stats = Dictionary::builder().build().stats();
        assert_eq!(stats.distinct_tokens, 0);
        assert_eq!(stats.token_count, 0);
        assert_eq!(stats.class_token_counts, [0, 0, 0]);
    }
}
