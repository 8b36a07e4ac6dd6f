//! Scoring algorithm.

use crate::classifier::Classifier;
use valence_types::{Class, Scores, ValenceError, CLASS_COUNT};

impl Classifier {
    /// Scores a text fragment against the three classes.
    ///
    /// Per class, a running product starts at 1.0 and is multiplied by
    /// `count + 1` for every qualifying token (add-one smoothing applied
    /// multiplicatively; the per-class corpus totals the dictionary tracks
    /// are deliberately not used as a denominator). Class products are then
    /// weighted by the priors and normalized to probabilities rounded to
    /// 3 decimals.
    ///
    /// A token qualifies if its byte length is strictly between the
    /// configured bounds and it is not in the ignore list.
    ///
    /// Accumulation is in `f64`; realistic fragments stay far below the
    /// overflow threshold, and an overflow would saturate to infinity
    /// rather than wrap.
    ///
    /// # Errors
    ///
    /// [`ValenceError::DegenerateScore`] if the normalization denominator
    /// is zero (for example, all priors are zero), instead of producing
    /// NaN or infinity.
    pub fn score(&self, text: &str) -> Result<Scores, ValenceError> {
        let min = self.config.min_token_len;
        let max = self.config.max_token_len;

        let mut products = [1.0f64; CLASS_COUNT];
        self.tokenizer
            .tokenize_with(text, self.dictionary.negation_prefixes(), |token| {
                let len = token.len();
                if len <= min || len >= max {
                    return;
                }
                if self.dictionary.is_ignored(token) {
                    return;
                }
                for class in Class::ALL {
                    let count = self.dictionary.count(token, class);
                    products[class.index()] *= f64::from(count + 1);
                }
            });

        let mut weighted = [0.0f64; CLASS_COUNT];
        for class in Class::ALL {
            weighted[class.index()] =
                products[class.index()] * self.config.priors.get(class);
        }

        let total: f64 = weighted.iter().sum();
        if total == 0.0 {
            return Err(ValenceError::DegenerateScore);
        }

        let mut probabilities = [0.0f64; CLASS_COUNT];
        for (p, w) in probabilities.iter_mut().zip(weighted.iter()) {
            *p = round3(w / total);
        }
        Ok(Scores::new(probabilities))
    }

    /// Returns the top-ranked class for a text fragment.
    ///
    /// # Errors
    ///
    /// Same conditions as [`score`](Classifier::score).
    pub fn categorize(&self, text: &str) -> Result<Class, ValenceError> {
        Ok(self.score(text)?.top())
    }
}

/// Rounds to 3 decimal places.
#[inline(always)]
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use valence_types::{Priors, ScoreConfig};

    #[test]
    fn round3_behaves() {
        assert_eq!(round3(0.3334999), 0.333);
        assert_eq!(round3(0.3335001), 0.334);
        assert_eq!(round3(1.0), 1.0);
        assert_eq!(round3(0.0), 0.0);
    }

    #[test]
    fn products_multiply_per_token_occurrence() {
        // "bad bad" hits the negative entry twice: product 2 * 2 = 4.
        let dict = Dictionary::builder()
            .words(Class::Negative, &["bad"])
            .build();
        let classifier = Classifier::new(dict);
        let scores = classifier.score("bad bad").unwrap();

        // weighted: pos 0.333, neg 4 * 0.333 = 1.332, neu 0.334
        // neg = 1.332 / 1.999 = 0.666...
        assert_eq!(scores.get(Class::Negative), 0.666);
        assert_eq!(scores.top(), Class::Negative);
    }

    #[test]
    fn custom_priors_shift_the_outcome() {
        let dict = Dictionary::builder().build();
        let config = ScoreConfig {
            priors: Priors::new(0.8, 0.1, 0.1),
            ..ScoreConfig::default()
        };
        let classifier = Classifier::with_config(dict, config);
        let scores = classifier.score("whatever text").unwrap();

        assert_eq!(scores.top(), Class::Positive);
        assert_eq!(scores.get(Class::Positive), 0.8);
        assert_eq!(scores.get(Class::Negative), 0.1);
    }

    #[test]
    fn empty_text_scores_as_priors() {
        let dict = Dictionary::builder()
            .words(Class::Positive, &["love"])
            .build();
        let classifier = Classifier::new(dict);
        let scores = classifier.score("").unwrap();
        assert_eq!(scores.get(Class::Positive), 0.333);
        assert_eq!(scores.get(Class::Neutral), 0.334);
    }

    #[test]
    fn categorize_matches_score_top() {
        let dict = Dictionary::builder()
            .words(Class::Positive, &["love"])
            .build();
        let classifier = Classifier::new(dict);
        let top = classifier.score("love love love").unwrap().top();
        assert_eq!(classifier.categorize("love love love").unwrap(), top);
    }
}
