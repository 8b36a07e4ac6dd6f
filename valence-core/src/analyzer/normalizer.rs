//! Accent transliteration to ASCII.
//!
//! The normalizer maps accented and extended characters to their closest
//! ASCII (or short digraph) equivalents so that downstream tokenization and
//! dictionary lookups operate on plain ASCII words. It never rejects input:
//! characters without a mapping pass through verbatim.

use crate::analyzer::translit::{
    locale_overrides, locale_sequences, lookup, lookup_byte, BASE, LATIN1_DIGRAPHS, LATIN1_SINGLE,
};
use valence_types::Locale;

/// Configuration options for text normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizerConfig {
    /// Locale whose substitution overrides are layered on top of the base
    /// transliteration table. [`Locale::None`] applies the base table only.
    pub locale: Locale,
}

/// Accent-folding text normalizer.
///
/// Two entry points:
///
/// - [`normalize`](TextNormalizer::normalize) for `&str` input, which is
///   known-valid UTF-8 and goes straight to the table pass.
/// - [`normalize_bytes`](TextNormalizer::normalize_bytes) for input of
///   unknown encoding. A byte-sequence-length classifier decides whether
///   the bytes look like UTF-8; if not, they are decoded as ISO-8859-1 and
///   folded through a fixed single-byte table.
///
/// Both are pure: no locale is read from the process environment, only from
/// [`NormalizerConfig`].
///
/// # Examples
///
/// ```
/// use valence_core::analyzer::normalizer::{NormalizerConfig, TextNormalizer};
/// use valence_types::Locale;
///
/// let base = TextNormalizer::default();
/// assert_eq!(base.normalize("café"), "cafe");
///
/// let german = TextNormalizer::new(NormalizerConfig { locale: Locale::German });
/// assert_eq!(german.normalize("Müller"), "Mueller");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer for a locale identifier such as `"de_DE"`.
    pub fn for_locale_tag(tag: &str) -> Self {
        Self::new(NormalizerConfig {
            locale: Locale::from_tag(tag),
        })
    }

    /// Transliterates accented characters to ASCII.
    ///
    /// Pure ASCII input is returned unchanged. Characters with no mapping
    /// (Greek, CJK, emoji, ...) pass through verbatim.
    #[must_use]
    pub fn normalize(&self, input: &str) -> String {
        if input.is_ascii() {
            return input.to_owned();
        }
        self.fold_str(input)
    }

    /// Transliterates bytes of unknown encoding to ASCII.
    ///
    /// Well-formed UTF-8 (per [`seems_utf8`]) takes the code-point table
    /// path; everything else is decoded as ISO-8859-1 and folded through
    /// the single-byte table. Unmapped high bytes pass through as their
    /// Latin-1 code point.
    #[must_use]
    pub fn normalize_bytes(&self, input: &[u8]) -> String {
        if input.is_ascii() {
            // All bytes < 0x80: valid UTF-8 by construction.
            return String::from_utf8_lossy(input).into_owned();
        }

        if seems_utf8(input) {
            return match core::str::from_utf8(input) {
                Ok(s) => self.fold_str(s),
                // The classifier accepts the historical 5- and 6-byte
                // sequence forms that Rust's strict decoder rejects. Decode
                // lossily; replacement chars have no mapping and pass
                // through.
                Err(_) => self.fold_str(&String::from_utf8_lossy(input)),
            };
        }

        self.fold_latin1(input)
    }

    /// Table pass over valid UTF-8: locale sequences, then per-char locale
    /// overrides, then the base table.
    fn fold_str(&self, input: &str) -> String {
        let sequences = locale_sequences(self.config.locale);
        let mut text = std::borrow::Cow::Borrowed(input);
        for &(from, to) in sequences {
            if text.contains(from) {
                text = std::borrow::Cow::Owned(text.replace(from, to));
            }
        }

        let overrides = locale_overrides(self.config.locale);
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_ascii() {
                out.push(c);
                continue;
            }
            if let Some(replacement) = lookup(overrides, c).or_else(|| lookup(BASE, c)) {
                out.push_str(replacement);
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Single-byte pass for non-UTF-8 input treated as ISO-8859-1.
    fn fold_latin1(&self, input: &[u8]) -> String {
        let mut out = String::with_capacity(input.len());
        for &b in input {
            if b < 0x80 {
                out.push(b as char);
            } else if let Some(digraph) = lookup_byte(LATIN1_DIGRAPHS, b) {
                out.push_str(digraph);
            } else if let Some(ascii) = lookup_byte(LATIN1_SINGLE, b) {
                out.push(ascii as char);
            } else {
                // `char::from` decodes the byte as its Latin-1 code point.
                out.push(char::from(b));
            }
        }
        out
    }
}

/// Byte-sequence-length UTF-8 classifier.
///
/// A leading byte's high bits determine how many continuation bytes must
/// follow (0 through 5); each continuation byte must match `10xxxxxx`. Any
/// mismatch or premature end of input means "not UTF-8".
///
/// Deliberately permissive: the historical 5-byte (`111110xx`) and 6-byte
/// (`1111110x`) lead forms are accepted, matching the classic classifier
/// this is modeled on rather than the modern UTF-8 definition.
#[must_use]
pub fn seems_utf8(bytes: &[u8]) -> bool {
    let mut i = 0usize;
    while i < bytes.len() {
        let lead = bytes[i];
        let continuation = if lead < 0x80 {
            0
        } else if lead & 0b1110_0000 == 0b1100_0000 {
            1
        } else if lead & 0b1111_0000 == 0b1110_0000 {
            2
        } else if lead & 0b1111_1000 == 0b1111_0000 {
            3
        } else if lead & 0b1111_1100 == 0b1111_1000 {
            4
        } else if lead & 0b1111_1110 == 0b1111_1100 {
            5
        } else {
            // Stray continuation byte (10xxxxxx) or 0xFE/0xFF.
            return false;
        };

        if i + continuation >= bytes.len() {
            return false;
        }
        for j in 1..=continuation {
            if bytes[i + j] & 0b1100_0000 != 0b1000_0000 {
                return false;
            }
        }
        i += continuation + 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        TextNormalizer::default().normalize(input)
    }

    fn norm_locale(input: &str, tag: &str) -> String {
        TextNormalizer::for_locale_tag(tag).normalize(input)
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(norm("hello world"), "hello world");
        assert_eq!(norm("Foo-BAR_baz 123!"), "Foo-BAR_baz 123!");
    }

    #[test]
    fn empty_input() {
        assert_eq!(norm(""), "");
        assert_eq!(TextNormalizer::default().normalize_bytes(b""), "");
    }

    #[test]
    fn latin1_supplement_folds() {
        assert_eq!(norm("café"), "cafe");
        assert_eq!(norm("naïve"), "naive");
        assert_eq!(norm("São Paulo"), "Sao Paulo");
        assert_eq!(norm("Ångström"), "Angstrom");
    }

    #[test]
    fn base_table_keeps_sharp_s_as_digraph() {
        assert_eq!(norm("straße"), "strasse");
    }

    #[test]
    fn latin_extended_folds() {
        assert_eq!(norm("Łódź"), "Lodz");
        assert_eq!(norm("Žlutý"), "Zluty");
        assert_eq!(norm("Œuvre"), "OEuvre");
    }

    #[test]
    fn vietnamese_folds() {
        assert_eq!(norm("Việt Nam"), "Viet Nam");
        assert_eq!(norm("phở"), "pho");
    }

    #[test]
    fn pinyin_folds() {
        assert_eq!(norm("nǚhái"), "nuhai");
        assert_eq!(norm("lǜsè"), "luse");
    }

    #[test]
    fn currency_signs() {
        assert_eq!(norm("€100"), "E100");
        assert_eq!(norm("£5"), "5");
    }

    #[test]
    fn unmapped_chars_pass_through() {
        assert_eq!(norm("Πρόβλημα"), "Πρόβλημα");
        assert_eq!(norm("你好"), "你好");
        assert_eq!(norm("🌍 café"), "🌍 cafe");
    }

    #[test]
    fn idempotent_on_ascii() {
        let samples = ["hello", "straße", "café au lait", "Łódź"];
        let n = TextNormalizer::default();
        for s in samples {
            let once = n.normalize(s);
            assert_eq!(n.normalize(&once), once);
        }
    }

    #[test]
    fn german_overrides() {
        assert_eq!(norm_locale("Müller", "de_DE"), "Mueller");
        assert_eq!(norm_locale("schön", "de_DE"), "schoen");
        assert_eq!(norm_locale("Ärger", "de_DE"), "Aerger");
        assert_eq!(norm_locale("straße", "de_DE"), "strasse");
        // Without the locale, umlauts fold to the bare vowel.
        assert_eq!(norm("Müller"), "Muller");
    }

    #[test]
    fn danish_overrides() {
        assert_eq!(norm_locale("smørrebrød", "da_DK"), "smoerrebroed");
        assert_eq!(norm_locale("Århus", "da_DK"), "Aarhus");
        assert_eq!(norm_locale("æble", "da_DK"), "aeble");
        assert_eq!(norm("Århus"), "Arhus");
    }

    #[test]
    fn catalan_sequence_override() {
        assert_eq!(norm_locale("col·legi", "ca"), "collegi");
        assert_eq!(norm_locale("PARAL·LEL", "ca"), "PARALLEL");
        // Base table leaves the middle dot alone.
        assert_eq!(norm("col·legi"), "col·legi");
    }

    #[test]
    fn serbian_overrides() {
        assert_eq!(norm_locale("Đorđe", "sr_RS"), "DJordje");
        assert_eq!(norm_locale("đak", "bs_BA"), "djak");
        // Base table folds the stroke to a plain d.
        assert_eq!(norm("đak"), "dak");
    }

    #[test]
    fn unknown_locale_uses_base_table() {
        assert_eq!(norm_locale("Müller", "en_US"), "Muller");
    }

    #[test]
    fn seems_utf8_accepts_ascii_and_valid_sequences() {
        assert!(seems_utf8(b""));
        assert!(seems_utf8(b"plain ascii"));
        assert!(seems_utf8("café".as_bytes()));
        assert!(seems_utf8("日本語".as_bytes()));
        assert!(seems_utf8("🌍".as_bytes()));
    }

    #[test]
    fn seems_utf8_rejects_latin1_bytes() {
        // 'é' in ISO-8859-1 is a bare 0xE9: a lead byte demanding
        // continuations that never come.
        assert!(!seems_utf8(b"caf\xE9"));
        assert!(!seems_utf8(b"\xC0plain"));
    }

    #[test]
    fn seems_utf8_rejects_stray_continuation() {
        assert!(!seems_utf8(b"\x80"));
        assert!(!seems_utf8(b"ab\xBFcd"));
    }

    #[test]
    fn seems_utf8_rejects_truncated_sequence() {
        let full = "é".as_bytes();
        assert!(seems_utf8(full));
        assert!(!seems_utf8(&full[..1]));
    }

    #[test]
    fn seems_utf8_rejects_fe_ff() {
        assert!(!seems_utf8(b"\xFE"));
        assert!(!seems_utf8(b"\xFF"));
    }

    #[test]
    fn seems_utf8_accepts_historical_long_forms() {
        // 5- and 6-byte lead forms: invalid per modern UTF-8, accepted by
        // this classifier.
        assert!(seems_utf8(b"\xF8\x80\x80\x80\x80"));
        assert!(seems_utf8(b"\xFC\x80\x80\x80\x80\x80"));
    }

    #[test]
    fn normalize_bytes_utf8_path() {
        let n = TextNormalizer::default();
        assert_eq!(n.normalize_bytes("café".as_bytes()), "cafe");
    }

    #[test]
    fn normalize_bytes_latin1_path() {
        let n = TextNormalizer::default();
        // ISO-8859-1 "café"
        assert_eq!(n.normalize_bytes(b"caf\xE9"), "cafe");
        // ISO-8859-1 "straße" hits the digraph table
        assert_eq!(n.normalize_bytes(b"stra\xDFe"), "strasse");
        // Ð folds to DJ only on the single-byte path
        assert_eq!(n.normalize_bytes(b"\xD0avo"), "DJavo");
    }

    #[test]
    fn normalize_bytes_latin1_unmapped_passthrough() {
        let n = TextNormalizer::default();
        // 0xA9 (copyright sign) has no entry; decoded as its Latin-1
        // code point.
        assert_eq!(n.normalize_bytes(b"\xA9 2024"), "\u{A9} 2024");
    }

    #[test]
    fn normalize_bytes_cp1252_extras() {
        let n = TextNormalizer::default();
        assert_eq!(n.normalize_bytes(b"\x8Aibenik"), "Sibenik");
        assert_eq!(n.normalize_bytes(b"\x9Cuf"), "oeuf");
    }
}
