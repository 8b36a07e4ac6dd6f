//! Static transliteration data.
//!
//! Pure data, no logic beyond a binary-search lookup. Three layers:
//!
//! - [`BASE`]: code point → ASCII replacement, covering Latin-1 Supplement,
//!   Latin Extended-A/B (including Pinyin tone vowels), Vietnamese
//!   precomposed vowels, and the Euro/Pound signs.
//! - Locale override tables, consulted before [`BASE`] so that e.g. German
//!   text folds ä to "ae" instead of "a". Multi-character input sequences
//!   (Catalan l·l) live in separate sequence tables applied as a
//!   longest-match-first substitution pass before per-char folding.
//! - [`LATIN1_SINGLE`] and [`LATIN1_DIGRAPHS`]: the single-byte fallback
//!   used when input is not well-formed UTF-8 and is decoded as ISO-8859-1.
//!
//! Tables are sorted by key so lookups can binary-search; a test pins the
//! ordering invariant.

use valence_types::Locale;

/// Base code point → ASCII replacements, sorted by code point.
#[rustfmt::skip]
pub(crate) static BASE: &[(char, &str)] = &[
    // Latin-1 Supplement signs.
    ('£', ""), ('ª', "a"), ('º', "o"),
    // Latin-1 Supplement, uppercase.
    ('À', "A"), ('Á', "A"), ('Â', "A"), ('Ã', "A"), ('Ä', "A"), ('Å', "A"),
    ('Æ', "AE"), ('Ç', "C"),
    ('È', "E"), ('É', "E"), ('Ê', "E"), ('Ë', "E"),
    ('Ì', "I"), ('Í', "I"), ('Î', "I"), ('Ï', "I"),
    ('Ð', "D"), ('Ñ', "N"),
    ('Ò', "O"), ('Ó', "O"), ('Ô', "O"), ('Õ', "O"), ('Ö', "O"), ('Ø', "O"),
    ('Ù', "U"), ('Ú', "U"), ('Û', "U"), ('Ü', "U"),
    ('Ý', "Y"), ('Þ', "TH"), ('ß', "ss"),
    // Latin-1 Supplement, lowercase.
    ('à', "a"), ('á', "a"), ('â', "a"), ('ã', "a"), ('ä', "a"), ('å', "a"),
    ('æ', "ae"), ('ç', "c"),
    ('è', "e"), ('é', "e"), ('ê', "e"), ('ë', "e"),
    ('ì', "i"), ('í', "i"), ('î', "i"), ('ï', "i"),
    ('ð', "d"), ('ñ', "n"),
    ('ò', "o"), ('ó', "o"), ('ô', "o"), ('õ', "o"), ('ö', "o"), ('ø', "o"),
    ('ù', "u"), ('ú', "u"), ('û', "u"), ('ü', "u"),
    ('ý', "y"), ('þ', "th"), ('ÿ', "y"),
    // Latin Extended-A.
    ('Ā', "A"), ('ā', "a"), ('Ă', "A"), ('ă', "a"), ('Ą', "A"), ('ą', "a"),
    ('Ć', "C"), ('ć', "c"), ('Ĉ', "C"), ('ĉ', "c"), ('Ċ', "C"), ('ċ', "c"),
    ('Č', "C"), ('č', "c"), ('Ď', "D"), ('ď', "d"), ('Đ', "D"), ('đ', "d"),
    ('Ē', "E"), ('ē', "e"), ('Ĕ', "E"), ('ĕ', "e"), ('Ė', "E"), ('ė', "e"),
    ('Ę', "E"), ('ę', "e"), ('Ě', "E"), ('ě', "e"),
    ('Ĝ', "G"), ('ĝ', "g"), ('Ğ', "G"), ('ğ', "g"), ('Ġ', "G"), ('ġ', "g"),
    ('Ģ', "G"), ('ģ', "g"),
    ('Ĥ', "H"), ('ĥ', "h"), ('Ħ', "H"), ('ħ', "h"),
    ('Ĩ', "I"), ('ĩ', "i"), ('Ī', "I"), ('ī', "i"), ('Ĭ', "I"), ('ĭ', "i"),
    ('Į', "I"), ('į', "i"), ('İ', "I"), ('ı', "i"),
    ('Ĳ', "IJ"), ('ĳ', "ij"), ('Ĵ', "J"), ('ĵ', "j"),
    ('Ķ', "K"), ('ķ', "k"), ('ĸ', "k"),
    ('Ĺ', "L"), ('ĺ', "l"), ('Ļ', "L"), ('ļ', "l"), ('Ľ', "L"), ('ľ', "l"),
    ('Ŀ', "L"), ('ŀ', "l"), ('Ł', "L"), ('ł', "l"),
    ('Ń', "N"), ('ń', "n"), ('Ņ', "N"), ('ņ', "n"), ('Ň', "N"), ('ň', "n"),
    ('ŉ', "n"), ('Ŋ', "N"), ('ŋ', "n"),
    ('Ō', "O"), ('ō', "o"), ('Ŏ', "O"), ('ŏ', "o"), ('Ő', "O"), ('ő', "o"),
    ('Œ', "OE"), ('œ', "oe"),
    ('Ŕ', "R"), ('ŕ', "r"), ('Ŗ', "R"), ('ŗ', "r"), ('Ř', "R"), ('ř', "r"),
    ('Ś', "S"), ('ś', "s"), ('Ŝ', "S"), ('ŝ', "s"), ('Ş', "S"), ('ş', "s"),
    ('Š', "S"), ('š', "s"),
    ('Ţ', "T"), ('ţ', "t"), ('Ť', "T"), ('ť', "t"), ('Ŧ', "T"), ('ŧ', "t"),
    ('Ũ', "U"), ('ũ', "u"), ('Ū', "U"), ('ū', "u"), ('Ŭ', "U"), ('ŭ', "u"),
    ('Ů', "U"), ('ů', "u"), ('Ű', "U"), ('ű', "u"), ('Ų', "U"), ('ų', "u"),
    ('Ŵ', "W"), ('ŵ', "w"), ('Ŷ', "Y"), ('ŷ', "y"), ('Ÿ', "Y"),
    ('Ź', "Z"), ('ź', "z"), ('Ż', "Z"), ('ż', "z"), ('Ž', "Z"), ('ž', "z"),
    ('ſ', "s"),
    // Latin Extended-B.
    ('ƒ', "f"),
    ('Ơ', "O"), ('ơ', "o"), ('Ư', "U"), ('ư', "u"),
    // Pinyin tone vowels.
    ('Ǎ', "A"), ('ǎ', "a"), ('Ǐ', "I"), ('ǐ', "i"), ('Ǒ', "O"), ('ǒ', "o"),
    ('Ǔ', "U"), ('ǔ', "u"), ('Ǖ', "U"), ('ǖ', "u"), ('Ǘ', "U"), ('ǘ', "u"),
    ('Ǚ', "U"), ('ǚ', "u"), ('Ǜ', "U"), ('ǜ', "u"),
    ('Ǹ', "N"), ('ǹ', "n"),
    ('Ș', "S"), ('ș', "s"), ('Ț', "T"), ('ț', "t"),
    // Vietnamese precomposed vowels.
    ('Ạ', "A"), ('ạ', "a"), ('Ả', "A"), ('ả', "a"), ('Ấ', "A"), ('ấ', "a"),
    ('Ầ', "A"), ('ầ', "a"), ('Ẩ', "A"), ('ẩ', "a"), ('Ẫ', "A"), ('ẫ', "a"),
    ('Ậ', "A"), ('ậ', "a"), ('Ắ', "A"), ('ắ', "a"), ('Ằ', "A"), ('ằ', "a"),
    ('Ẳ', "A"), ('ẳ', "a"), ('Ẵ', "A"), ('ẵ', "a"), ('Ặ', "A"), ('ặ', "a"),
    ('Ẹ', "E"), ('ẹ', "e"), ('Ẻ', "E"), ('ẻ', "e"), ('Ẽ', "E"), ('ẽ', "e"),
    ('Ế', "E"), ('ế', "e"), ('Ề', "E"), ('ề', "e"), ('Ể', "E"), ('ể', "e"),
    ('Ễ', "E"), ('ễ', "e"), ('Ệ', "E"), ('ệ', "e"),
    ('Ỉ', "I"), ('ỉ', "i"), ('Ị', "I"), ('ị', "i"),
    ('Ọ', "O"), ('ọ', "o"), ('Ỏ', "O"), ('ỏ', "o"), ('Ố', "O"), ('ố', "o"),
    ('Ồ', "O"), ('ồ', "o"), ('Ổ', "O"), ('ổ', "o"), ('Ỗ', "O"), ('ỗ', "o"),
    ('Ộ', "O"), ('ộ', "o"), ('Ớ', "O"), ('ớ', "o"), ('Ờ', "O"), ('ờ', "o"),
    ('Ở', "O"), ('ở', "o"), ('Ỡ', "O"), ('ỡ', "o"), ('Ợ', "O"), ('ợ', "o"),
    ('Ụ', "U"), ('ụ', "u"), ('Ủ', "U"), ('ủ', "u"), ('Ứ', "U"), ('ứ', "u"),
    ('Ừ', "U"), ('ừ', "u"), ('Ử', "U"), ('ử', "u"), ('Ữ', "U"), ('ữ', "u"),
    ('Ự', "U"), ('ự', "u"),
    ('Ỳ', "Y"), ('ỳ', "y"), ('Ỵ', "Y"), ('ỵ', "y"), ('Ỷ', "Y"), ('ỷ', "y"),
    ('Ỹ', "Y"), ('ỹ', "y"),
    // Currency.
    ('€', "E"),
];

/// German overrides, sorted by code point.
#[rustfmt::skip]
static GERMAN: &[(char, &str)] = &[
    ('Ä', "Ae"), ('Ö', "Oe"), ('Ü', "Ue"),
    ('ß', "ss"),
    ('ä', "ae"), ('ö', "oe"), ('ü', "ue"),
];

/// Danish overrides, sorted by code point.
#[rustfmt::skip]
static DANISH: &[(char, &str)] = &[
    ('Å', "Aa"), ('Æ', "Ae"), ('Ø', "Oe"),
    ('å', "aa"), ('æ', "ae"), ('ø', "oe"),
];

/// Serbian/Bosnian overrides, sorted by code point.
#[rustfmt::skip]
static SERBIAN: &[(char, &str)] = &[
    ('Đ', "DJ"), ('đ', "dj"),
];

/// Catalan multi-character sequences, longest first.
#[rustfmt::skip]
static CATALAN_SEQUENCES: &[(&str, &str)] = &[
    ("L·L", "LL"), ("l·l", "ll"),
];

/// Per-char override table for a locale. Empty for locales whose overrides
/// are purely multi-character sequences.
pub(crate) fn locale_overrides(locale: Locale) -> &'static [(char, &'static str)] {
    match locale {
        Locale::German => GERMAN,
        Locale::Danish => DANISH,
        Locale::Serbian => SERBIAN,
        Locale::None | Locale::Catalan => &[],
    }
}

/// Multi-character sequence substitutions for a locale, longest-match
/// first.
pub(crate) fn locale_sequences(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::Catalan => CATALAN_SEQUENCES,
        _ => &[],
    }
}

/// Looks up a char in a table sorted by code point.
#[inline]
pub(crate) fn lookup(table: &'static [(char, &'static str)], c: char) -> Option<&'static str> {
    table
        .binary_search_by_key(&c, |&(key, _)| key)
        .ok()
        .map(|i| table[i].1)
}

/// Single-byte ISO-8859-1/Windows-1252 fallback: byte → ASCII byte.
/// Sorted by input byte; 63 entries.
#[rustfmt::skip]
pub(crate) static LATIN1_SINGLE: &[(u8, u8)] = &[
    (0x8A, b'S'), (0x8E, b'Z'), (0x9A, b's'), (0x9E, b'z'), (0x9F, b'Y'),
    (0xA2, b'c'), (0xA5, b'Y'), (0xB5, b'u'),
    (0xC0, b'A'), (0xC1, b'A'), (0xC2, b'A'), (0xC3, b'A'), (0xC4, b'A'), (0xC5, b'A'),
    (0xC7, b'C'),
    (0xC8, b'E'), (0xC9, b'E'), (0xCA, b'E'), (0xCB, b'E'),
    (0xCC, b'I'), (0xCD, b'I'), (0xCE, b'I'), (0xCF, b'I'),
    (0xD1, b'N'),
    (0xD2, b'O'), (0xD3, b'O'), (0xD4, b'O'), (0xD5, b'O'), (0xD6, b'O'), (0xD8, b'O'),
    (0xD9, b'U'), (0xDA, b'U'), (0xDB, b'U'), (0xDC, b'U'),
    (0xDD, b'Y'),
    (0xE0, b'a'), (0xE1, b'a'), (0xE2, b'a'), (0xE3, b'a'), (0xE4, b'a'), (0xE5, b'a'),
    (0xE7, b'c'),
    (0xE8, b'e'), (0xE9, b'e'), (0xEA, b'e'), (0xEB, b'e'),
    (0xEC, b'i'), (0xED, b'i'), (0xEE, b'i'), (0xEF, b'i'),
    (0xF1, b'n'),
    (0xF2, b'o'), (0xF3, b'o'), (0xF4, b'o'), (0xF5, b'o'), (0xF6, b'o'), (0xF8, b'o'),
    (0xF9, b'u'), (0xFA, b'u'), (0xFB, b'u'), (0xFC, b'u'),
    (0xFD, b'y'), (0xFF, b'y'),
];

/// Two-character digraph replacements for the single-byte fallback.
/// Sorted by input byte.
#[rustfmt::skip]
pub(crate) static LATIN1_DIGRAPHS: &[(u8, &str)] = &[
    (0x8C, "OE"), (0x9C, "oe"),
    (0xC6, "AE"), (0xD0, "DJ"), (0xDE, "TH"), (0xDF, "ss"),
    (0xE6, "ae"), (0xF0, "dj"), (0xFE, "th"),
];

/// Looks up a byte in a table sorted by input byte.
#[inline]
pub(crate) fn lookup_byte<T: Copy>(table: &[(u8, T)], b: u8) -> Option<T> {
    table
        .binary_search_by_key(&b, |&(key, _)| key)
        .ok()
        .map(|i| table[i].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_by_char(table: &[(char, &str)]) {
        for w in table.windows(2) {
            assert!(
                w[0].0 < w[1].0,
                "table not sorted at {:?} / {:?}",
                w[0],
                w[1]
            );
        }
    }

    #[test]
    fn base_table_is_sorted_and_unique() {
        assert_sorted_by_char(BASE);
    }

    #[test]
    fn locale_tables_are_sorted() {
        for locale in [Locale::German, Locale::Danish, Locale::Serbian] {
            assert_sorted_by_char(locale_overrides(locale));
        }
    }

    #[test]
    fn latin1_tables_are_sorted() {
        for w in LATIN1_SINGLE.windows(2) {
            assert!(w[0].0 < w[1].0);
        }
        for w in LATIN1_DIGRAPHS.windows(2) {
            assert!(w[0].0 < w[1].0);
        }
    }

    #[test]
    fn latin1_single_has_63_entries() {
        assert_eq!(LATIN1_SINGLE.len(), 63);
    }

    #[test]
    fn base_replacements_are_ascii() {
        for &(_, replacement) in BASE {
            assert!(replacement.is_ascii(), "non-ASCII replacement {:?}", replacement);
            assert!(replacement.len() <= 2);
        }
    }

    #[test]
    fn base_spot_checks() {
        assert_eq!(lookup(BASE, 'é'), Some("e"));
        assert_eq!(lookup(BASE, 'ß'), Some("ss"));
        assert_eq!(lookup(BASE, 'Æ'), Some("AE"));
        assert_eq!(lookup(BASE, 'ǔ'), Some("u"));
        assert_eq!(lookup(BASE, 'ạ'), Some("a"));
        assert_eq!(lookup(BASE, '€'), Some("E"));
        assert_eq!(lookup(BASE, '£'), Some(""));
        assert_eq!(lookup(BASE, 'x'), None);
        assert_eq!(lookup(BASE, '語'), None);
    }

    #[test]
    fn locale_overrides_beat_base() {
        assert_eq!(lookup(locale_overrides(Locale::German), 'ä'), Some("ae"));
        assert_eq!(lookup(BASE, 'ä'), Some("a"));
        assert_eq!(lookup(locale_overrides(Locale::Danish), 'å'), Some("aa"));
        assert_eq!(lookup(locale_overrides(Locale::Serbian), 'đ'), Some("dj"));
    }

    #[test]
    fn catalan_sequences_longest_first() {
        let seqs = locale_sequences(Locale::Catalan);
        assert!(!seqs.is_empty());
        for w in seqs.windows(2) {
            assert!(w[0].0.len() >= w[1].0.len());
        }
    }

    #[test]
    fn latin1_spot_checks() {
        assert_eq!(lookup_byte(LATIN1_SINGLE, 0xE9), Some(b'e')); // é
        assert_eq!(lookup_byte(LATIN1_SINGLE, 0xC4), Some(b'A')); // Ä
        assert_eq!(lookup_byte(LATIN1_DIGRAPHS, 0xDF), Some("ss")); // ß
        assert_eq!(lookup_byte(LATIN1_DIGRAPHS, 0xD0), Some("DJ")); // Ð
        assert_eq!(lookup_byte(LATIN1_SINGLE, 0x41), None); // plain 'A'
    }
}
