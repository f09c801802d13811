//! Diacritic folding for match-insensitive comparison
//!
//! OCR transcriptions of Romanian and Hungarian periodicals spell the same
//! word with and without diacritics, often within one page. Matching folds
//! both sides to their base Latin letters; display always keeps the original.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Romanian and Hungarian diacritics mapped to their base Latin letters.
/// Every substitution is one code point to one code point, so offsets
/// computed on the folded text remain valid on the original text.
const DIACRITIC_PAIRS: &[(char, char)] = &[
    ('À', 'A'),
    ('Á', 'A'),
    ('Â', 'A'),
    ('Ã', 'A'),
    ('Ä', 'A'),
    ('Å', 'A'),
    ('Ă', 'A'),
    ('à', 'a'),
    ('á', 'a'),
    ('â', 'a'),
    ('ã', 'a'),
    ('ä', 'a'),
    ('ă', 'a'),
    ('È', 'E'),
    ('É', 'E'),
    ('Ê', 'E'),
    ('é', 'e'),
    ('ê', 'e'),
    ('è', 'e'),
    ('Í', 'I'),
    ('Î', 'I'),
    ('í', 'i'),
    ('î', 'i'),
    ('Ó', 'O'),
    ('Õ', 'O'),
    ('Ö', 'O'),
    ('Ő', 'O'),
    ('ó', 'o'),
    ('õ', 'o'),
    ('ö', 'o'),
    ('ő', 'o'),
    ('Ú', 'U'),
    ('Ü', 'U'),
    ('Ű', 'U'),
    ('ú', 'u'),
    ('ü', 'u'),
    ('ű', 'u'),
    ('Ş', 'S'),
    ('Ș', 'S'),
    ('ş', 's'),
    ('ș', 's'),
    ('Ț', 'T'),
    ('Ţ', 'T'),
    ('ț', 't'),
    ('ţ', 't'),
];

lazy_static! {
    static ref DIACRITIC_MAP: HashMap<char, char> = DIACRITIC_PAIRS.iter().copied().collect();
}

/// Fold diacritics to base Latin letters and lower-case the result.
///
/// The output always has the same number of chars as the input: folding is a
/// one-to-one code point substitution, and lower-casing is skipped for the
/// rare code points that expand under it.
pub fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let base = DIACRITIC_MAP.get(&c).copied().unwrap_or(c);
    let mut lowered = base.to_lowercase();
    match (lowered.next(), lowered.next()) {
        (Some(single), None) => single,
        _ => base,
    }
}
