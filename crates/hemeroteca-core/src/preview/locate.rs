//! Occurrence location and variant collection
//!
//! Occurrences are found on the folded text, variants are read back from the
//! original text. All offsets are char offsets, never byte offsets.

use super::fold::fold;

/// Find the char offset of every case- and diacritic-insensitive occurrence
/// of `term` in `content`, ascending.
///
/// Each match consumes its full length before the next scan resumes, so the
/// returned occurrences never overlap.
pub fn find_occurrences(term: &str, content: &str) -> Vec<usize> {
    let term: Vec<char> = fold(term).chars().collect();
    let content: Vec<char> = fold(content).chars().collect();

    let mut occurrences = Vec::new();
    if term.is_empty() {
        return occurrences;
    }

    let mut from = 0;
    while let Some(index) = find_from(&content, &term, from) {
        occurrences.push(index);
        from = index + term.len();
    }

    occurrences
}

fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if from >= haystack.len() || needle.len() > haystack.len() - from {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| from + offset)
}

/// Collect the distinct spellings of the term actually present in `content`
/// at the given occurrence offsets, in first-seen order.
///
/// The match was diacritic- and case-insensitive, so the page may carry
/// several literal variants ("Darwin", "darwin", "Babeș", "Babes"); each must
/// be highlighted in its original form.
pub fn distinct_variants(occurrences: &[usize], content: &str, term_len: usize) -> Vec<String> {
    let chars: Vec<char> = content.chars().collect();
    let mut variants: Vec<String> = Vec::new();

    for &index in occurrences {
        let end = (index + term_len).min(chars.len());
        let variant: String = chars[index.min(end)..end].iter().collect();
        if !variants.contains(&variant) {
            variants.push(variant);
        }
    }

    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_occurrences_single_letter() {
        assert_eq!(
            find_occurrences("a", "Ana are mere si banane"),
            vec![0, 2, 4, 17, 19]
        );
    }

    #[test]
    fn test_find_occurrences_with_diacritics() {
        let term = "Mărţişor";
        let content = concat!(
            "cumpărând mărţişorul elaborat de Liga Apărării contra",
            " Atacurilor Aeriene, preţul fiind de 10 lei bucata,",
            " mărţişor ce-1 vinde cu ocazia zilei de 1 Martie 1935.",
            " Acest mărţişor, însă cu panglicuţă"
        );

        assert_eq!(find_occurrences(term, content), vec![10, 105, 165]);
    }

    #[test]
    fn test_find_occurrences_no_match() {
        assert_eq!(find_occurrences("darwin", "nothing relevant here"), Vec::<usize>::new());
    }

    #[test]
    fn test_find_occurrences_does_not_overlap() {
        // "aaaa" holds two non-overlapping "aa" matches, not three
        assert_eq!(find_occurrences("aa", "aaaa"), vec![0, 2]);
    }

    #[test]
    fn test_find_occurrences_term_longer_than_content() {
        assert_eq!(find_occurrences("banane", "ban"), Vec::<usize>::new());
    }

    #[test]
    fn test_distinct_variants_case() {
        let content = "Darwin darwin Darwin DARWIN";
        assert_eq!(
            distinct_variants(&[0, 7, 14, 21], content, 6),
            vec!["Darwin", "darwin", "DARWIN"]
        );
    }

    #[test]
    fn test_distinct_variants_diacritics() {
        let content = "Babeș Babes Babeș Babes";
        assert_eq!(
            distinct_variants(&[0, 6, 12, 18], content, 5),
            vec!["Babeș", "Babes"]
        );
    }

    #[test]
    fn test_distinct_variants_empty() {
        assert_eq!(distinct_variants(&[], "whatever", 4), Vec::<String>::new());
    }
}
