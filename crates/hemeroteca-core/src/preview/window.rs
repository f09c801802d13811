//! Preview window construction and merging
//!
//! A window is a half-open `(start, end)` pair of char offsets delimiting the
//! readable region around one occurrence. Windows are widened so they never
//! cut a word, then collapsed into a minimal set of disjoint intervals.

/// Build one window per occurrence, in occurrence order.
///
/// Each window spans `radius` chars before and after the match, then grows
/// outward to the nearest word boundary: `end` walks forward over trailing
/// alphanumerics, `start` walks backward over leading ones and settles on the
/// first alphanumeric char of its word. `end` may exceed the content length;
/// it is clamped only when the text is sliced.
pub fn build_windows(
    content: &str,
    radius: usize,
    term_len: usize,
    occurrences: &[usize],
) -> Vec<(usize, usize)> {
    let chars: Vec<char> = content.chars().collect();
    let len = chars.len();
    let mut windows = Vec::with_capacity(occurrences.len());

    for &index in occurrences {
        let mut end = index + term_len + radius;
        let mut start = if index <= radius { 0 } else { index - radius };

        while start > 0 && chars[start].is_alphanumeric() {
            start -= 1;
        }
        while end < len && chars[end].is_alphanumeric() {
            end += 1;
        }
        // the backward scan stops one char left of the word it must keep
        if start < len && !chars[start].is_alphanumeric() {
            start += 1;
        }

        windows.push((start, end));
    }

    windows
}

/// Merge overlapping or touching windows into a disjoint ascending sequence.
///
/// Input windows are already sorted by start, as produced from ascending
/// occurrences. A window whose start is not past the current end is absorbed
/// by extending the current end.
pub fn merge_windows(windows: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut merged = Vec::new();

    let mut pointer = 0;
    while pointer < windows.len() {
        let start = windows[pointer].0;
        let mut end = windows[pointer].1;

        while pointer + 1 < windows.len() && windows[pointer + 1].0 <= end {
            end = windows[pointer + 1].1;
            pointer += 1;
        }

        merged.push((start, end));
        pointer += 1;
    }

    merged
}
