//! Snippet assembly from merged windows

/// Placeholder shown when the term does not occur in the page text
pub const PREVIEW_UNAVAILABLE: &str = "preview not available";

/// Marker standing in for elided text between and around windows
pub const ELLIPSIS: &str = "[...]";

/// Join the merged windows' text into one preview string.
///
/// Windows are separated by the ellipsis marker. A leading marker is added
/// unless the first window starts at the beginning of the content, a trailing
/// one unless the last window reaches its end. With no windows at all the
/// placeholder is returned.
pub fn assemble(merged: &[(usize, usize)], content: &str) -> String {
    if merged.is_empty() {
        return PREVIEW_UNAVAILABLE.to_string();
    }

    let chars: Vec<char> = content.chars().collect();
    let len = chars.len();

    let pieces: Vec<String> = merged
        .iter()
        .map(|&(start, end)| chars[start.min(len)..end.min(len)].iter().collect())
        .collect();
    let mut preview = pieces.join(&format!(" {} ", ELLIPSIS));

    let starts_at_front = merged[0].0 == 0;
    let reaches_back = merged[merged.len() - 1].1 >= len;

    match (starts_at_front, reaches_back) {
        (true, true) => {}
        (true, false) => preview = format!("{} {}", preview, ELLIPSIS),
        (false, true) => preview = format!("{} {}", ELLIPSIS, preview),
        (false, false) => preview = format!("{} {} {}", ELLIPSIS, preview, ELLIPSIS),
    }

    preview
}
