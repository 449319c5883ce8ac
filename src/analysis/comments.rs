//! Backward scan for comment blocks sitting directly above a declaration.

const COMMENT_MARKER: char = '#';

/// Collect the contiguous `#` comment lines immediately above
/// `declaration_line_index` (0-based), oldest first, with the marker and the
/// whitespace after it removed. Any other line, blank lines included, ends the
/// scan.
pub fn scan_preceding_comments<S: AsRef<str>>(
    lines: &[S],
    declaration_line_index: usize,
) -> Vec<String> {
    if declaration_line_index >= lines.len() {
        return Vec::new();
    }

    let mut comments: Vec<String> = lines[..declaration_line_index]
        .iter()
        .rev()
        .map(|line| line.as_ref().trim())
        .take_while(|line| line.starts_with(COMMENT_MARKER))
        .map(|line| line.trim_start_matches(COMMENT_MARKER).trim().to_string())
        .collect();

    comments.reverse();
    comments
}
