//! Display-width helpers for laying out text in terminal columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string to fit within `max_width` columns, ending with `…` when cut.
///
/// ```rust
/// use folio::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Kissflow", 10), "Kissflow");
/// assert_eq!(truncate_to_width("Jasmin Infotech", 7), "Jasmin…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // Leave a column for the ellipsis
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Spaces that push `right` to the end of a `width`-column line after `left`.
///
/// Always at least one space, so the two never touch.
///
/// ```rust
/// use folio::gap;
///
/// assert_eq!(format!("ab{}cd", gap("ab", "cd", 8)), "ab    cd");
/// ```
pub fn gap(left: &str, right: &str, width: usize) -> String {
    let used = left.width() + right.width();
    " ".repeat(width.saturating_sub(used).max(1))
}

/// Greedy word wrap to `width` columns.
///
/// Words wider than a line are kept whole on their own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if line.width() + 1 + word.width() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_no_truncation() {
        assert_eq!(truncate_to_width("Hello", 10), "Hello");
        assert_eq!(truncate_to_width("Hello", 5), "Hello");
        assert_eq!(truncate_to_width("", 5), "");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
        assert_eq!(truncate_to_width("123456", 5), "1234…");
        assert_eq!(truncate_to_width("Hello", 1), "…");
        assert_eq!(truncate_to_width("Hello", 0), "…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK character takes two columns
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_gap_fills_line() {
        assert_eq!(gap("Kissflow", "2021", 20).len(), 8);
    }

    #[test]
    fn test_gap_never_zero() {
        assert_eq!(gap("a long left side", "right", 4), " ");
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_long_word_kept_whole() {
        let lines = wrap("a supercalifragilistic b", 5);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap("  a \n b  ", 80), vec!["a b"]);
        assert!(wrap("   ", 80).is_empty());
    }
}
