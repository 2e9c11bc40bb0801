//! Display width calculation for Unicode text
//!
//! Engine names and URLs can contain CJK characters and emoji, so layout
//! must be measured in terminal columns rather than bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Calculate the display width of a single character.
///
/// Returns 0 for control characters and zero-width characters,
/// 2 for CJK/fullwidth characters and emoji,
/// 1 for most other characters.
#[inline]
pub fn char_width(c: char) -> usize {
    // unicode_width returns None for control characters
    c.width().unwrap_or(0)
}

/// Calculate the display width of a string.
#[inline]
pub fn str_width(s: &str) -> usize {
    s.width()
}

/// Truncate `s` so that it fits in `max_width` columns.
///
/// When truncation happens the last visible column is replaced by `…`.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if str_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = char_width(ch);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Byte offset of the char boundary before `byte_offset` (0 at the start).
pub fn prev_char_boundary(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset.min(s.len())]
        .char_indices()
        .next_back()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Byte offset of the char boundary after `byte_offset` (`s.len()` at the end).
pub fn next_char_boundary(s: &str, byte_offset: usize) -> usize {
    let offset = byte_offset.min(s.len());
    s[offset..]
        .chars()
        .next()
        .map(|c| offset + c.len_utf8())
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(str_width("Google"), 6);
        assert_eq!(char_width('a'), 1);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(str_width("百度"), 4);
        assert_eq!(char_width('搜'), 2);
    }

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate_to_width("Bing", 10), "Bing");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("DuckDuckGo", 5), "Duck…");
        assert_eq!(str_width(&truncate_to_width("百度一下你就知道", 7)), 7);
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("Bing", 0), "");
    }

    #[test]
    fn test_char_boundaries() {
        let s = "a百b";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 4);
        assert_eq!(prev_char_boundary(s, 4), 1);
        assert_eq!(prev_char_boundary(s, 0), 0);
        assert_eq!(next_char_boundary(s, s.len()), s.len());
    }
}
