//! Shared formatting utilities for UI components.

use chrono::NaiveTime;
use unicode_width::UnicodeWidthStr;

/// Terminal columns taken by a string.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Format a timestamp as 24-hour `HH:MM:SS`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Replace control characters with spaces so they can neither reach the
/// terminal nor skew width measurement.
pub fn replace_controls(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Cut a string to at most `max_width` columns.
///
/// Widths are always measured on the kept prefix as a whole, since
/// variation selectors and similar sequences change the width of what
/// precedes them. When a character would overshoot the limit the gap is
/// filled with spaces, so the result is exactly `max_width` columns whenever
/// the input is at least that wide. Returns the text and its width.
pub fn clip_to_width(s: &str, max_width: usize) -> (String, usize) {
    let full = display_width(s);
    if full <= max_width {
        return (s.to_string(), full);
    }

    let mut out = String::new();
    for c in s.chars() {
        out.push(c);
        if display_width(&out) > max_width {
            out.pop();
            break;
        }
    }

    let kept = display_width(&out);
    out.extend(std::iter::repeat(' ').take(max_width - kept));
    let used = display_width(&out);
    (out, used)
}

/// Split free space around centered content. The odd column goes after.
pub fn center_padding(available: usize, content: usize) -> (usize, usize) {
    let free = available.saturating_sub(content);
    let leading = free / 2;
    (leading, free - leading)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_columns_not_chars() {
        assert_eq!(display_width("NASDAQ"), 6);
        assert_eq!(display_width("●"), 1);
        assert_eq!(display_width("東京"), 4);
    }

    #[test]
    fn clock_is_zero_padded_24_hour() {
        let t = NaiveTime::from_hms_opt(9, 5, 7).unwrap();
        assert_eq!(format_clock(t), "09:05:07");
        let t = NaiveTime::from_hms_opt(21, 15, 0).unwrap();
        assert_eq!(format_clock(t), "21:15:00");
    }

    #[test]
    fn clip_short_string_is_unchanged() {
        assert_eq!(clip_to_width("abc", 5), ("abc".to_string(), 3));
    }

    #[test]
    fn clip_cuts_at_limit() {
        assert_eq!(clip_to_width("abcdef", 4), ("abcd".to_string(), 4));
        assert_eq!(clip_to_width("abcdef", 0), (String::new(), 0));
    }

    #[test]
    fn clip_replaces_straddling_wide_char() {
        // "a東" is 3 columns; a 2 column cut cannot keep the wide char.
        assert_eq!(clip_to_width("a東", 2), ("a ".to_string(), 2));
    }

    #[test]
    fn clip_measures_variation_selector_sequences() {
        // U+2600 alone is one column; with U+FE0F the pair takes two.
        let sun = "\u{2600}\u{FE0F}";
        let input = sun.repeat(4);
        for max in 0..=8 {
            let (text, width) = clip_to_width(&input, max);
            assert_eq!(width, max, "max {max}");
            assert_eq!(display_width(&text), max, "max {max}");
        }
    }

    #[test]
    fn clip_measures_combining_marks() {
        let input = "e\u{301}".repeat(6);
        for max in 0..=6 {
            let (text, width) = clip_to_width(&input, max);
            assert_eq!(width, max);
            assert_eq!(display_width(&text), max);
        }
    }

    #[test]
    fn controls_become_spaces() {
        assert_eq!(replace_controls("a\tb\u{1b}[31mc\n"), "a b [31mc ");
        assert_eq!(replace_controls("NASDAQ"), "NASDAQ");
    }

    #[test]
    fn odd_padding_goes_to_trailing_side() {
        assert_eq!(center_padding(5, 4), (0, 1));
        assert_eq!(center_padding(7, 4), (1, 2));
        assert_eq!(center_padding(8, 4), (2, 2));
        assert_eq!(center_padding(3, 4), (0, 0));
    }
}
