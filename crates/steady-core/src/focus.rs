//! Focal character selection and centered alignment of frame lines.

use alloc::string::String;
use core::ops::Range;

/// A trimmed frame line with its focal character located.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FocusedLine {
    text: String,
    focal: Range<usize>,
    highlighted: bool,
    focus_offset: usize,
    visible_len: usize,
}

/// A run of text with a single highlight state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Locate the focal character of `text` and mark it highlighted.
///
/// The text is trimmed first. The focal character is the first
/// non-space character at or past a third of the trimmed length, which
/// keeps it inside the leading word of most lines.
pub fn format_focus(text: &str) -> FocusedLine {
    focus_line(text, true)
}

/// Same alignment as [`format_focus`] without the highlight.
pub fn format_plain(text: &str) -> FocusedLine {
    focus_line(text, false)
}

fn focus_line(text: &str, highlighted: bool) -> FocusedLine {
    let text = text.trim();
    if text.is_empty() {
        return FocusedLine::default();
    }

    let visible_len = text.chars().count();
    let third = visible_len / 3;
    let mut focus = (0usize, 0..0);
    for (offset, (byte, c)) in text.char_indices().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        focus = (offset, byte..byte + c.len_utf8());
        if offset >= third {
            break;
        }
    }

    let (focus_offset, focal) = focus;
    FocusedLine {
        text: String::from(text),
        focal,
        highlighted,
        focus_offset,
        visible_len,
    }
}

impl FocusedLine {
    /// Character offset of the focal character inside the trimmed text.
    pub fn focus_offset(&self) -> usize {
        self.focus_offset
    }

    /// Character count of the trimmed text, markup excluded.
    pub fn visible_len(&self) -> usize {
        self.visible_len
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn focal(&self) -> &str {
        &self.text[self.focal.clone()]
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Text before, at and after the focal character.
    pub fn spans(&self) -> [Span<'_>; 3] {
        [
            Span {
                text: &self.text[..self.focal.start],
                highlighted: false,
            },
            Span {
                text: self.focal(),
                highlighted: self.highlighted,
            },
            Span {
                text: &self.text[self.focal.end..],
                highlighted: false,
            },
        ]
    }

    /// Left and right padding that puts the focal character on column
    /// `width / 2`, or `None` when the line is wider than `width`.
    ///
    /// Lines whose tail would not fit after a centered focal character
    /// are shifted left so the padded width stays exactly `width`.
    pub fn padding(&self, width: usize) -> Option<(usize, usize)> {
        if self.visible_len > width {
            return None;
        }
        let slack = width - self.visible_len;
        let left = (width / 2).saturating_sub(self.focus_offset).min(slack);
        Some((left, slack - left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(line: &FocusedLine, width: usize) -> String {
        let (left, right) = line.padding(width).unwrap_or((0, 0));
        let mut out = String::new();
        out.extend(core::iter::repeat_n(' ', left));
        out.push_str(line.text());
        out.extend(core::iter::repeat_n(' ', right));
        out
    }

    #[test]
    fn empty_text_has_no_focus() {
        let line = format_focus("   ");
        assert_eq!(line.text(), "");
        assert_eq!(line.focus_offset(), 0);
        assert_eq!(line.visible_len(), 0);
        assert_eq!(line.focal(), "");
        assert_eq!(line.padding(4), Some((2, 2)));
    }

    #[test]
    fn focus_sits_at_first_third() {
        let line = format_focus("  reading  ");
        assert_eq!(line.visible_len(), 7);
        assert_eq!(line.focus_offset(), 2);
        assert_eq!(line.focal(), "a");

        let spans = line.spans();
        assert_eq!(spans[0].text, "re");
        assert!(spans[1].highlighted);
        assert_eq!(spans[2].text, "ding");
    }

    #[test]
    fn focus_skips_spaces_past_threshold() {
        // threshold is 1, which lands on the space
        let line = format_focus("a bcd");
        assert_eq!(line.focus_offset(), 2);
        assert_eq!(line.focal(), "b");
    }

    #[test]
    fn focus_handles_multibyte_text() {
        let line = format_focus("ñandú");
        assert_eq!(line.focus_offset(), 1);
        assert_eq!(line.focal(), "a");
        let line = format_focus("éé");
        assert_eq!(line.focal(), "é");
        assert_eq!(line.focus_offset(), 0);
    }

    #[test]
    fn plain_lines_are_not_highlighted() {
        let line = format_plain("word");
        assert!(!line.is_highlighted());
        assert!(line.spans().iter().all(|span| !span.highlighted));
    }

    #[test]
    fn centering_puts_focus_on_middle_column() {
        for (text, width) in [("a", 9), ("reading", 20), ("two words", 21), ("ñandú", 10)] {
            let line = format_focus(text);
            let padded = padded(&line, width);
            assert_eq!(padded.chars().count(), width, "{text:?}");
            let (left, _) = line.padding(width).unwrap();
            let column = left + line.spans()[0].text.chars().count();
            assert_eq!(column, width / 2, "{text:?}");
            assert_eq!(padded.chars().nth(column), line.focal().chars().next());
        }
    }

    #[test]
    fn overlong_line_is_not_padded() {
        let line = format_focus("overflowing");
        assert_eq!(line.padding(5), None);
        assert_eq!(padded(&line, 5), "overflowing");
    }

    #[test]
    fn long_tail_shifts_left_but_keeps_width() {
        let line = format_focus("abcdefghij");
        assert_eq!(line.padding(10), Some((0, 0)));
        // focus at 3, centered left pad of 3 would need 13 columns
        assert_eq!(line.padding(12), Some((2, 0)));
    }
}
