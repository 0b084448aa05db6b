//! Frame segmentation: turning consecutive tokens into bounded lines.

mod index;

pub use index::FrameIndex;

use alloc::string::String;

use heapless::Vec as HeaplessVec;

use crate::{
    content::text_utils::{char_len, ends_sentence, ends_with_punctuation, visible_len},
    settings::{Budgets, MAX_LINES},
};

/// One line of a frame.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FrameLine {
    /// Consumed tokens joined by single spaces.
    pub text: String,
    /// Index of the first token not consumed by this line.
    pub next: usize,
    /// The line ended on a sentence-ending mark.
    pub terminal: bool,
}

/// Build one line starting at token `start`.
///
/// Accumulates up to `word_budget` tokens while the joined text fits in
/// `width_budget` characters. A token ending in punctuation is kept and
/// closes the line. The first token is always taken, even when it alone
/// is wider than the budget.
pub fn build_line<S: AsRef<str>>(
    tokens: &[S],
    start: usize,
    word_budget: usize,
    width_budget: usize,
) -> FrameLine {
    let mut line = FrameLine {
        text: String::new(),
        next: start,
        terminal: false,
    };
    let mut width = 0usize;

    for token in tokens.iter().skip(start).take(word_budget.max(1)) {
        let token = token.as_ref();
        let token_width = char_len(token);

        if line.next > start {
            if width + 1 + token_width > width_budget {
                break;
            }
            line.text.push(' ');
            width += 1;
        }
        line.text.push_str(token);
        width += token_width;
        line.next += 1;

        if ends_with_punctuation(token) {
            line.terminal = ends_sentence(&line.text);
            break;
        }
    }

    line
}

/// A multi-line frame rendered from its starting token.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Frame {
    pub lines: HeaplessVec<FrameLine, { MAX_LINES as usize }>,
    pub start: usize,
    pub next: usize,
}

impl Frame {
    /// Total non-whitespace characters across every line.
    pub fn visible_len(&self) -> usize {
        self.lines.iter().map(|line| visible_len(&line.text)).sum()
    }
}

/// Build a frame of up to `budgets.lines` lines starting at `start`.
///
/// Construction stops early after a line that ends a sentence.
pub fn build_frame<S: AsRef<str>>(tokens: &[S], start: usize, budgets: Budgets) -> Frame {
    let mut frame = Frame {
        lines: HeaplessVec::new(),
        start,
        next: start,
    };

    let line_budget = usize::from(budgets.lines).clamp(1, MAX_LINES as usize);
    while frame.lines.len() < line_budget && frame.next < tokens.len() {
        let line = build_line(
            tokens,
            frame.next,
            usize::from(budgets.words),
            usize::from(budgets.width),
        );
        frame.next = line.next;
        let terminal = line.terminal;
        if frame.lines.push(line).is_err() || terminal {
            break;
        }
    }

    frame
}
