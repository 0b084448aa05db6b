use alloc::vec::Vec;

use log::debug;

use super::build_frame;
use crate::{content::text_utils::visible_len, settings::Budgets};

/// Starting token of every frame plus the statistics the pacing relies on.
///
/// Offsets start at `0`, strictly increase, and stay below the token
/// count. Rebuilt explicitly whenever the budgets change.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameIndex {
    offsets: Vec<usize>,
    mean_words_per_frame: f32,
    mean_word_length: f32,
}

impl FrameIndex {
    pub fn build<S: AsRef<str>>(tokens: &[S], budgets: Budgets) -> Self {
        let mut offsets = Vec::new();
        let mut visible = 0usize;
        let mut cursor = 0usize;

        while cursor < tokens.len() {
            let frame = build_frame(tokens, cursor, budgets);
            if frame.next <= cursor {
                break;
            }
            offsets.push(cursor);
            visible += frame
                .lines
                .iter()
                .map(|line| visible_len(&line.text))
                .sum::<usize>();
            cursor = frame.next;
        }

        let token_count = tokens.len();
        let (mean_words_per_frame, mean_word_length) = if offsets.is_empty() {
            (0.0, 0.0)
        } else {
            (
                token_count as f32 / offsets.len() as f32,
                visible as f32 / token_count as f32,
            )
        };

        debug!(
            "index: built frames={} tokens={} words_per_frame={:.2} word_length={:.2} budgets={:?}",
            offsets.len(),
            token_count,
            mean_words_per_frame,
            mean_word_length,
            budgets
        );

        Self {
            offsets,
            mean_words_per_frame,
            mean_word_length,
        }
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn frame_count(&self) -> usize {
        self.offsets.len()
    }

    pub fn last_frame(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Starting token of `frame`, clamped to the last frame.
    pub fn offset(&self, frame: usize) -> usize {
        self.offsets
            .get(frame.min(self.last_frame()))
            .copied()
            .unwrap_or(0)
    }

    /// Last frame whose starting token is at or before `token`.
    pub fn frame_at_or_before(&self, token: usize) -> usize {
        self.offsets
            .partition_point(|&offset| offset <= token)
            .saturating_sub(1)
    }

    pub fn mean_words_per_frame(&self) -> f32 {
        self.mean_words_per_frame
    }

    pub fn mean_word_length(&self) -> f32 {
        self.mean_word_length
    }
}
