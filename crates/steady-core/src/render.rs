//! View models handed to the presentation layer.

use crate::{focus::FocusedLine, settings::Budgets};

/// Session summary shown next to the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusView {
    pub frame_index: usize,
    pub frame_total: usize,
    pub token_index: usize,
    pub token_total: usize,
    pub words_per_frame: f32,
    pub word_length: f32,
    pub wpm: u16,
    pub interval_ms: u32,
    pub budgets: Budgets,
    pub pending_goto: usize,
    pub paused: bool,
}

/// One frame ready for display: lines centered on their focal character,
/// the leading line highlighted.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub lines: &'a [FocusedLine],
    pub status: StatusView,
}

/// Receives every frame the session wants on screen.
pub trait FrameSink {
    fn present(&mut self, view: FrameView<'_>);
}

impl<F> FrameSink for F
where
    F: FnMut(FrameView<'_>),
{
    fn present(&mut self, view: FrameView<'_>) {
        self(view)
    }
}
