//! Reader session: navigation state machine driving frame display and pacing.

use core::fmt;

use heapless::Vec as HeaplessVec;
use log::{debug, info, warn};

use crate::{
    content::Tokens,
    focus::{FocusedLine, format_focus, format_plain},
    frame::{FrameIndex, build_frame},
    input::{BudgetKind, InputEvent, InputProvider},
    render::{FrameSink, FrameView, StatusView},
    settings::{Budgets, ConfigWarning, ConfigWarnings, MAX_LINES, ReaderConfig},
    timer::{Epoch, TimerService},
    timing::{adjusted_interval_ms, base_interval_ms},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionError {
    /// The token sequence is empty.
    NoContent,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoContent => f.write_str("no content to read"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Playback {
    #[default]
    Running,
    Paused,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputResult {
    Continue,
    Quit,
}

pub struct ReaderSession<IN, SK, TM>
where
    IN: InputProvider,
    SK: FrameSink,
    TM: TimerService,
{
    tokens: Tokens,
    input: IN,
    sink: SK,
    timer: TM,
    config: ReaderConfig,
    config_warnings: ConfigWarnings,
    display_width: usize,
    index: FrameIndex,
    frame: usize,
    token: usize,
    pending_goto: usize,
    playback: Playback,
    base_interval_ms: u32,
    interval_ms: u32,
    epoch: Epoch,
    armed: Option<TM::Handle>,
    lines: HeaplessVec<FocusedLine, { MAX_LINES as usize }>,
    frame_visible_len: usize,
}

impl<IN, SK, TM> ReaderSession<IN, SK, TM>
where
    IN: InputProvider,
    SK: FrameSink,
    TM: TimerService,
{
    /// Build a session over `tokens`. Out-of-range configuration values
    /// are clamped and reported through [`Self::config_warnings`].
    ///
    /// Nothing is shown or scheduled until [`Self::start`].
    pub fn new(
        tokens: Tokens,
        config: ReaderConfig,
        display_width: usize,
        input: IN,
        sink: SK,
        timer: TM,
    ) -> Result<Self, SessionError> {
        let (config, config_warnings) = config.sanitize(display_width);
        let index = FrameIndex::build(tokens.as_slice(), config.budgets);
        if index.frame_count() == 0 {
            return Err(SessionError::NoContent);
        }
        let base_interval_ms = base_interval_ms(config.wpm, index.mean_words_per_frame());

        info!(
            "session: tokens={} frames={} wpm={} interval_ms={}",
            tokens.len(),
            index.frame_count(),
            config.wpm,
            base_interval_ms
        );

        Ok(Self {
            tokens,
            input,
            sink,
            timer,
            config,
            config_warnings,
            display_width,
            index,
            frame: 0,
            token: 0,
            pending_goto: 0,
            playback: Playback::Running,
            base_interval_ms,
            interval_ms: base_interval_ms,
            epoch: 0,
            armed: None,
            lines: HeaplessVec::new(),
            frame_visible_len: 0,
        })
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn config_warnings(&self) -> &[ConfigWarning] {
        &self.config_warnings
    }

    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    pub fn index(&self) -> &FrameIndex {
        &self.index
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    pub fn token_index(&self) -> usize {
        self.token
    }

    pub fn last_frame(&self) -> usize {
        self.index.last_frame()
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_paused(&self) -> bool {
        self.playback == Playback::Paused
    }

    pub fn pending_goto(&self) -> usize {
        self.pending_goto
    }

    pub fn base_interval_ms(&self) -> u32 {
        self.base_interval_ms
    }

    /// Delay of the most recently armed timer.
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Lines of the frame currently on screen.
    pub fn lines(&self) -> &[FocusedLine] {
        &self.lines
    }

    pub fn timer(&self) -> &TM {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut TM {
        &mut self.timer
    }

    pub fn sink(&self) -> &SK {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut SK {
        &mut self.sink
    }
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");

#[cfg(test)]
mod tests;
