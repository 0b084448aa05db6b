use core::fmt::Write as _;
use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, MoveToNextLine, Show},
    execute, queue,
    style::{Attribute, Color, Print, PrintStyledContent, Stylize},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use heapless::String as HeaplessString;
use log::warn;
use steady_core::{
    focus::FocusedLine,
    render::{FrameSink, FrameView, StatusView},
};

use super::keys::HELP_TEXT;

const STATUS_LINE_CAPACITY: usize = 64;

/// Full-screen terminal presentation of frames and session status.
pub(super) struct ConsoleSink {
    title: String,
    width: usize,
    out: Stdout,
}

impl ConsoleSink {
    pub(super) fn new(title: String, width: usize) -> Self {
        Self {
            title,
            width,
            out: io::stdout(),
        }
    }

    fn draw(&mut self, view: FrameView<'_>) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        queue!(self.out, Print(&self.title), MoveToNextLine(1))?;

        for line in status_lines(&view.status) {
            queue!(self.out, Print(line.as_str()), MoveToNextLine(1))?;
        }
        queue!(self.out, MoveToNextLine(1))?;

        let rule: String = "-".repeat(self.width);
        queue!(self.out, Print(&rule), MoveToNextLine(1))?;
        for line in view.lines {
            self.draw_line(line)?;
        }
        queue!(self.out, Print(&rule), MoveToNextLine(2))?;

        for help in HELP_TEXT.lines() {
            queue!(self.out, Print(help), MoveToNextLine(1))?;
        }
        self.out.flush()
    }

    fn draw_line(&mut self, line: &FocusedLine) -> io::Result<()> {
        let inner = self.width.saturating_sub(2);
        let (left, right) = line.padding(inner).unwrap_or((0, 0));
        queue!(self.out, Print(" "), Print(" ".repeat(left)))?;
        for span in line.spans() {
            if span.highlighted {
                queue!(
                    self.out,
                    PrintStyledContent(span.text.with(Color::Red).attribute(Attribute::Bold))
                )?;
            } else {
                queue!(self.out, Print(span.text))?;
            }
        }
        queue!(self.out, Print(" ".repeat(right + 1)), MoveToNextLine(1))
    }
}

impl FrameSink for ConsoleSink {
    fn present(&mut self, view: FrameView<'_>) {
        if let Err(err) = self.draw(view) {
            warn!("console: draw failed: {err}");
        }
    }
}

/// Status block. Frame and word positions are zero-based, matching the
/// numbers the goto accumulator takes.
fn status_lines(status: &StatusView) -> [HeaplessString<STATUS_LINE_CAPACITY>; 6] {
    let mut lines: [HeaplessString<STATUS_LINE_CAPACITY>; 6] = Default::default();
    let _ = write!(
        lines[0],
        "frames/total: {}/{}",
        status.frame_index,
        status.frame_total.saturating_sub(1)
    );
    let _ = write!(
        lines[1],
        "words/total: {}/{}",
        status.token_index,
        status.token_total.saturating_sub(1)
    );
    let _ = write!(
        lines[2],
        "words/frame: {:.1}  wpm: {}  interval: {}ms  lines: {}",
        status.words_per_frame, status.wpm, status.interval_ms, status.budgets.lines
    );
    let _ = write!(
        lines[3],
        "words/line: {}  chars/line: {}",
        status.budgets.words, status.budgets.width
    );
    let _ = write!(lines[4], "goto: {}", status.pending_goto);
    if status.paused {
        let _ = lines[5].push_str("[paused]");
    }
    lines
}

/// Switch the terminal into raw full-screen mode.
pub(super) fn enter() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)
}

/// Restore the terminal. Failures are logged only.
pub(super) fn leave() {
    if let Err(err) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
        warn!("console: restore screen failed: {err}");
    }
    if let Err(err) = terminal::disable_raw_mode() {
        warn!("console: disable raw mode failed: {err}");
    }
}
