impl<IN, SK, TM> ReaderSession<IN, SK, TM>
where
    IN: InputProvider,
    SK: FrameSink,
    TM: TimerService,
{
    pub fn status(&self) -> StatusView {
        StatusView {
            frame_index: self.frame,
            frame_total: self.index.frame_count(),
            token_index: self.token,
            token_total: self.tokens.len(),
            words_per_frame: self.index.mean_words_per_frame(),
            word_length: self.index.mean_word_length(),
            wpm: self.config.wpm,
            interval_ms: self.interval_ms,
            budgets: self.config.budgets,
            pending_goto: self.pending_goto,
            paused: self.is_paused(),
        }
    }

    /// Rebuild the on-screen lines from the current token offset.
    fn render_current(&mut self) {
        let frame = build_frame(self.tokens.as_slice(), self.token, self.config.budgets);
        self.frame_visible_len = frame.visible_len();
        self.lines.clear();
        for (row, line) in frame.lines.iter().enumerate() {
            let focused = if row == 0 {
                format_focus(&line.text)
            } else {
                format_plain(&line.text)
            };
            let _ = self.lines.push(focused);
        }
    }

    fn present(&mut self) {
        let status = self.status();
        self.sink.present(FrameView {
            lines: &self.lines,
            status,
        });
    }
}
