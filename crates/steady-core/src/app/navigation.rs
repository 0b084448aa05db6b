impl<IN, SK, TM> ReaderSession<IN, SK, TM>
where
    IN: InputProvider,
    SK: FrameSink,
    TM: TimerService,
{
    /// Move by `frames`, clamped to the first and last frame.
    pub fn step(&mut self, frames: i32) {
        let last = self.last_frame() as i64;
        let target = (self.frame as i64).saturating_add(i64::from(frames)).clamp(0, last);
        debug!(
            "nav: step by={} from={} to={}",
            frames, self.frame, target
        );
        self.jump_to(target as usize);
    }

    /// Append a digit to the goto accumulator, saturating at the last frame.
    pub fn goto_digit(&mut self, digit: u8) {
        let digit = usize::from(digit.min(9));
        self.pending_goto = self
            .pending_goto
            .saturating_mul(10)
            .saturating_add(digit)
            .min(self.last_frame());
        self.present();
    }

    pub fn goto_commit(&mut self) {
        let target = self.pending_goto.min(self.last_frame());
        self.pending_goto = 0;
        debug!("nav: goto from={} to={}", self.frame, target);
        self.jump_to(target);
    }

    pub fn goto_clear(&mut self) {
        self.pending_goto = 0;
        self.present();
    }

    /// Step one budget and rebuild the index when it changed.
    pub fn change_budget(&mut self, kind: BudgetKind, increase: bool) -> bool {
        let mut budgets = self.config.budgets;
        let changed = match kind {
            BudgetKind::Words => budgets.step_words(increase),
            BudgetKind::Lines => budgets.step_lines(increase),
            BudgetKind::Width => budgets.step_width(increase, self.display_width),
        };
        if changed {
            self.set_budgets(budgets);
        }
        changed
    }

    /// Replace the budgets and rebuild the frame index.
    pub fn set_budgets(&mut self, budgets: Budgets) {
        let config = ReaderConfig {
            budgets,
            ..self.config
        };
        let (config, warnings) = config.sanitize(self.display_width);
        if !warnings.is_empty() {
            self.config_warnings = warnings;
        }
        self.config = config;
        self.rebuild_index();
    }

    /// Recompute frame offsets and statistics for the current budgets.
    ///
    /// The cursor lands on the last frame starting at or before the token
    /// that was on screen, so the reader keeps their place.
    pub fn rebuild_index(&mut self) {
        let previous_token = self.token;
        self.index = FrameIndex::build(self.tokens.as_slice(), self.config.budgets);
        self.base_interval_ms =
            base_interval_ms(self.config.wpm, self.index.mean_words_per_frame());
        self.pending_goto = self.pending_goto.min(self.last_frame());

        let frame = self.index.frame_at_or_before(previous_token);
        debug!(
            "nav: resnap token={} frame={}/{} token={}",
            previous_token,
            frame,
            self.last_frame(),
            self.index.offset(frame)
        );
        self.jump_to(frame);
    }

    fn jump_to(&mut self, frame: usize) {
        self.seek_frame(frame);
        self.render_current();
        self.rearm_after_navigation();
        self.present();
    }

    fn seek_frame(&mut self, frame: usize) {
        self.frame = frame.min(self.last_frame());
        self.token = self.index.offset(self.frame);
    }
}
