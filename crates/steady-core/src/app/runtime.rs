impl<IN, SK, TM> ReaderSession<IN, SK, TM>
where
    IN: InputProvider,
    SK: FrameSink,
    TM: TimerService,
{
    /// Show the first frame and start playback.
    pub fn start(&mut self) {
        self.start_at(0);
    }

    /// Show the frame holding `token` and start playback from there.
    pub fn start_at(&mut self, token: usize) {
        self.frame = self.index.frame_at_or_before(token);
        self.token = self.index.offset(self.frame);
        self.pending_goto = 0;
        self.render_current();

        if self.frame >= self.last_frame() {
            self.playback = Playback::Paused;
            self.disarm();
        } else {
            self.playback = Playback::Running;
            self.arm(self.base_interval_ms);
        }
        debug!(
            "nav: start frame={}/{} token={} playback={:?}",
            self.frame,
            self.last_frame(),
            self.token,
            self.playback
        );
        self.present();
    }

    /// Deliver a fired timer. Returns `false` when the timer was stale:
    /// armed for an earlier epoch, or arriving while paused.
    pub fn on_timer(&mut self, epoch: Epoch) -> bool {
        if epoch != self.epoch || self.is_paused() {
            debug!(
                "timer: stale fire epoch={} current={} playback={:?}",
                epoch, self.epoch, self.playback
            );
            return false;
        }
        self.armed = None;

        if self.frame < self.last_frame() {
            self.seek_frame(self.frame + 1);
        }
        self.render_current();

        if self.frame >= self.last_frame() {
            self.playback = Playback::Paused;
            self.disarm();
            debug!("nav: end of text frame={}", self.frame);
        } else {
            let delay = adjusted_interval_ms(
                self.base_interval_ms,
                self.frame_visible_len,
                self.index.mean_words_per_frame(),
                self.index.mean_word_length(),
            );
            self.arm(delay);
        }
        self.present();
        true
    }

    /// Flip between running and paused. Ignored on the last frame.
    pub fn toggle_pause(&mut self) -> bool {
        if self.frame >= self.last_frame() {
            return false;
        }

        match self.playback {
            Playback::Running => {
                self.playback = Playback::Paused;
                self.disarm();
            }
            Playback::Paused => {
                self.playback = Playback::Running;
                self.arm(self.base_interval_ms);
            }
        }
        debug!("nav: playback={:?} frame={}", self.playback, self.frame);
        self.present();
        true
    }

    /// Step the reading speed. The pending timer keeps its delay; the new
    /// base interval applies from the next advance.
    pub fn change_rate(&mut self, increase: bool) -> bool {
        if !self.config.step_wpm(increase) {
            return false;
        }
        self.base_interval_ms =
            base_interval_ms(self.config.wpm, self.index.mean_words_per_frame());
        debug!(
            "rate: wpm={} base_interval_ms={}",
            self.config.wpm, self.base_interval_ms
        );
        self.present();
        true
    }

    /// Cancel any pending timer and arm a fresh one for a new epoch.
    fn arm(&mut self, delay_ms: u32) {
        self.disarm();
        self.interval_ms = delay_ms;
        self.armed = Some(self.timer.schedule_once(delay_ms, self.epoch));
    }

    /// Cancel any pending timer. The epoch moves on so a fire that is
    /// already in flight gets discarded.
    fn disarm(&mut self) {
        if let Some(handle) = self.armed.take() {
            self.timer.cancel(handle);
        }
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Re-arm after navigation so the new frame gets a full interval.
    fn rearm_after_navigation(&mut self) {
        if self.is_paused() {
            return;
        }
        if self.frame >= self.last_frame() {
            self.playback = Playback::Paused;
            self.disarm();
        } else {
            self.arm(self.base_interval_ms);
        }
    }
}
