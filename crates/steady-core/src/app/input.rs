impl<IN, SK, TM> ReaderSession<IN, SK, TM>
where
    IN: InputProvider,
    SK: FrameSink,
    TM: TimerService,
{
    /// Drain the input provider, applying every event in order.
    pub fn process_inputs(&mut self) -> InputResult {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => {
                    if self.apply_input_event(event) == InputResult::Quit {
                        return InputResult::Quit;
                    }
                }
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider error; skipping remaining events");
                    break;
                }
            }
        }

        InputResult::Continue
    }

    pub fn apply_input_event(&mut self, event: InputEvent) -> InputResult {
        match event {
            InputEvent::TogglePause => {
                self.toggle_pause();
            }
            InputEvent::Step(frames) => self.step(frames),
            InputEvent::GotoDigit(digit) => self.goto_digit(digit),
            InputEvent::GotoCommit => self.goto_commit(),
            InputEvent::GotoClear => self.goto_clear(),
            InputEvent::ChangeBudget { kind, increase } => {
                self.change_budget(kind, increase);
            }
            InputEvent::ChangeRate { increase } => {
                self.change_rate(increase);
            }
            InputEvent::Quit => {
                self.disarm();
                return InputResult::Quit;
            }
        }

        InputResult::Continue
    }
}
