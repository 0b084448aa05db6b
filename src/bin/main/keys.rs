use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use log::warn;
use steady_core::input::{BudgetKind, InputEvent, InputProvider};

pub(super) type KeyQueue<const N: usize> = Channel<CriticalSectionRawMutex, InputEvent, N>;

pub(super) const HELP_TEXT: &str = "\
+/-: speed  ;/,: more/fewer lines  W/w: more/fewer words  }/{: wider/narrower
</>, (/), [/]: 1, 50, 1000 frames back/forward
0-9: frame number  g: goto frame  c: clear goto
p: pause  q: quit";

/// Drains events queued by the keyboard thread.
pub(super) struct QueuedInput {
    queue: &'static KeyQueue<{ super::KEY_QUEUE_DEPTH }>,
}

impl QueuedInput {
    pub(super) const fn new(queue: &'static KeyQueue<{ super::KEY_QUEUE_DEPTH }>) -> Self {
        Self { queue }
    }
}

impl InputProvider for QueuedInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.queue.try_receive().ok())
    }
}

/// Blocking loop run on its own thread: terminal keys to reader events.
pub(super) fn forward_keys(queue: &'static KeyQueue<{ super::KEY_QUEUE_DEPTH }>) {
    loop {
        let key = match event::read() {
            Ok(Event::Key(key)) => key,
            Ok(_) => continue,
            Err(err) => {
                warn!("keys: terminal read failed: {err}");
                let _ = queue.try_send(InputEvent::Quit);
                return;
            }
        };

        let Some(event) = map_key(key) else {
            continue;
        };
        if queue.try_send(event).is_err() {
            warn!("keys: queue full; dropping {:?}", event);
        }
        if event == InputEvent::Quit {
            return;
        }
    }
}

pub(super) fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
            .then_some(InputEvent::Quit);
    }

    let budget = |kind, increase| Some(InputEvent::ChangeBudget { kind, increase });
    match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Char('+') => Some(InputEvent::ChangeRate { increase: true }),
        KeyCode::Char('-') => Some(InputEvent::ChangeRate { increase: false }),
        KeyCode::Char(';') => budget(BudgetKind::Lines, true),
        KeyCode::Char(',') => budget(BudgetKind::Lines, false),
        KeyCode::Char('W') => budget(BudgetKind::Words, true),
        KeyCode::Char('w') => budget(BudgetKind::Words, false),
        KeyCode::Char('}') => budget(BudgetKind::Width, true),
        KeyCode::Char('{') => budget(BudgetKind::Width, false),
        KeyCode::Char('g') | KeyCode::Home => Some(InputEvent::GotoCommit),
        KeyCode::Char('c') => Some(InputEvent::GotoClear),
        KeyCode::Char('p' | 'P' | ' ') => Some(InputEvent::TogglePause),
        KeyCode::Char('>') | KeyCode::Enter | KeyCode::Right => Some(InputEvent::Step(1)),
        KeyCode::Char('<') | KeyCode::Backspace | KeyCode::Left => Some(InputEvent::Step(-1)),
        KeyCode::Char(')') | KeyCode::PageDown => Some(InputEvent::Step(50)),
        KeyCode::Char('(') | KeyCode::PageUp => Some(InputEvent::Step(-50)),
        KeyCode::Char(']') => Some(InputEvent::Step(1_000)),
        KeyCode::Char('[') => Some(InputEvent::Step(-1_000)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .map(|digit| InputEvent::GotoDigit(digit as u8)),
        _ => None,
    }
}
