use super::*;
use crate::{
    content::{Granularity, Tokens},
    input::{BudgetKind, InputEvent, ScriptedInput},
    settings::{Budgets, DISPLAY_WIDTH, ReaderConfig},
    timer::ManualTimer,
};

#[derive(Default)]
struct Recorder {
    statuses: Vec<StatusView>,
    frames: Vec<Vec<String>>,
}

impl FrameSink for Recorder {
    fn present(&mut self, view: FrameView<'_>) {
        self.statuses.push(view.status);
        self.frames
            .push(view.lines.iter().map(|line| line.text().to_string()).collect());
    }
}

type TestSession<'a> = ReaderSession<ScriptedInput<'a>, Recorder, ManualTimer>;

fn words(count: usize) -> Tokens {
    Tokens::new((0..count).map(|i| format!("w{}", i % 10)).collect()).unwrap()
}

fn session_with<'a>(tokens: Tokens, budgets: Budgets, events: &'a [InputEvent]) -> TestSession<'a> {
    let config = ReaderConfig {
        budgets,
        ..ReaderConfig::default()
    };
    ReaderSession::new(
        tokens,
        config,
        DISPLAY_WIDTH,
        ScriptedInput::new(events),
        Recorder::default(),
        ManualTimer::new(),
    )
    .unwrap()
}

fn pairs(count: usize) -> TestSession<'static> {
    session_with(words(count), Budgets::default(), &[])
}

fn fire(session: &mut TestSession<'_>) -> bool {
    let request = session.timer_mut().fire().expect("timer armed");
    session.on_timer(request.epoch)
}

#[test]
fn start_shows_first_frame_and_arms_base_interval() {
    let mut session = pairs(100);
    session.start();

    assert_eq!(session.index().mean_words_per_frame(), 2.0);
    assert_eq!(session.base_interval_ms(), 480);
    assert_eq!(session.frame_index(), 0);
    assert_eq!(session.playback(), Playback::Running);
    assert_eq!(session.sink().frames.last().unwrap(), &["w0 w1"]);

    let pending = session.timer().pending().unwrap();
    assert_eq!(pending.delay_ms, 480);
    assert_eq!(pending.epoch, session.epoch());
}

#[test]
fn timer_advances_and_rearms_with_adjusted_interval() {
    let mut session = pairs(100);
    session.start();

    assert!(fire(&mut session));
    assert_eq!(session.frame_index(), 1);
    assert_eq!(session.token_index(), 2);
    assert_eq!(session.sink().frames.last().unwrap(), &["w2 w3"]);
    assert_eq!(session.timer().pending().unwrap().delay_ms, 480);
    assert_eq!(session.sink().statuses.last().unwrap().interval_ms, 480);
}

#[test]
fn dense_frame_gets_longer_interval() {
    let tokens = Tokens::from_text("a b cccccc dddddd e f", Granularity::Whitespace).unwrap();
    let mut session = session_with(tokens, Budgets::default(), &[]);
    session.start();
    // 3 frames, 16 visible chars over 6 tokens
    assert_eq!(session.base_interval_ms(), 480);

    assert!(fire(&mut session));
    // 12 / 2 - 16 / 6 = 10 / 3 units of 15%
    assert_eq!(session.timer().pending().unwrap().delay_ms, 720);
}

#[test]
fn stale_timer_is_ignored() {
    let mut session = pairs(100);
    session.start();
    let stale = session.timer().pending().unwrap().epoch;

    assert!(session.toggle_pause());
    assert!(session.timer().pending().is_none());
    assert_eq!(session.timer().cancelled_count(), 1);
    assert!(!session.on_timer(stale));

    assert!(session.toggle_pause());
    assert!(!session.on_timer(stale));
    assert_eq!(session.frame_index(), 0);

    assert!(fire(&mut session));
    assert_eq!(session.frame_index(), 1);
    assert_eq!(session.timer().cancelled_count(), 1);

    // navigating while running replaces the pending timer
    let replaced = session.timer().pending().unwrap().epoch;
    session.step(1);
    assert_eq!(session.timer().cancelled_count(), 2);
    assert!(!session.on_timer(replaced));
    assert_eq!(session.frame_index(), 2);
    assert_eq!(session.timer().pending().unwrap().epoch, session.epoch());
}

#[test]
fn timer_while_paused_does_nothing() {
    let mut session = pairs(100);
    session.start();
    let epoch = session.epoch();
    session.toggle_pause();
    assert!(!session.on_timer(epoch));
    assert!(!session.on_timer(session.epoch()));
    assert_eq!(session.frame_index(), 0);
}

#[test]
fn reaching_last_frame_pauses() {
    let mut session = pairs(5);
    session.start();
    assert_eq!(session.index().offsets(), &[0, 2, 4]);

    assert!(fire(&mut session));
    assert_eq!(session.playback(), Playback::Running);
    assert!(fire(&mut session));
    assert_eq!(session.frame_index(), 2);
    assert_eq!(session.playback(), Playback::Paused);
    assert!(session.timer().pending().is_none());
    assert_eq!(session.sink().frames.last().unwrap(), &["w4"]);

    assert!(!session.toggle_pause());
    assert!(session.is_paused());

    session.step(-1);
    assert!(session.toggle_pause());
    assert_eq!(session.playback(), Playback::Running);
}

#[test]
fn single_frame_text_starts_paused() {
    let mut session = pairs(2);
    session.start();
    assert!(session.is_paused());
    assert!(session.timer().pending().is_none());
    assert_eq!(session.timer().scheduled_count(), 0);
}

#[test]
fn steps_clamp_to_both_ends() {
    let mut session = pairs(100);
    session.start();

    session.step(-5);
    assert_eq!(session.frame_index(), 0);

    session.step(1);
    assert_eq!(session.frame_index(), 1);
    assert_eq!(session.timer().pending().unwrap().epoch, session.epoch());
    assert_eq!(session.playback(), Playback::Running);

    session.step(1_000);
    assert_eq!(session.frame_index(), 49);
    assert_eq!(session.token_index(), 98);
    assert!(session.is_paused());
    session.step(1_000);
    assert_eq!(session.frame_index(), 49);

    session.step(-1_000);
    assert_eq!(session.frame_index(), 0);
    assert_eq!(session.token_index(), 0);
    assert!(session.is_paused());
    session.step(-1_000);
    assert_eq!(session.frame_index(), 0);
}

#[test]
fn goto_accumulates_and_saturates() {
    let mut session = pairs(100);
    session.start();

    session.goto_digit(1);
    session.goto_digit(2);
    assert_eq!(session.pending_goto(), 12);
    assert_eq!(session.sink().statuses.last().unwrap().pending_goto, 12);
    session.goto_commit();
    assert_eq!(session.frame_index(), 12);
    assert_eq!(session.token_index(), 24);
    assert_eq!(session.pending_goto(), 0);

    session.goto_digit(7);
    session.goto_digit(7);
    assert_eq!(session.pending_goto(), 49);
    session.goto_digit(9);
    assert_eq!(session.pending_goto(), 49);
    session.goto_commit();
    assert_eq!(session.frame_index(), 49);

    session.goto_digit(3);
    session.goto_clear();
    assert_eq!(session.pending_goto(), 0);
    assert_eq!(session.frame_index(), 49);
}

#[test]
fn budget_change_resnaps_to_previous_position() {
    let events = [InputEvent::ChangeBudget {
        kind: BudgetKind::Words,
        increase: true,
    }];
    let mut session = session_with(words(100), Budgets::default(), &events);
    session.start();
    session.step(25);
    assert_eq!(session.token_index(), 50);

    assert_eq!(session.process_inputs(), InputResult::Continue);
    assert_eq!(session.config().budgets.words, 3);
    assert_eq!(session.index().frame_count(), 34);
    assert_eq!(session.frame_index(), 16);
    assert_eq!(session.token_index(), 48);
    assert_eq!(session.base_interval_ms(), 706);
    assert_eq!(session.sink().frames.last().unwrap(), &["w8 w9 w0"]);
}

#[test]
fn budget_change_at_bound_is_ignored() {
    let mut session = pairs(100);
    session.start();
    assert!(!session.change_budget(BudgetKind::Lines, false));
    assert!(session.change_budget(BudgetKind::Lines, true));
    assert_eq!(session.sink().frames.last().unwrap(), &["w0 w1", "w2 w3"]);
    assert_eq!(session.index().frame_count(), 25);
}

#[test]
fn rate_change_keeps_pending_timer() {
    let mut session = pairs(100);
    session.start();
    let scheduled = session.timer().scheduled_count();
    let pending = session.timer().pending();

    assert!(session.change_rate(true));
    assert_eq!(session.config().wpm, 300);
    assert_eq!(session.base_interval_ms(), 400);
    assert_eq!(session.timer().scheduled_count(), scheduled);
    assert_eq!(session.timer().pending(), pending);

    assert!(fire(&mut session));
    assert_eq!(session.timer().pending().unwrap().delay_ms, 400);
}

#[test]
fn multi_line_frames_highlight_leading_line_only() {
    let tokens =
        Tokens::from_text("alpha beta gamma delta epsilon zeta", Granularity::Whitespace).unwrap();
    let budgets = Budgets {
        words: 2,
        lines: 3,
        width: 30,
    };
    let mut session = session_with(tokens, budgets, &[]);
    session.start();

    let lines = session.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].is_highlighted());
    assert!(!lines[1].is_highlighted());
    assert!(!lines[2].is_highlighted());
    assert_eq!(lines[2].text(), "epsilon zeta");
}

#[test]
fn scripted_quit_stops_processing() {
    let events = [
        InputEvent::Step(3),
        InputEvent::Quit,
        InputEvent::Step(3),
    ];
    let mut session = session_with(words(100), Budgets::default(), &events);
    session.start();

    assert_eq!(session.process_inputs(), InputResult::Quit);
    assert_eq!(session.frame_index(), 3);
    assert!(session.timer().pending().is_none());
}

#[test]
fn oversized_config_is_clamped_and_reported() {
    let budgets = Budgets {
        words: 9,
        lines: 1,
        width: 500,
    };
    let session = session_with(words(10), budgets, &[]);
    assert_eq!(session.config().budgets.words, 4);
    assert_eq!(session.config().budgets.width, 78);
    assert_eq!(session.config_warnings().len(), 2);
}

#[test]
fn start_at_resumes_on_frame_boundary() {
    let mut session = pairs(100);
    session.start_at(51);
    assert_eq!(session.frame_index(), 25);
    assert_eq!(session.token_index(), 50);
}

#[test]
fn empty_token_list_is_rejected() {
    assert_eq!(Tokens::new(Vec::new()), Err(SessionError::NoContent));
    assert_eq!(SessionError::NoContent.to_string(), "no content to read");
}
