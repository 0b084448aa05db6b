//! Input abstraction layer.

mod mock;

pub use mock::ScriptedInput;

/// Which budget a [`InputEvent::ChangeBudget`] adjusts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BudgetKind {
    Words,
    Lines,
    Width,
}

/// Logical actions consumed by the reader session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    TogglePause,
    /// Move by a signed number of frames.
    Step(i32),
    GotoDigit(u8),
    GotoCommit,
    GotoClear,
    ChangeBudget { kind: BudgetKind, increase: bool },
    ChangeRate { increase: bool },
    Quit,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
