//! One-shot timer seam used to pace frame advances.

/// Monotonic stamp identifying the session state a timer was armed for.
pub type Epoch = u64;

/// Fires one event after a delay; the host delivers it back to the session
/// together with the epoch it was scheduled with.
pub trait TimerService {
    type Handle;

    fn schedule_once(&mut self, delay_ms: u32, epoch: Epoch) -> Self::Handle;

    /// Cancel a timer that has not fired yet. Cancelling a fired or
    /// unknown handle does nothing.
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimerRequest {
    pub delay_ms: u32,
    pub epoch: Epoch,
}

/// Timer that only records the pending request; the owner decides when
/// it fires. Used by tests and by hosts that drive time themselves.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ManualTimer {
    pending: Option<TimerRequest>,
    scheduled: u32,
    cancelled: u32,
}

impl ManualTimer {
    pub const fn new() -> Self {
        Self {
            pending: None,
            scheduled: 0,
            cancelled: 0,
        }
    }

    pub fn pending(&self) -> Option<TimerRequest> {
        self.pending
    }

    /// Take the pending request as if it fired.
    pub fn fire(&mut self) -> Option<TimerRequest> {
        self.pending.take()
    }

    pub fn scheduled_count(&self) -> u32 {
        self.scheduled
    }

    pub fn cancelled_count(&self) -> u32 {
        self.cancelled
    }
}

impl TimerService for ManualTimer {
    type Handle = Epoch;

    fn schedule_once(&mut self, delay_ms: u32, epoch: Epoch) -> Epoch {
        self.scheduled = self.scheduled.saturating_add(1);
        self.pending = Some(TimerRequest { delay_ms, epoch });
        epoch
    }

    fn cancel(&mut self, handle: Epoch) {
        if self.pending.is_some_and(|pending| pending.epoch == handle) {
            self.pending = None;
            self.cancelled = self.cancelled.saturating_add(1);
        }
    }
}
