use embassy_time::{Duration, Instant};
use steady_core::timer::{Epoch, TimerService};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Armed {
    pub(super) at: Instant,
    pub(super) epoch: Epoch,
}

/// Single outstanding deadline awaited by the control loop.
#[derive(Debug, Default)]
pub(super) struct DeadlineTimer {
    armed: Option<Armed>,
}

impl DeadlineTimer {
    pub(super) const fn new() -> Self {
        Self { armed: None }
    }

    pub(super) fn armed(&self) -> Option<Armed> {
        self.armed
    }

    /// Clear the deadline once it has elapsed.
    pub(super) fn fired(&mut self, epoch: Epoch) {
        if self.armed.is_some_and(|armed| armed.epoch == epoch) {
            self.armed = None;
        }
    }
}

impl TimerService for DeadlineTimer {
    type Handle = Epoch;

    fn schedule_once(&mut self, delay_ms: u32, epoch: Epoch) -> Epoch {
        self.armed = Some(Armed {
            at: Instant::now() + Duration::from_millis(u64::from(delay_ms)),
            epoch,
        });
        epoch
    }

    fn cancel(&mut self, handle: Epoch) {
        self.fired(handle);
    }
}
