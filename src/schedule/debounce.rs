//! Trailing-edge debouncer: the latest value is released once no new value
//! has arrived for the idle window.

use std::time::{Duration, Instant};

use super::Timer;

/// Idle window used by the editor when nothing is configured.
pub const DEFAULT_IDLE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    idle: Duration,
    pending: Option<T>,
    timer: Timer,
}

impl<T> Debouncer<T> {
    pub fn new(idle: Duration) -> Self {
        Self {
            idle,
            pending: None,
            timer: Timer::new(),
        }
    }

    pub fn idle(&self) -> Duration {
        self.idle
    }

    /// Record a change. Replaces any pending value and restarts the window.
    pub fn on_change(&mut self, value: T, now: Instant) {
        self.pending = Some(value);
        self.timer.arm(now, self.idle);
    }

    /// Release the pending value if the window since the last change elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.timer.fire(now) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Release the pending value immediately, ignoring the window.
    pub fn flush(&mut self) -> Option<T> {
        self.timer.cancel();
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE)
    }
}
