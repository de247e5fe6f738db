//! Typewriter effect: reveal a target string one character per step.

use std::time::{Duration, Instant};

use super::Tick;
use crate::schedule::Timer;

/// Total time to type the whole target, whatever its length.
pub const DEFAULT_TYPING: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct TypingAnimator {
    target: String,
    /// Byte length of the revealed prefix; always on a char boundary.
    shown: usize,
    step: Duration,
    timer: Timer,
    typing: bool,
}

impl TypingAnimator {
    /// Spread `duration` evenly across the characters of `target`.
    pub fn new(target: impl Into<String>, duration: Duration) -> Self {
        let target = target.into();
        let chars = target.chars().count().max(1);
        let step = duration / u32::try_from(chars).unwrap_or(u32::MAX);
        Self {
            target,
            shown: 0,
            step,
            timer: Timer::new(),
            typing: true,
        }
    }

    /// An animator that shows the full target and never types.
    pub fn disabled(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            shown: target.len(),
            target,
            step: Duration::ZERO,
            timer: Timer::new(),
            typing: false,
        }
    }

    /// Schedule the first step.
    pub fn start(&mut self, now: Instant) {
        if self.typing {
            self.timer.arm(now, self.step);
        }
    }

    pub fn text(&self) -> &str {
        &self.target[..self.shown]
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Advance every step whose deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Tick {
        if !self.typing {
            return Tick::Idle;
        }
        let mut advanced = false;
        while let Some(deadline) = self.timer.deadline() {
            if !self.timer.fire(now) {
                break;
            }
            advanced = true;
            if let Some(c) = self.target[self.shown..].chars().next() {
                self.shown += c.len_utf8();
            }
            if self.shown >= self.target.len() {
                self.typing = false;
                tracing::debug!(chars = self.target.chars().count(), "typing finished");
                return Tick::Ready;
            }
            self.timer.arm(deadline, self.step);
        }
        if advanced || self.timer.is_armed() {
            Tick::Running
        } else {
            Tick::Idle
        }
    }

    /// Stop typing where it is. Nothing fires afterwards.
    pub fn cancel(&mut self) {
        self.timer.cancel();
        self.typing = false;
    }
}
