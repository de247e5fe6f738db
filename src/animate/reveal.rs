//! Scrambled reveal: lines start as random characters and decode
//! left-to-right over a fixed duration, then the colored rendering takes over.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{reveal_count, scramble_line, Tick};
use crate::lexer::{tokenize, Token};

pub const DEFAULT_REVEAL: Duration = Duration::from_millis(700);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing displayed.
    Idle,
    /// Fully scrambled, waiting to go live.
    Obscuring,
    /// Decoding in progress.
    Revealing,
    /// Decoded; colored output visible.
    Settled,
}

/// What the presentation layer stacks for one line.
#[derive(Debug, Clone, Copy)]
pub struct OverlayLine<'a> {
    /// Source text, reserves the layout width.
    pub original: &'a str,
    /// Current animator text (scrambled, partially or fully decoded).
    pub display: &'a str,
    /// Tokens of the source line for the colored layer.
    pub tokens: &'a [Token],
    /// Whether the colored layer should be shown.
    pub colored: bool,
}

#[derive(Debug)]
pub struct RevealAnimator {
    source: Vec<String>,
    tokens: Vec<Vec<Token>>,
    display: Vec<String>,
    phase: Phase,
    started: Option<Instant>,
    duration: Duration,
    progress: f64,
    decoded: bool,
    rng: ChaCha8Rng,
}

impl RevealAnimator {
    /// Build an idle animator. Seeding is the only randomness setup; no
    /// characters are drawn until the first activation.
    pub fn new<I, S>(lines: I, duration: Duration, seed: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let source: Vec<String> = lines.into_iter().map(Into::into).collect();
        let tokens = source.iter().map(|l| tokenize(l)).collect();
        Self {
            source,
            tokens,
            display: Vec::new(),
            phase: Phase::Idle,
            started: None,
            duration,
            progress: 0.0,
            decoded: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn source(&self) -> &[String] {
        &self.source
    }

    /// Current display text per line; empty while idle.
    pub fn display(&self) -> &[String] {
        &self.display
    }

    /// Decode progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }

    /// Replace the source lines. A settled animator will decode again on the
    /// next activation.
    pub fn set_source<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let source: Vec<String> = lines.into_iter().map(Into::into).collect();
        if source == self.source {
            return;
        }
        self.tokens = source.iter().map(|l| tokenize(l)).collect();
        self.source = source;
        self.decoded = false;
        if self.phase == Phase::Obscuring {
            self.obscure();
        }
    }

    /// Show the block. `live = false` scrambles it and waits; `live = true`
    /// starts decoding at `now`.
    pub fn activate(&mut self, live: bool, now: Instant) {
        if self.phase == Phase::Settled {
            if self.decoded {
                return;
            }
            self.phase = Phase::Idle;
        }
        if self.phase == Phase::Idle {
            self.obscure();
        }
        if live && self.phase == Phase::Obscuring {
            self.phase = Phase::Revealing;
            self.started = Some(now);
            self.progress = 0.0;
            tracing::debug!(lines = self.source.len(), "reveal started");
        }
    }

    /// Hide the block and forget all progress.
    pub fn deactivate(&mut self) {
        self.phase = Phase::Idle;
        self.display.clear();
        self.started = None;
        self.progress = 0.0;
        self.decoded = false;
    }

    /// Advance one frame. Returns [`Tick::Ready`] on the frame that settles.
    pub fn frame(&mut self, now: Instant) -> Tick {
        if self.phase != Phase::Revealing {
            return Tick::Idle;
        }
        let Some(started) = self.started else {
            return Tick::Idle;
        };
        let elapsed = now.saturating_duration_since(started);
        self.progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };

        let progress = self.progress;
        let rng = &mut self.rng;
        self.display = self
            .source
            .iter()
            .map(|line| {
                let shown = reveal_count(line.chars().count(), progress);
                scramble_line(line, shown, rng)
            })
            .collect();

        if progress >= 1.0 {
            self.phase = Phase::Settled;
            self.decoded = true;
            self.started = None;
            tracing::debug!("reveal settled");
            Tick::Ready
        } else {
            Tick::Running
        }
    }

    /// Per-line layers for rendering. Lines without display text yet fall
    /// back to the source.
    pub fn overlay_lines(&self) -> Vec<OverlayLine<'_>> {
        let colored = self.phase == Phase::Settled;
        self.source
            .iter()
            .enumerate()
            .map(|(i, original)| OverlayLine {
                original,
                display: self.display.get(i).map_or(original.as_str(), String::as_str),
                tokens: self.tokens.get(i).map_or(&[][..], Vec::as_slice),
                colored,
            })
            .collect()
    }

    fn obscure(&mut self) {
        let rng = &mut self.rng;
        self.display = self
            .source
            .iter()
            .map(|line| scramble_line(line, 0, rng))
            .collect();
        self.phase = Phase::Obscuring;
        self.progress = 0.0;
    }
}
