//! Text animations — scrambled reveal and typewriter.
//!
//! Animators never own a clock or a thread: the event loop hands each one the
//! current [`Instant`](std::time::Instant) and reads back a [`Tick`].

pub mod reveal;
pub mod typing;

pub use reveal::{OverlayLine, Phase, RevealAnimator, DEFAULT_REVEAL};
pub use typing::{TypingAnimator, DEFAULT_TYPING};

use rand::Rng;

/// Characters a hidden position may show while scrambled.
pub const SCRAMBLE_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789{}[]()<>+-=*/&%$#@!~?";

/// Result of advancing an animator by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not running; nothing changed.
    Idle,
    /// Running; output changed or may change on the next frame.
    Running,
    /// Finished on this frame. Returned exactly once per run.
    Ready,
}

/// One random member of [`SCRAMBLE_CHARS`].
pub fn scramble_char<R: Rng + ?Sized>(rng: &mut R) -> char {
    let bytes = SCRAMBLE_CHARS.as_bytes();
    bytes[rng.gen_range(0..bytes.len())] as char
}

/// Scramble `line`, keeping the first `revealed` characters and every space.
pub fn scramble_line<R: Rng + ?Sized>(line: &str, revealed: usize, rng: &mut R) -> String {
    line.chars()
        .enumerate()
        .map(|(i, c)| {
            if c == ' ' || i < revealed {
                c
            } else {
                scramble_char(rng)
            }
        })
        .collect()
}

/// Number of characters shown for a line of `len` chars at `progress` (0..=1).
pub fn reveal_count(len: usize, progress: f64) -> usize {
    let p = progress.clamp(0.0, 1.0);
    ((len as f64 * p).floor() as usize).min(len)
}
