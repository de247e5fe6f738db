//! Deadline scheduling: timers and debouncing, all driven by the owner's
//! event loop passing in the current [`Instant`](std::time::Instant).

pub mod debounce;
pub mod retokenize;
pub mod timer;

pub use debounce::{Debouncer, DEFAULT_IDLE};
pub use retokenize::Retokenizer;
pub use timer::Timer;
