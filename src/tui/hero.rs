//! Hero banner — a short sample decoded by the reveal animator shortly
//! after startup.

use std::time::{Duration, Instant};

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::animate::{RevealAnimator, Tick};
use crate::highlight::spans::token_style;
use crate::schedule::Timer;
use crate::theme::Theme;

pub const HERO_LINES: [&str; 3] = [
    "/* super tiny syntax highlighter */",
    "import { highlight } from 'sugar-high'",
    "const code = highlight('const text = 1')",
];

/// Delay between showing the scrambled banner and starting to decode it.
pub const GO_LIVE_DELAY: Duration = Duration::from_millis(100);

const SCRAMBLED: Color = Color::Rgb(154, 154, 154);

#[derive(Debug)]
pub struct Hero {
    reveal: RevealAnimator,
    go_live: Timer,
}

impl Hero {
    pub fn new(duration: Duration, seed: u64) -> Self {
        Self {
            reveal: RevealAnimator::new(HERO_LINES, duration, seed),
            go_live: Timer::new(),
        }
    }

    /// Show the scrambled banner and schedule decoding.
    pub fn start(&mut self, now: Instant) {
        self.reveal.activate(false, now);
        self.go_live.arm(now, GO_LIVE_DELAY);
    }

    pub fn tick(&mut self, now: Instant) -> Tick {
        if self.go_live.fire(now) {
            self.reveal.activate(true, now);
        }
        self.reveal.frame(now)
    }

    pub fn stop(&mut self) {
        self.go_live.cancel();
        self.reveal.deactivate();
    }

    pub fn reveal(&self) -> &RevealAnimator {
        &self.reveal
    }

    /// Gray animator text until settled, then the colored source.
    pub fn lines(&self, theme: &Theme) -> Vec<Line<'_>> {
        self.reveal
            .overlay_lines()
            .into_iter()
            .map(|line| {
                if line.colored {
                    Line::from(
                        line.tokens
                            .iter()
                            .map(|t| Span::styled(t.lexeme.as_str(), token_style(t, theme)))
                            .collect::<Vec<_>>(),
                    )
                } else {
                    Line::from(Span::styled(line.display, Style::default().fg(SCRAMBLED)))
                }
            })
            .collect()
    }
}
