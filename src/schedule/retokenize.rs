//! Re-tokenize the editor buffer once typing pauses.

use std::time::{Duration, Instant};

use super::Debouncer;
use crate::lexer::{tokenize, Token};

/// Owns the current token stream for a buffer and refreshes it through a
/// [`Debouncer`] so bursts of edits cost one tokenize.
#[derive(Debug)]
pub struct Retokenizer {
    debouncer: Debouncer<String>,
    text: String,
    tokens: Vec<Token>,
    generation: u64,
}

impl Retokenizer {
    /// Tokenize `text` immediately and debounce later changes by `idle`.
    pub fn new(text: &str, idle: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(idle),
            text: text.to_string(),
            tokens: tokenize(text),
            generation: 0,
        }
    }

    /// Tokens for the last text that was tokenized.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The text `tokens` was produced from.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of re-tokenizations performed since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn on_buffer_change(&mut self, text: impl Into<String>, now: Instant) {
        self.debouncer.on_change(text.into(), now);
    }

    /// Re-tokenize if the idle window elapsed. Returns whether tokens changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(text) => {
                self.apply(text);
                true
            }
            None => false,
        }
    }

    /// Tokenize any pending text now.
    pub fn flush(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(text) => {
                self.apply(text);
                true
            }
            None => false,
        }
    }

    /// Replace the buffer outright, dropping any pending change.
    pub fn reset(&mut self, text: &str) {
        self.debouncer.cancel();
        self.apply(text.to_string());
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }

    fn apply(&mut self, text: String) {
        self.tokens = tokenize(&text);
        self.text = text;
        self.generation += 1;
        tracing::debug!(
            tokens = self.tokens.len(),
            bytes = self.text.len(),
            generation = self.generation,
            "re-tokenized buffer"
        );
    }
}
