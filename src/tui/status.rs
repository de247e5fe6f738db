//! Status bar — theme, typing state, token count and the last notice.

/// One-line notice shown at the right of the status bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Idle,
    Info(String),
    Error(String),
}

/// Status information for the TUI status bar.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub theme_name: String,
    pub is_typing: bool,
    /// An edit is waiting for the debounce window.
    pub is_pending: bool,
    pub token_count: usize,
    /// Colored rendering reproduces the buffer exactly.
    pub matched: bool,
    pub inspecting: bool,
    pub notice: Notice,
}

impl StatusInfo {
    /// Label for the inspect indicator.
    pub fn match_display(&self) -> &str {
        match (self.inspecting, self.matched) {
            (true, _) => "MATCHING",
            (false, true) => "MATCHED",
            (false, false) => "MISMATCH",
        }
    }

    pub fn activity_display(&self) -> &str {
        if self.is_typing {
            "TYPING"
        } else if self.is_pending {
            "EDIT"
        } else {
            "READY"
        }
    }
}

impl Default for StatusInfo {
    fn default() -> Self {
        Self {
            theme_name: String::new(),
            is_typing: false,
            is_pending: false,
            token_count: 0,
            matched: true,
            inspecting: false,
            notice: Notice::Idle,
        }
    }
}
