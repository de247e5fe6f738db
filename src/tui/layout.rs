//! Layout — panel focus management.

/// Which panel currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Editor,
    Palette,
}

impl FocusPanel {
    /// Cycle to the next panel.
    pub fn next(self) -> Self {
        match self {
            Self::Editor => Self::Palette,
            Self::Palette => Self::Editor,
        }
    }
}
