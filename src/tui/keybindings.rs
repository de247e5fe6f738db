//! Key bindings — maps key events to application actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::layout::FocusPanel;

/// Application-level actions triggered by key events.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    /// Switch to the next theme, dropping color overrides.
    CycleTheme,
    /// Re-tokenize the buffer without waiting for the debounce window.
    Retokenize,
    /// Toggle between colored and raw editor rendering.
    ToggleInspect,
    CycleFocus,
    ToggleHelp,
    /// Close overlays and return focus to the editor.
    Escape,
    EditorInsert(char),
    EditorBackspace,
    EditorDelete,
    EditorNewline,
    EditorLeft,
    EditorRight,
    EditorUp,
    EditorDown,
    EditorHome,
    EditorEnd,
    PaletteUp,
    PaletteDown,
    /// Start editing the selected class color.
    PaletteEdit,
    PaletteInsert(char),
    PaletteBackspace,
    /// Apply the typed color.
    PaletteCommit,
    PaletteCancel,
    /// Restore the selected class to the current theme's color.
    PaletteReset,
}

/// Modal state that decides where a key goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    pub focus: FocusPanel,
    pub help_visible: bool,
    pub palette_editing: bool,
    /// The typing animation owns the buffer.
    pub typing: bool,
}

impl KeyContext {
    pub fn editor() -> Self {
        Self {
            focus: FocusPanel::Editor,
            help_visible: false,
            palette_editing: false,
            typing: false,
        }
    }

    pub fn palette() -> Self {
        Self {
            focus: FocusPanel::Palette,
            ..Self::editor()
        }
    }
}

/// Map a key event to an action for the given modal state.
pub fn map_key(key: KeyEvent, ctx: KeyContext) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global bindings work in every mode
    if ctrl {
        return match key.code {
            KeyCode::Char('q' | 'c') => Some(Action::Quit),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            KeyCode::Char('r') => Some(Action::Retokenize),
            KeyCode::Char('e') => Some(Action::ToggleInspect),
            _ => None,
        };
    }

    if ctx.help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => Some(Action::ToggleHelp),
            _ => None,
        };
    }

    // Color input intercepts everything else
    if ctx.palette_editing {
        return match key.code {
            KeyCode::Enter => Some(Action::PaletteCommit),
            KeyCode::Esc => Some(Action::PaletteCancel),
            KeyCode::Backspace => Some(Action::PaletteBackspace),
            KeyCode::Char(c) => Some(Action::PaletteInsert(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => return Some(Action::CycleFocus),
        KeyCode::F(1) => return Some(Action::ToggleHelp),
        KeyCode::Esc => return Some(Action::Escape),
        _ => {}
    }

    match ctx.focus {
        FocusPanel::Editor if ctx.typing => None,
        FocusPanel::Editor => match key.code {
            KeyCode::Char(c) => Some(Action::EditorInsert(c)),
            KeyCode::Backspace => Some(Action::EditorBackspace),
            KeyCode::Delete => Some(Action::EditorDelete),
            KeyCode::Enter => Some(Action::EditorNewline),
            KeyCode::Left => Some(Action::EditorLeft),
            KeyCode::Right => Some(Action::EditorRight),
            KeyCode::Up => Some(Action::EditorUp),
            KeyCode::Down => Some(Action::EditorDown),
            KeyCode::Home => Some(Action::EditorHome),
            KeyCode::End => Some(Action::EditorEnd),
            _ => None,
        },
        FocusPanel::Palette => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::PaletteUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::PaletteDown),
            KeyCode::Enter => Some(Action::PaletteEdit),
            KeyCode::Char('r') => Some(Action::PaletteReset),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            _ => None,
        },
    }
}
