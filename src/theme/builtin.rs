//! Built-in themes — the two color schemes shipped with glint.

use ratatui::style::Color;

use super::Theme;
use crate::lexer::TokenClass;

/// Stylish — one saturated color per token class.
pub fn stylish() -> Theme {
    Theme::from_fn("Stylish", |class| match class {
        TokenClass::Identifier => Color::Rgb(53, 65, 80), // #354150
        TokenClass::Keyword => Color::Rgb(244, 112, 103), // #f47067
        TokenClass::String => Color::Rgb(0, 169, 154), // #00a99a
        TokenClass::Class => Color::Rgb(141, 133, 255), // #8d85ff
        TokenClass::Property => Color::Rgb(78, 143, 223), // #4e8fdf
        TokenClass::Entity => Color::Rgb(110, 175, 173), // #6eafad
        TokenClass::JsxLiterals => Color::Rgb(191, 125, 182), // #bf7db6
        TokenClass::Sign => Color::Rgb(137, 150, 163), // #8996a3
        TokenClass::Comment => Color::Rgb(161, 149, 149), // #a19595
        TokenClass::Break | TokenClass::Space => super::STRUCTURAL_COLOR,
    })
}

/// Three shared tones a reduced theme maps every class onto.
#[derive(Debug, Clone, Copy)]
pub struct Tones {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
}

/// Build a reduced theme: declarations and markup take the primary tone,
/// names and strings the secondary, punctuation and comments the tertiary.
pub fn tonal(name: &str, tones: Tones) -> Theme {
    Theme::from_fn(name, |class| match class {
        TokenClass::Keyword | TokenClass::Class | TokenClass::JsxLiterals => tones.primary,
        TokenClass::Identifier
        | TokenClass::String
        | TokenClass::Property
        | TokenClass::Entity => tones.secondary,
        TokenClass::Sign | TokenClass::Comment => tones.tertiary,
        TokenClass::Break | TokenClass::Space => super::STRUCTURAL_COLOR,
    })
}

/// Minimal — three grays.
pub fn minimal() -> Theme {
    tonal(
        "Minimal",
        Tones {
            primary: Color::Rgb(45, 45, 45), // #2d2d2d
            secondary: Color::Rgb(107, 107, 107), // #6b6b6b
            tertiary: Color::Rgb(154, 154, 154), // #9a9a9a
        },
    )
}

/// Returns all built-in themes in display order.
pub fn all_builtins() -> Vec<Theme> {
    vec![stylish(), minimal()]
}

/// Select a built-in theme by position, wrapping past the end.
pub fn switch_theme(index: usize) -> Theme {
    let mut themes = all_builtins();
    let idx = index % themes.len();
    themes.swap_remove(idx)
}
