//! Theme engine — maps token classes to colors under swappable themes.

pub mod builtin;
pub mod config;

use std::collections::HashMap;

use ratatui::style::Color;
use thiserror::Error;

use crate::lexer::TokenClass;

/// Fixed color for line breaks and whitespace, matching the code background.
pub const STRUCTURAL_COLOR: Color = Color::Rgb(255, 255, 255);

/// Background the highlighted code is rendered on.
pub const BACKGROUND: Color = STRUCTURAL_COLOR;

/// Errors raised while defining or loading a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme '{theme}' has no color for '{class}'")]
    MissingColor { theme: String, class: TokenClass },
    #[error("invalid color '{value}' for '{class}'")]
    InvalidColor { class: String, value: String },
    #[error("unknown token class '{0}'")]
    UnknownClass(String),
    #[error("unknown base theme '{0}'")]
    UnknownBase(String),
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A named, complete mapping from customizable token classes to colors.
///
/// Themes are plain values: every edit produces a new theme, so any render
/// pass can hold on to the one it started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    colors: [Color; TokenClass::CUSTOMIZABLE],
}

impl Theme {
    /// Build a theme by asking `color` for every customizable class.
    pub fn from_fn(name: impl Into<String>, color: impl Fn(TokenClass) -> Color) -> Self {
        let mut colors = [STRUCTURAL_COLOR; TokenClass::CUSTOMIZABLE];
        for class in customizable_classes() {
            colors[class.index()] = color(class);
        }
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Build a theme from a class map, rejecting maps that miss a class.
    pub fn from_map(
        name: impl Into<String>,
        colors: &HashMap<TokenClass, Color>,
    ) -> Result<Self, ThemeError> {
        let name = name.into();
        if let Some(class) = customizable_classes().find(|c| !colors.contains_key(c)) {
            return Err(ThemeError::MissingColor { theme: name, class });
        }
        Ok(Self::from_fn(name, |class| colors[&class]))
    }

    /// Color for `class`. Structural classes and classes without a slot
    /// resolve to [`STRUCTURAL_COLOR`].
    pub fn color_of(&self, class: TokenClass) -> Color {
        self.colors
            .get(class.index())
            .copied()
            .unwrap_or(STRUCTURAL_COLOR)
    }

    /// A copy of this theme with `class` recolored. Structural classes keep
    /// their fixed color.
    pub fn with_override(&self, class: TokenClass, color: Color) -> Theme {
        let mut theme = self.clone();
        if let Some(slot) = theme.colors.get_mut(class.index()) {
            *slot = color;
        }
        theme
    }

    /// `--sh-<class>: <color>;` lines for every customizable class.
    pub fn css_variables(&self) -> String {
        customizable_classes()
            .map(|class| format!("--sh-{}: {};", class.name(), color_hex(self.color_of(class))))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Classes a user can recolor, in declaration order.
pub fn customizable_classes() -> impl Iterator<Item = TokenClass> {
    TokenClass::ALL.into_iter().filter(|c| !c.is_structural())
}

/// Render a color as `#rrggbb`, or its lower-case name for palette colors.
pub fn color_hex(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{r:02x}{g:02x}{b:02x}"),
        other => other.to_string().to_lowercase(),
    }
}

/// Built-in themes followed by the custom theme from `~/.glint/theme.yaml`,
/// if one loads.
pub fn load_themes() -> Vec<Theme> {
    let mut themes = builtin::all_builtins();
    match config::load_custom_theme() {
        Ok(Some(loaded)) => {
            for warning in &loaded.warnings {
                tracing::warn!(theme = %loaded.theme.name, "{warning}");
            }
            tracing::info!(theme = %loaded.theme.name, "loaded custom theme");
            themes.retain(|t| t.name != loaded.theme.name);
            themes.push(loaded.theme);
        }
        Ok(None) => {}
        Err(e) => tracing::warn!("ignoring custom theme: {e}"),
    }
    themes
}

/// Find a theme by case-insensitive name.
pub fn find_theme<'a>(themes: &'a [Theme], name: &str) -> Option<&'a Theme> {
    themes.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Cycle to the next theme in the list, wrapping around.
pub fn cycle_theme(current: &Theme, themes: &[Theme]) -> Theme {
    if themes.is_empty() {
        return current.clone();
    }
    let idx = themes
        .iter()
        .position(|t| t.name == current.name)
        .map(|i| (i + 1) % themes.len())
        .unwrap_or(0);
    themes[idx].clone()
}
