//! Theme YAML config — load a custom theme from ~/.glint/theme.yaml.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use ratatui::style::Color;
use serde::Deserialize;

use super::{builtin, customizable_classes, find_theme, Theme, ThemeError};
use crate::lexer::TokenClass;

/// YAML representation — every field optional.
#[derive(Debug, Deserialize)]
struct ThemeConfig {
    name: Option<String>,
    /// Built-in theme the missing colors come from.
    base: Option<String>,
    #[serde(default)]
    colors: BTreeMap<String, String>,
}

/// A parsed custom theme plus the entries that were skipped.
#[derive(Debug)]
pub struct LoadedTheme {
    pub theme: Theme,
    pub warnings: Vec<ThemeError>,
}

/// Parse a color string: "#RRGGBB" hex or named color.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => None,
    }
}

/// Load the custom theme from ~/.glint/theme.yaml.
/// Returns `Ok(None)` when there is no such file.
pub fn load_custom_theme() -> Result<Option<LoadedTheme>, ThemeError> {
    match crate::config::glint_dir() {
        Some(dir) => load_theme_file(&dir.join("theme.yaml")),
        None => Ok(None),
    }
}

pub fn load_theme_file(path: &Path) -> Result<Option<LoadedTheme>, ThemeError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    parse_theme_yaml(&content).map(Some)
}

/// Parse a YAML string into a theme, filling missing classes from the base.
pub fn parse_theme_yaml(yaml: &str) -> Result<LoadedTheme, ThemeError> {
    let config: ThemeConfig = serde_yaml::from_str(yaml)?;

    let base = match config.base.as_deref() {
        None => builtin::stylish(),
        Some(name) => find_theme(&builtin::all_builtins(), name)
            .cloned()
            .ok_or_else(|| ThemeError::UnknownBase(name.to_string()))?,
    };

    let mut colors: HashMap<TokenClass, Color> = customizable_classes()
        .map(|class| (class, base.color_of(class)))
        .collect();
    let mut warnings = Vec::new();

    for (key, value) in &config.colors {
        match TokenClass::from_name(key) {
            Some(class) if !class.is_structural() => match parse_color(value) {
                Some(color) => {
                    colors.insert(class, color);
                }
                None => warnings.push(ThemeError::InvalidColor {
                    class: key.clone(),
                    value: value.clone(),
                }),
            },
            _ => warnings.push(ThemeError::UnknownClass(key.clone())),
        }
    }

    let name = config.name.unwrap_or_else(|| "Custom".to_string());
    let theme = Theme::from_map(name, &colors)?;
    Ok(LoadedTheme { theme, warnings })
}
