//! Color palette — one row per customizable token class, with a text input
//! for entering a new color.

use ratatui::style::Color;

use crate::lexer::TokenClass;
use crate::theme::config::parse_color;
use crate::theme::customizable_classes;

#[derive(Debug, Clone)]
pub struct Palette {
    classes: Vec<TokenClass>,
    selected: usize,
    input: Option<String>,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            classes: customizable_classes().collect(),
            selected: 0,
            input: None,
        }
    }

    pub fn classes(&self) -> &[TokenClass] {
        &self.classes
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_class(&self) -> TokenClass {
        self.classes[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.classes.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.classes.len() - 1) % self.classes.len();
    }

    /// Text being typed, if editing.
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.input.is_some()
    }

    /// Start editing, prefilled with `current`.
    pub fn begin_edit(&mut self, current: &str) {
        self.input = Some(current.to_string());
    }

    pub fn insert(&mut self, c: char) {
        if let Some(input) = &mut self.input {
            input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = &mut self.input {
            input.pop();
        }
    }

    pub fn cancel(&mut self) {
        self.input = None;
    }

    /// Finish editing. Yields the selected class and the parsed color, or
    /// the rejected text. `None` when not editing.
    pub fn commit(&mut self) -> Option<Result<(TokenClass, Color), String>> {
        let input = self.input.take()?;
        Some(match parse_color(&input) {
            Some(color) => Ok((self.selected_class(), color)),
            None => Err(input),
        })
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_customizable_classes() {
        let palette = Palette::new();
        assert_eq!(palette.classes().len(), TokenClass::CUSTOMIZABLE);
        assert_eq!(palette.selected_class(), TokenClass::Identifier);
    }

    #[test]
    fn selection_wraps() {
        let mut palette = Palette::new();
        palette.select_prev();
        assert_eq!(palette.selected_class(), TokenClass::Comment);
        palette.select_next();
        assert_eq!(palette.selected(), 0);
    }

    #[test]
    fn commit_parses_color() {
        let mut palette = Palette::new();
        palette.select_next();
        palette.begin_edit("#f4706");
        palette.insert('8');
        assert_eq!(palette.input(), Some("#f47068"));
        let result = palette.commit();
        assert_eq!(
            result,
            Some(Ok((TokenClass::Keyword, Color::Rgb(244, 112, 104))))
        );
        assert!(!palette.is_editing());
    }

    #[test]
    fn commit_rejects_bad_input() {
        let mut palette = Palette::new();
        palette.begin_edit("#zz");
        assert_eq!(palette.commit(), Some(Err("#zz".to_string())));
    }

    #[test]
    fn commit_without_edit_is_none() {
        let mut palette = Palette::new();
        assert_eq!(palette.commit(), None);
        palette.begin_edit("x");
        palette.backspace();
        palette.cancel();
        assert_eq!(palette.commit(), None);
    }
}
