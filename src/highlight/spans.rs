//! Terminal rendering of token streams as styled ratatui lines.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::split_lines;
use crate::lexer::{tokenize, Token};
use crate::theme::Theme;

/// Style for one token under `theme`.
pub fn token_style(token: &Token, theme: &Theme) -> Style {
    Style::default().fg(theme.color_of(token.class))
}

/// Color a token stream into one [`Line`] per source line.
pub fn highlight_lines<'a>(tokens: &'a [Token], theme: &Theme) -> Vec<Line<'a>> {
    split_lines(tokens)
        .into_iter()
        .map(|line| {
            let spans: Vec<Span<'a>> = line
                .into_iter()
                .map(|token| Span::styled(token.lexeme.as_str(), token_style(token, theme)))
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Tokenize and color a single line of source.
pub fn highlight_line(line: &str, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span<'static>> = tokenize(line)
        .into_iter()
        .map(|token| {
            let style = token_style(&token, theme);
            Span::styled(token.lexeme, style)
        })
        .collect();
    Line::from(spans)
}
