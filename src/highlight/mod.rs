//! Highlight renderers — turn a token stream plus a theme into colored output.

pub mod html;
pub mod spans;

pub use html::{highlight, to_html};
pub use spans::{highlight_line, highlight_lines};

use crate::lexer::{Token, TokenClass};

/// Group tokens into source lines, dropping the break tokens themselves.
///
/// Mirrors `str::split` on line terminators: the result always has at least
/// one line, and a trailing break yields a final empty line.
pub fn split_lines(tokens: &[Token]) -> Vec<Vec<&Token>> {
    let mut lines = vec![Vec::new()];
    for token in tokens {
        if token.class == TokenClass::Break {
            lines.push(Vec::new());
        } else if let Some(line) = lines.last_mut() {
            line.push(token);
        }
    }
    lines
}

/// Tokens worth listing on their own: no breaks, spaces or blank text.
pub fn significant_tokens(tokens: &[Token]) -> impl Iterator<Item = &Token> {
    tokens.iter().filter(|t| !t.is_blank())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn split_empty_stream() {
        let lines = split_lines(&[]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
    }

    #[test]
    fn split_matches_str_lines() {
        let src = "a b\n\nc\n";
        let tokens = tokenize(src);
        let lines = split_lines(&tokens);
        assert_eq!(lines.len(), src.split('\n').count());
        let rebuilt: Vec<String> = lines
            .iter()
            .map(|l| l.iter().map(|t| t.lexeme.as_str()).collect())
            .collect();
        assert_eq!(rebuilt, vec!["a b", "", "c", ""]);
    }

    #[test]
    fn significant_tokens_skip_structure() {
        let tokens = tokenize("<p>\n  hi there\n</p>");
        let listed: Vec<&str> = significant_tokens(&tokens)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(listed, vec!["<", "p", ">", "hi", "there", "<", "/", "p", ">"]);
    }
}
