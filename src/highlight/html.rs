//! HTML rendering: one `sh__line` span per source line, one styled span per
//! token, colors resolved through `--sh-<class>` CSS variables.

use std::fmt::Write;

use super::split_lines;
use crate::lexer::{tokenize, Token};

/// Tokenize `text` and render it as HTML markup.
pub fn highlight(text: &str) -> String {
    to_html(&tokenize(text))
}

/// Render a token stream as HTML markup, lines joined with `\n`.
pub fn to_html(tokens: &[Token]) -> String {
    split_lines(tokens)
        .into_iter()
        .map(|line| {
            let mut out = String::from("<span class=\"sh__line\">");
            for token in line {
                let name = token.class.name();
                // Writing into a String cannot fail.
                let _ = write!(
                    out,
                    "<span class=\"sh__token--{name}\" style=\"color: var(--sh-{name})\">{}</span>",
                    escape_html(&token.lexeme)
                );
            }
            out.push_str("</span>");
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
