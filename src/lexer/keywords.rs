//! Reserved words and character classes of the JavaScript/JSX grammar.

/// Words highlighted as keywords outside JSX tags.
pub const KEYWORDS: &[&str] = &[
    "as",
    "async",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "from",
    "function",
    "get",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "null",
    "of",
    "return",
    "set",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "undefined",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Keywords that evaluate to a value, so `<` or `/` after them is an operator.
pub const VALUE_KEYWORDS: &[&str] = &["false", "null", "super", "this", "true", "undefined"];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

pub fn is_value_keyword(word: &str) -> bool {
    VALUE_KEYWORDS.contains(&word)
}

pub fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

pub fn is_ident_char(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphanumeric()
}

pub fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

pub fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"' | '`')
}
