//! Token types produced by the highlighter lexer.

use std::fmt;

/// A classified slice of the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub class: TokenClass,
    pub lexeme: String,
    /// Byte offset of the lexeme in the tokenized text.
    pub offset: usize,
}

impl Token {
    pub fn new(class: TokenClass, lexeme: impl Into<String>, offset: usize) -> Self {
        Self {
            class,
            lexeme: lexeme.into(),
            offset,
        }
    }

    /// Whether the token carries no visible text (breaks, spaces, blank lexemes).
    pub fn is_blank(&self) -> bool {
        self.class.is_structural() || self.lexeme.trim().is_empty()
    }
}

/// The closed set of token classes.
///
/// Declaration order is significant: it is the numeric index used by themes
/// and the order classes are listed in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenClass {
    Identifier,
    Keyword,
    String,
    /// Capitalized names and numeric literals.
    Class,
    Property,
    /// Call targets and JSX tag names.
    Entity,
    /// Text content between JSX tags.
    JsxLiterals,
    /// Punctuation, operators and anything unrecognised.
    Sign,
    Comment,
    Break,
    Space,
}

impl TokenClass {
    /// Every class in declaration order.
    pub const ALL: [TokenClass; 11] = [
        TokenClass::Identifier,
        TokenClass::Keyword,
        TokenClass::String,
        TokenClass::Class,
        TokenClass::Property,
        TokenClass::Entity,
        TokenClass::JsxLiterals,
        TokenClass::Sign,
        TokenClass::Comment,
        TokenClass::Break,
        TokenClass::Space,
    ];

    /// Number of classes that carry a theme color.
    pub const CUSTOMIZABLE: usize = 9;

    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case name used in theme files, CSS variables and HTML classes.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Keyword => "keyword",
            Self::String => "string",
            Self::Class => "class",
            Self::Property => "property",
            Self::Entity => "entity",
            Self::JsxLiterals => "jsxliterals",
            Self::Sign => "sign",
            Self::Comment => "comment",
            Self::Break => "break",
            Self::Space => "space",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Line breaks and whitespace runs: rendered in a fixed neutral color and
    /// never user-editable.
    pub fn is_structural(self) -> bool {
        matches!(self, Self::Break | Self::Space)
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
