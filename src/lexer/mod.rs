//! Lexer for JavaScript/JSX highlighting.
//!
//! Converts source text into a flat stream of classified [`Token`]s. The lexer
//! is lexical only: it never fails, never backtracks more than one character,
//! and the lexemes always concatenate back to the input.

pub mod keywords;
pub mod token;

pub use token::{Token, TokenClass};

use keywords::{
    is_ident_char, is_ident_start, is_keyword, is_line_terminator, is_quote, is_value_keyword,
};

/// Tokenize `text` into an ordered token stream.
pub fn tokenize(text: &str) -> Vec<Token> {
    Lexer::new(text).tokenize()
}

/// Nesting context for JSX-aware lexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    /// `{ ... }` opened in plain code.
    Brace,
    /// `{ ... }` embedded in a JSX tag or JSX children.
    Expr,
    /// Inside `<...>`. `named` flips once the tag name has been seen.
    Tag { closing: bool, named: bool },
    /// Between an opening tag and its closing tag.
    Children,
}

pub struct Lexer<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
    stack: Vec<Context>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().collect(),
            pos: 0,
            stack: Vec::new(),
            tokens: Vec::new(),
        }
    }

    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            let ch = self.peek();

            if is_line_terminator(ch) {
                self.lex_break();
                continue;
            }
            if ch.is_whitespace() {
                self.lex_space();
                continue;
            }

            match self.stack.last().copied() {
                Some(Context::Children) => self.lex_children(ch),
                Some(Context::Tag { closing, named }) => self.lex_tag(ch, closing, named),
                _ => self.lex_code(ch),
            }
        }

        self.tokens
    }

    fn peek(&self) -> char {
        self.chars[self.pos].1
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).map(|&(_, c)| c)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn byte_at(&self, pos: usize) -> usize {
        self.chars
            .get(pos)
            .map(|&(i, _)| i)
            .unwrap_or(self.source.len())
    }

    /// Push the text between char position `start` and the cursor.
    fn emit(&mut self, class: TokenClass, start: usize) {
        if start >= self.pos {
            return;
        }
        let from = self.byte_at(start);
        let to = self.byte_at(self.pos);
        self.tokens
            .push(Token::new(class, &self.source[from..to], from));
    }

    fn single(&mut self, class: TokenClass) {
        let start = self.pos;
        self.advance();
        self.emit(class, start);
    }

    fn lex_break(&mut self) {
        let start = self.pos;
        let ch = self.peek();
        self.advance();
        if ch == '\r' && !self.is_at_end() && self.peek() == '\n' {
            self.advance();
        }
        self.emit(TokenClass::Break, start);
    }

    fn lex_space(&mut self) {
        let start = self.pos;
        while !self.is_at_end() && self.peek().is_whitespace() && !is_line_terminator(self.peek())
        {
            self.advance();
        }
        self.emit(TokenClass::Space, start);
    }

    fn lex_code(&mut self, ch: char) {
        match ch {
            '/' if self.peek_next() == Some('/') => self.lex_line_comment(),
            '/' if self.peek_next() == Some('*') => self.lex_block_comment(),
            '/' if self.in_expression_position() => self.lex_regex(),
            c if is_quote(c) => self.lex_string(c),
            c if c.is_ascii_digit() => self.lex_number(),
            '.' if self.peek_next().is_some_and(|c| c.is_ascii_digit()) => self.lex_number(),
            c if is_ident_start(c) => self.lex_word(),
            '<' if self.starts_tag() => self.open_tag(),
            '{' => {
                self.stack.push(Context::Brace);
                self.single(TokenClass::Sign);
            }
            '}' => {
                if matches!(self.stack.last(), Some(Context::Brace | Context::Expr)) {
                    self.stack.pop();
                }
                self.single(TokenClass::Sign);
            }
            _ => self.single(TokenClass::Sign),
        }
    }

    fn lex_tag(&mut self, ch: char, closing: bool, named: bool) {
        match ch {
            '/' if self.peek_next() == Some('>') => {
                let start = self.pos;
                self.advance();
                self.advance();
                self.stack.pop();
                self.emit(TokenClass::Sign, start);
            }
            '>' => {
                self.stack.pop();
                if !closing {
                    self.stack.push(Context::Children);
                }
                self.single(TokenClass::Sign);
            }
            '{' => {
                self.stack.push(Context::Expr);
                self.single(TokenClass::Sign);
            }
            c if is_quote(c) => self.lex_string(c),
            c if is_ident_start(c) => {
                let start = self.pos;
                while !self.is_at_end() && (is_ident_char(self.peek()) || self.peek() == '-') {
                    self.advance();
                }
                if named {
                    self.emit(TokenClass::Property, start);
                } else {
                    if let Some(Context::Tag { named, .. }) = self.stack.last_mut() {
                        *named = true;
                    }
                    self.emit(TokenClass::Entity, start);
                }
            }
            _ => self.single(TokenClass::Sign),
        }
    }

    fn lex_children(&mut self, ch: char) {
        match ch {
            '<' if self.peek_next().is_some_and(is_tag_follower) => {
                if self.peek_next() == Some('/') {
                    self.stack.pop();
                }
                self.open_tag();
            }
            '{' => {
                self.stack.push(Context::Expr);
                self.single(TokenClass::Sign);
            }
            '<' | '}' => self.single(TokenClass::Sign),
            _ => {
                let start = self.pos;
                while !self.is_at_end() {
                    let c = self.peek();
                    if matches!(c, '<' | '{' | '}') || c.is_whitespace() {
                        break;
                    }
                    self.advance();
                }
                self.emit(TokenClass::JsxLiterals, start);
            }
        }
    }

    /// Consume `<` (and `/` for a closing tag) and enter tag context.
    fn open_tag(&mut self) {
        self.single(TokenClass::Sign);
        let closing = !self.is_at_end() && self.peek() == '/';
        if closing {
            self.single(TokenClass::Sign);
        }
        self.stack.push(Context::Tag {
            closing,
            named: false,
        });
    }

    /// `<` opens a tag only in expression position and when followed by a
    /// name, `/` or `>`.
    fn starts_tag(&self) -> bool {
        self.peek_next().is_some_and(is_tag_follower) && self.in_expression_position()
    }

    /// True when the previous significant token cannot end an operand.
    fn in_expression_position(&self) -> bool {
        !self.last_significant().is_some_and(is_value)
    }

    fn last_significant(&self) -> Option<&Token> {
        self.tokens.iter().rev().find(|t| {
            !matches!(
                t.class,
                TokenClass::Space | TokenClass::Break | TokenClass::Comment
            )
        })
    }

    fn lex_line_comment(&mut self) {
        let start = self.pos;
        while !self.is_at_end() && !is_line_terminator(self.peek()) {
            self.advance();
        }
        self.emit(TokenClass::Comment, start);
    }

    fn lex_block_comment(&mut self) {
        let mut start = self.pos;
        self.advance();
        self.advance();
        while !self.is_at_end() {
            let ch = self.peek();
            if is_line_terminator(ch) {
                self.emit(TokenClass::Comment, start);
                self.lex_break();
                start = self.pos;
                continue;
            }
            if ch == '*' && self.peek_next() == Some('/') {
                self.advance();
                self.advance();
                break;
            }
            self.advance();
        }
        self.emit(TokenClass::Comment, start);
    }

    fn lex_string(&mut self, quote: char) {
        let multiline = quote == '`';
        let mut start = self.pos;
        self.advance(); // opening quote
        while !self.is_at_end() {
            let ch = self.peek();
            if is_line_terminator(ch) {
                if !multiline {
                    break;
                }
                self.emit(TokenClass::String, start);
                self.lex_break();
                start = self.pos;
                continue;
            }
            self.advance();
            if ch == '\\' {
                if !self.is_at_end() && !is_line_terminator(self.peek()) {
                    self.advance();
                }
            } else if ch == quote {
                break;
            }
        }
        self.emit(TokenClass::String, start);
    }

    /// Regex literal: `/` through the closing unescaped `/` outside a
    /// `[...]` class, then any flags. Unterminated literals end before the
    /// line terminator.
    fn lex_regex(&mut self) {
        let start = self.pos;
        self.advance();
        let mut in_class = false;
        while !self.is_at_end() {
            let ch = self.peek();
            if is_line_terminator(ch) {
                break;
            }
            self.advance();
            match ch {
                '\\' => {
                    if !self.is_at_end() && !is_line_terminator(self.peek()) {
                        self.advance();
                    }
                }
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => {
                    while !self.is_at_end() && is_ident_char(self.peek()) {
                        self.advance();
                    }
                    break;
                }
                _ => {}
            }
        }
        self.emit(TokenClass::String, start);
    }

    /// Digits, letters and `_`, plus a `.` only when a digit follows, so a
    /// member access after a number stays separate.
    fn lex_number(&mut self) {
        let start = self.pos;
        while !self.is_at_end() {
            let c = self.peek();
            let decimal = c == '.' && self.peek_next().is_some_and(|n| n.is_ascii_digit());
            if c.is_alphanumeric() || c == '_' || decimal {
                self.advance();
            } else {
                break;
            }
        }
        self.emit(TokenClass::Class, start);
    }

    fn lex_word(&mut self) {
        let start = self.pos;
        while !self.is_at_end() && is_ident_char(self.peek()) {
            self.advance();
        }
        let from = self.byte_at(start);
        let to = self.byte_at(self.pos);
        let word = &self.source[from..to];

        let class = if is_keyword(word) {
            TokenClass::Keyword
        } else if self
            .last_significant()
            .is_some_and(|t| t.class == TokenClass::Sign && t.lexeme == ".")
        {
            TokenClass::Property
        } else if !self.is_at_end() && self.peek() == '(' {
            TokenClass::Entity
        } else if word.starts_with(|c: char| c.is_ascii_uppercase()) {
            TokenClass::Class
        } else {
            TokenClass::Identifier
        };
        self.emit(class, start);
    }
}

fn is_tag_follower(c: char) -> bool {
    is_ident_start(c) || c == '/' || c == '>'
}

/// Tokens after which `<` reads as a comparison rather than a tag.
fn is_value(token: &Token) -> bool {
    match token.class {
        TokenClass::Identifier
        | TokenClass::Class
        | TokenClass::String
        | TokenClass::Property
        | TokenClass::Entity => true,
        TokenClass::Keyword => is_value_keyword(&token.lexeme),
        TokenClass::Sign => token.lexeme == ")" || token.lexeme == "]",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenClass::{
        Break, Class, Comment, Entity, Identifier, JsxLiterals, Keyword, Property, Sign, Space,
    };

    const STR: TokenClass = TokenClass::String;

    fn classes(src: &str) -> Vec<TokenClass> {
        tokenize(src).into_iter().map(|t| t.class).collect()
    }

    fn pairs(src: &str) -> Vec<(TokenClass, String)> {
        tokenize(src)
            .into_iter()
            .map(|t| (t.class, t.lexeme))
            .collect()
    }

    fn rebuild(src: &str) -> String {
        tokenize(src).into_iter().map(|t| t.lexeme).collect()
    }

    #[test]
    fn lex_const_declaration() {
        assert_eq!(
            pairs("const x = 1"),
            vec![
                (Keyword, "const".to_string()),
                (Space, " ".to_string()),
                (Identifier, "x".to_string()),
                (Space, " ".to_string()),
                (Sign, "=".to_string()),
                (Space, " ".to_string()),
                (Class, "1".to_string()),
            ]
        );
    }

    #[test]
    fn lex_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn offsets_are_byte_positions() {
        let tokens = tokenize("let é = 'ü'");
        for token in &tokens {
            assert_eq!(
                &"let é = 'ü'"[token.offset..token.offset + token.lexeme.len()],
                token.lexeme
            );
        }
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(
            pairs("a \t  b"),
            vec![
                (Identifier, "a".to_string()),
                (Space, " \t  ".to_string()),
                (Identifier, "b".to_string()),
            ]
        );
    }

    #[test]
    fn each_line_terminator_is_a_break() {
        assert_eq!(
            pairs("a\n\nb\r\nc\rd"),
            vec![
                (Identifier, "a".to_string()),
                (Break, "\n".to_string()),
                (Break, "\n".to_string()),
                (Identifier, "b".to_string()),
                (Break, "\r\n".to_string()),
                (Identifier, "c".to_string()),
                (Break, "\r".to_string()),
                (Identifier, "d".to_string()),
            ]
        );
    }

    #[test]
    fn line_comment_stops_before_newline() {
        assert_eq!(
            pairs("x // note\ny"),
            vec![
                (Identifier, "x".to_string()),
                (Space, " ".to_string()),
                (Comment, "// note".to_string()),
                (Break, "\n".to_string()),
                (Identifier, "y".to_string()),
            ]
        );
    }

    #[test]
    fn block_comment_splits_on_lines() {
        assert_eq!(
            pairs("/* a\nb */x"),
            vec![
                (Comment, "/* a".to_string()),
                (Break, "\n".to_string()),
                (Comment, "b */".to_string()),
                (Identifier, "x".to_string()),
            ]
        );
    }

    #[test]
    fn unterminated_block_comment_runs_to_end() {
        assert_eq!(pairs("/* open"), vec![(Comment, "/* open".to_string())]);
    }

    #[test]
    fn division_is_a_sign() {
        assert_eq!(classes("a / b"), vec![Identifier, Space, Sign, Space, Identifier]);
    }

    #[test]
    fn strings_span_escaped_delimiters() {
        assert_eq!(
            pairs(r#""a\"b" 'c\'d'"#),
            vec![
                (STR, r#""a\"b""#.to_string()),
                (Space, " ".to_string()),
                (STR, r"'c\'d'".to_string()),
            ]
        );
    }

    #[test]
    fn quoted_string_ends_at_newline() {
        assert_eq!(
            pairs("'abc\nx"),
            vec![
                (STR, "'abc".to_string()),
                (Break, "\n".to_string()),
                (Identifier, "x".to_string()),
            ]
        );
    }

    #[test]
    fn template_string_spans_lines() {
        assert_eq!(
            pairs("`a\nb`"),
            vec![
                (STR, "`a".to_string()),
                (Break, "\n".to_string()),
                (STR, "b`".to_string()),
            ]
        );
    }

    #[test]
    fn numbers_use_class_color() {
        assert_eq!(
            classes("0.5 .25 1e3 0xff"),
            vec![Class, Space, Class, Space, Class, Space, Class]
        );
    }

    #[test]
    fn member_access_after_number() {
        assert_eq!(
            pairs("1.toString"),
            vec![
                (Class, "1".to_string()),
                (Sign, ".".to_string()),
                (Property, "toString".to_string()),
            ]
        );
        assert_eq!(pairs("1.5.x")[0], (Class, "1.5".to_string()));
    }

    #[test]
    fn regex_literal_in_expression_position() {
        assert_eq!(
            pairs("x = /a'b/g;"),
            vec![
                (Identifier, "x".to_string()),
                (Space, " ".to_string()),
                (Sign, "=".to_string()),
                (Space, " ".to_string()),
                (STR, "/a'b/g".to_string()),
                (Sign, ";".to_string()),
            ]
        );
        assert_eq!(classes("return /[/]+/.test(s)")[2], STR);
        assert_eq!(pairs("(/[/]+/)")[1], (STR, "/[/]+/".to_string()));
    }

    #[test]
    fn unterminated_regex_stops_at_line_end() {
        assert_eq!(
            pairs("f(/ab\nconst b"),
            vec![
                (Entity, "f".to_string()),
                (Sign, "(".to_string()),
                (STR, "/ab".to_string()),
                (Break, "\n".to_string()),
                (Keyword, "const".to_string()),
                (Space, " ".to_string()),
                (Identifier, "b".to_string()),
            ]
        );
    }

    #[test]
    fn division_after_values_stays_a_sign() {
        assert_eq!(classes("(a) / 2")[4], Sign);
        assert_eq!(classes("this / 2")[2], Sign);
        assert_eq!(classes("x[0] / 2")[5], Sign);
    }

    #[test]
    fn word_classification() {
        assert_eq!(
            pairs("foo.bar(Baz)"),
            vec![
                (Identifier, "foo".to_string()),
                (Sign, ".".to_string()),
                (Property, "bar".to_string()),
                (Sign, "(".to_string()),
                (Class, "Baz".to_string()),
                (Sign, ")".to_string()),
            ]
        );
        assert_eq!(classes("highlight(x)")[0], Entity);
        assert_eq!(classes("if(x)")[0], Keyword);
    }

    #[test]
    fn property_after_dot_across_lines() {
        let tokens = tokenize("promise\n  .then(done)");
        let then = tokens.iter().find(|t| t.lexeme == "then").unwrap();
        assert_eq!(then.class, Property);
    }

    #[test]
    fn comparison_is_not_a_tag() {
        assert_eq!(classes("a<b"), vec![Identifier, Sign, Identifier]);
        assert_eq!(
            classes("f(x) <y"),
            vec![Entity, Sign, Identifier, Sign, Space, Sign, Identifier]
        );
    }

    #[test]
    fn comparison_after_value_keyword_is_not_a_tag() {
        let tokens = tokenize("if (this <other) { a() }\nconst b = 1");
        let class_of = |lexeme: &str| {
            tokens
                .iter()
                .find(|t| t.lexeme == lexeme)
                .map(|t| t.class)
        };
        assert_eq!(class_of("other"), Some(Identifier));
        assert_eq!(class_of("const"), Some(Keyword));
        assert_eq!(class_of("b"), Some(Identifier));
        assert_eq!(class_of("1"), Some(Class));
        for word in ["super", "true", "false", "null", "undefined"] {
            let src = format!("{word} <x");
            assert_eq!(classes(&src), vec![Keyword, Space, Sign, Identifier]);
        }
    }

    #[test]
    fn tag_after_non_value_keyword() {
        assert_eq!(classes("return <p/>"), vec![Keyword, Space, Sign, Entity, Sign]);
    }

    #[test]
    fn jsx_element_with_attribute_and_text() {
        assert_eq!(
            pairs(r#"<h1 id="title">Hello</h1>"#),
            vec![
                (Sign, "<".to_string()),
                (Entity, "h1".to_string()),
                (Space, " ".to_string()),
                (Property, "id".to_string()),
                (Sign, "=".to_string()),
                (STR, r#""title""#.to_string()),
                (Sign, ">".to_string()),
                (JsxLiterals, "Hello".to_string()),
                (Sign, "<".to_string()),
                (Sign, "/".to_string()),
                (Entity, "h1".to_string()),
                (Sign, ">".to_string()),
            ]
        );
    }

    #[test]
    fn jsx_fragment_and_self_closing() {
        assert_eq!(
            pairs("(<><br/></>)"),
            vec![
                (Sign, "(".to_string()),
                (Sign, "<".to_string()),
                (Sign, ">".to_string()),
                (Sign, "<".to_string()),
                (Entity, "br".to_string()),
                (Sign, "/>".to_string()),
                (Sign, "<".to_string()),
                (Sign, "/".to_string()),
                (Sign, ">".to_string()),
                (Sign, ")".to_string()),
            ]
        );
    }

    #[test]
    fn jsx_expression_returns_to_children() {
        let tokens = tokenize("<p>{a.b} text</p>");
        let classes: Vec<_> = tokens.iter().map(|t| (t.class, t.lexeme.as_str())).collect();
        assert!(classes.contains(&(Property, "b")));
        assert!(classes.contains(&(JsxLiterals, "text")));
        assert_eq!(classes.last(), Some(&(Sign, ">")));
    }

    #[test]
    fn jsx_attribute_expression() {
        let tokens = tokenize("<div style={styles.bar} />");
        let bar = tokens.iter().find(|t| t.lexeme == "bar").unwrap();
        assert_eq!(bar.class, Property);
        assert_eq!(tokens.last().map(|t| t.lexeme.as_str()), Some("/>"));
    }

    #[test]
    fn keywords_inside_tags_are_attributes() {
        let tokens = tokenize("<label for=\"x\" class=\"y\">");
        let attrs: Vec<_> = tokens
            .iter()
            .filter(|t| t.class == Property)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(attrs, vec!["for", "class"]);
    }

    #[test]
    fn unbalanced_markup_never_fails() {
        for src in ["</div>", "<div", "<a><b>", "}}}", "<p>{", "<", "a <", "<>text"] {
            assert_eq!(rebuild(src), src);
        }
    }

    #[test]
    fn unrecognised_chars_fall_back_to_sign() {
        assert_eq!(pairs("@#"), vec![(Sign, "@".to_string()), (Sign, "#".to_string())]);
    }

    #[test]
    fn round_trip_sample() {
        let src = concat!(
            "export default function App() {\n",
            "  return (\n",
            "    <>\n",
            "      <h1 id=\"title\">\n",
            "        Hello\n",
            "        <span> world</span>\n",
            "      </h1>\n",
            "      <div style={styles.bar} />\n",
            "    </>\n",
            "  )\n",
            "}\n",
        );
        assert_eq!(rebuild(src), src);
    }

    #[test]
    fn deterministic() {
        let src = "const a = <b c={1}>d</b> // e";
        assert_eq!(tokenize(src), tokenize(src));
    }
}
