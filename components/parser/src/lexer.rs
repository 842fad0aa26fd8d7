//! Oreo lexer - turns source text into tokens
//!
//! Scanning is a single linear pass over the characters of the source. The
//! first error aborts the pass; no partial token list is ever returned.

use crate::error::LexError;
use core_types::Location;
use log::{debug, trace};
use serde::Serialize;
use std::fmt;

/// Characters that open and close string literals.
///
/// Either one terminates a string, whichever quote opened it.
const QUOTES: [char; 2] = ['"', '\''];

/// Single-character operators
const OPERATORS: [char; 8] = ['+', '-', '*', '/', '<', '>', '^', '%'];

/// Two-character operators
const DOUBLE_OPERATORS: [&str; 4] = ["||", "&&", "==", "!="];

/// Punctuation characters
const PUNCTUATION: [char; 13] = [
    '(', ')', '{', '}', '.', ',', ';', ':', '[', ']', '=', '|', '!',
];

/// Oreo keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    /// var keyword
    Var,
    /// let keyword
    Let,
    /// if keyword
    If,
    /// else keyword
    Else,
    /// elseif keyword
    Elseif,
    /// while keyword
    While,
    /// do keyword
    Do,
    /// for keyword
    For,
    /// switch keyword
    Switch,
    /// case keyword
    Case,
    /// default keyword
    Default,
    /// fn keyword
    Fn,
    /// return keyword
    Return,
}

impl Keyword {
    /// Look up a word in the keyword set
    pub fn from_word(word: &str) -> Option<Keyword> {
        let keyword = match word {
            "var" => Keyword::Var,
            "let" => Keyword::Let,
            "if" => Keyword::If,
            "else" => Keyword::Else,
            "elseif" => Keyword::Elseif,
            "while" => Keyword::While,
            "do" => Keyword::Do,
            "for" => Keyword::For,
            "switch" => Keyword::Switch,
            "case" => Keyword::Case,
            "default" => Keyword::Default,
            "fn" => Keyword::Fn,
            "return" => Keyword::Return,
            _ => return None,
        };
        Some(keyword)
    }

    /// Source spelling
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Var => "var",
            Keyword::Let => "let",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Elseif => "elseif",
            Keyword::While => "while",
            Keyword::Do => "do",
            Keyword::For => "for",
            Keyword::Switch => "switch",
            Keyword::Case => "case",
            Keyword::Default => "default",
            Keyword::Fn => "fn",
            Keyword::Return => "return",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token classes and their values
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum TokenKind {
    /// Name that is not a keyword
    Identifier(String),
    /// Reserved word
    Keyword(Keyword),
    /// Decimal or binary number
    NumberLiteral(f64),
    /// Quoted string with escapes resolved
    StringLiteral {
        /// Content between the quotes
        value: String,
        /// Opening quote
        quote: char,
    },
    /// `true` or `false`
    BooleanLiteral(bool),
    /// `+ - * / < > ^ % || && == !=`
    Operator(String),
    /// `( ) { } . , ; : [ ] = | !`
    Punctuation(char),
    /// `// ...` without the leading slashes
    CommentLine(String),
    /// `/* ... */` without the outer markers
    MultiLineComment(String),
}

/// A classified lexical unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// Class and value
    #[serde(flatten)]
    pub kind: TokenKind,
    /// Span in the source
    pub loc: Location,
}

impl Token {
    /// Create a token
    pub fn new(kind: TokenKind, loc: Location) -> Self {
        Self { kind, loc }
    }

    /// True for the punctuation character `c`
    pub fn is_punct(&self, c: char) -> bool {
        matches!(self.kind, TokenKind::Punctuation(p) if p == c)
    }

    /// True for the keyword `keyword`
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.kind, TokenKind::Keyword(k) if k == keyword)
    }

    /// True for any operator
    pub fn is_operator(&self) -> bool {
        matches!(self.kind, TokenKind::Operator(_))
    }

    /// True for the operator `symbol`
    pub fn is_operator_symbol(&self, symbol: &str) -> bool {
        matches!(&self.kind, TokenKind::Operator(op) if op == symbol)
    }

    /// True for identifiers
    pub fn is_identifier(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier(_))
    }

    /// Source-like rendering used in diagnostics
    pub fn text(&self) -> String {
        match &self.kind {
            TokenKind::Identifier(name) => name.clone(),
            TokenKind::Keyword(keyword) => keyword.as_str().to_string(),
            TokenKind::NumberLiteral(value) => value.to_string(),
            TokenKind::StringLiteral { value, quote } => format!("{quote}{value}{quote}"),
            TokenKind::BooleanLiteral(value) => value.to_string(),
            TokenKind::Operator(op) => op.clone(),
            TokenKind::Punctuation(c) => c.to_string(),
            TokenKind::CommentLine(text) => format!("//{}", text),
            TokenKind::MultiLineComment(text) => format!("/*{}*/", text),
        }
    }
}

/// Oreo lexer
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
}

/// Where a token started
#[derive(Clone, Copy)]
struct Mark {
    position: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scan the whole source
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            trace!("token {:?} at {}:{}", token.kind, token.loc.line, token.loc.column);
            tokens.push(token);
        }
        debug!("lexed {} tokens over {} lines", tokens.len(), self.line);
        Ok(tokens)
    }

    /// Get the next token, `None` once the source is exhausted
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();
        if self.is_at_end() {
            return Ok(None);
        }
        self.scan_token().map(Some)
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        let start = self.mark();
        let ch = self.peek();

        if is_word_start(ch) {
            return Ok(self.scan_word(start));
        }

        if ch.is_ascii_digit() || (ch == '.' && self.peek_next().is_some_and(|c| c.is_ascii_digit())) {
            return self.scan_number(start);
        }

        if QUOTES.contains(&ch) {
            return self.scan_string(start);
        }

        match (ch, self.peek_next()) {
            ('/', Some('/')) => return Ok(self.scan_line_comment(start)),
            ('/', Some('*')) => return self.scan_block_comment(start),
            _ => {}
        }

        if OPERATORS.contains(&ch) {
            self.advance();
            return Ok(self.make(start, TokenKind::Operator(ch.to_string())));
        }

        if let Some(next) = self.peek_next() {
            let pair: String = [ch, next].iter().collect();
            if DOUBLE_OPERATORS.contains(&pair.as_str()) {
                self.advance();
                self.advance();
                return Ok(self.make(start, TokenKind::Operator(pair)));
            }
        }

        if PUNCTUATION.contains(&ch) {
            self.advance();
            return Ok(self.make(start, TokenKind::Punctuation(ch)));
        }

        Err(LexError::UnexpectedCharacter {
            character: ch,
            location: Location::new(start.position, start.position + 1, start.line, start.column),
        })
    }

    fn scan_word(&mut self, start: Mark) -> Token {
        while !self.is_at_end() && is_word_continue(self.peek()) {
            self.advance();
        }

        let word: String = self.chars[start.position..self.position].iter().collect();
        let kind = match Keyword::from_word(&word) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => match word.as_str() {
                "true" => TokenKind::BooleanLiteral(true),
                "false" => TokenKind::BooleanLiteral(false),
                _ => TokenKind::Identifier(word),
            },
        };
        self.make(start, kind)
    }

    fn scan_number(&mut self, start: Mark) -> Result<Token, LexError> {
        if self.peek() == '0' && matches!(self.peek_next(), Some('b') | Some('B')) {
            self.advance();
            self.advance();
            return self.scan_binary(start);
        }

        // A '.' belongs to the number whenever a digit follows it, so
        // "1.2.3" is scanned as a single run.
        while !self.is_at_end() {
            let ch = self.peek();
            let accepts_dot = ch == '.' && self.peek_next().is_some_and(|c| c.is_ascii_digit());
            if !ch.is_ascii_digit() && !accepts_dot {
                break;
            }
            self.advance();
        }

        let text: String = self.chars[start.position..self.position].iter().collect();
        Ok(self.make(start, TokenKind::NumberLiteral(decimal_value(&text))))
    }

    fn scan_binary(&mut self, start: Mark) -> Result<Token, LexError> {
        let mut value = 0.0;
        let mut digits = 0;

        while !self.is_at_end() && matches!(self.peek(), '0' | '1') {
            value = value * 2.0 + if self.advance() == '1' { 1.0 } else { 0.0 };
            digits += 1;
        }

        if digits == 0 {
            return Err(LexError::InvalidBinaryLiteral {
                location: self.location_from(start),
            });
        }

        Ok(self.make(start, TokenKind::NumberLiteral(value)))
    }

    fn scan_string(&mut self, start: Mark) -> Result<Token, LexError> {
        let quote = self.advance();
        let mut value = String::new();

        loop {
            if self.is_at_end() {
                return Err(LexError::UnterminatedString {
                    quote,
                    content: value,
                    location: self.location_from(start),
                });
            }

            match self.advance() {
                '\\' => {
                    if self.is_at_end() {
                        continue;
                    }
                    match self.advance() {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        'r' => value.push('\r'),
                        '\\' => value.push('\\'),
                        '"' => value.push('"'),
                        '\'' => value.push('\''),
                        other => {
                            value.push('\\');
                            value.push(other);
                        }
                    }
                }
                ch if QUOTES.contains(&ch) => break,
                ch => value.push(ch),
            }
        }

        Ok(self.make(start, TokenKind::StringLiteral { value, quote }))
    }

    fn scan_line_comment(&mut self, start: Mark) -> Token {
        self.advance();
        self.advance();

        let mut text = String::new();
        while !self.is_at_end() && self.peek() != '\n' {
            text.push(self.advance());
        }
        self.match_char('\n');

        self.make(start, TokenKind::CommentLine(text))
    }

    /// Block comments nest: every `/*` needs its own `*/`.
    fn scan_block_comment(&mut self, start: Mark) -> Result<Token, LexError> {
        self.advance();
        self.advance();

        let mut text = String::new();
        let mut depth = 1usize;

        loop {
            if self.is_at_end() {
                return Err(LexError::UnterminatedComment {
                    location: self.location_from(start),
                });
            }

            match (self.peek(), self.peek_next()) {
                ('*', Some('/')) => {
                    self.advance();
                    self.advance();
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                    text.push_str("*/");
                }
                ('/', Some('*')) => {
                    self.advance();
                    self.advance();
                    depth += 1;
                    text.push_str("/*");
                }
                _ => text.push(self.advance()),
            }
        }

        Ok(self.make(start, TokenKind::MultiLineComment(text)))
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.peek().is_whitespace() {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.position]
        }
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.position + 1).copied()
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.position];
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        ch
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            false
        } else {
            self.advance();
            true
        }
    }

    fn mark(&self) -> Mark {
        Mark {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    fn location_from(&self, start: Mark) -> Location {
        Location::new(start.position, self.position, start.line, start.column)
    }

    fn make(&self, start: Mark, kind: TokenKind) -> Token {
        Token::new(kind, self.location_from(start))
    }
}

fn is_word_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_word_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Value of a decimal run: the longest prefix holding at most one '.'.
fn decimal_value(text: &str) -> f64 {
    let end = text
        .match_indices('.')
        .nth(1)
        .map_or(text.len(), |(index, _)| index);
    text[..end].parse().unwrap_or(0.0)
}
