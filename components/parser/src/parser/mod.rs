//! Recursive descent parser for Oreo
//!
//! The parser owns the token list and a cursor into it. Parsing routines
//! leave the cursor just past the construct they consumed; the cursor only
//! moves backwards through [`Parser::restore`].

mod binary;
mod block;
mod identifier;
mod primary;
mod statement;

use crate::ast::Node;
use crate::error::{Construct, Mismatch, ParseError, ParseResult};
use crate::lexer::{Keyword, Token};
use core_types::{Location, ParseOptions};
use log::{debug, trace};

/// Saved cursor position, see [`Parser::checkpoint`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Oreo parser
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    options: ParseOptions,
    depth: usize,
}

impl Parser {
    /// Create a parser over a token list
    pub fn new(tokens: Vec<Token>, options: ParseOptions) -> Self {
        Self {
            tokens,
            position: 0,
            options,
            depth: 0,
        }
    }

    /// Options this parser was created with
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse every statement in the token list.
    ///
    /// A `case` left at the top level means a `switch` body was closed
    /// early, and is reported as such.
    pub fn parse(&mut self) -> ParseResult<Vec<Node>> {
        let mut statements = Vec::new();

        while !self.eof() {
            statements.push(self.parse_statement()?);
            self.skip_semicolon();
        }

        let stray_case = statements.iter().find_map(|node| match node {
            Node::CaseStatement(case) => Some(case),
            _ => None,
        });
        if let Some(case) = stray_case {
            return Err(ParseError::StructuralMismatch {
                mismatch: Mismatch::CaseOutsideSwitch,
                snippet: case.summary(),
                location: case.loc,
            });
        }

        debug!(
            "parsed {} top-level statements from {} tokens",
            statements.len(),
            self.tokens.len()
        );
        Ok(statements)
    }

    /// Current token
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Token `steps` positions ahead of the current one
    pub fn peek_future(&self, steps: usize) -> Option<&Token> {
        self.tokens.get(self.position + steps)
    }

    /// Most recently consumed token
    pub fn previous(&self) -> Option<&Token> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
    }

    /// Consume and return the current token
    pub fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Consume `count` tokens
    pub fn skip(&mut self, count: usize) {
        self.position = (self.position + count).min(self.tokens.len());
    }

    /// True once every token has been consumed
    pub fn eof(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Save the cursor
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.position)
    }

    /// Move the cursor back to a saved position
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        trace!("restoring cursor {} -> {}", self.position, checkpoint.0);
        self.position = checkpoint.0;
    }

    fn check_punct(&self, c: char) -> bool {
        self.peek().is_some_and(|token| token.is_punct(c))
    }

    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.peek().is_some_and(|token| token.is_keyword(keyword))
    }

    /// Consume the punctuation `c` if it is next, returning its location
    fn eat_punct(&mut self, c: char) -> Option<Location> {
        let loc = self.peek().filter(|token| token.is_punct(c))?.loc;
        self.position += 1;
        Some(loc)
    }

    fn skip_semicolon(&mut self) -> bool {
        self.eat_punct(';').is_some()
    }

    /// Location of the current token, or the end of input
    fn here(&self) -> Location {
        self.peek().map_or_else(|| self.end_loc(), |token| token.loc)
    }

    fn end_loc(&self) -> Location {
        match self.tokens.last() {
            Some(last) => Location::new(last.loc.end, last.loc.end, last.loc.line, last.loc.column),
            None => Location::new(0, 0, 1, 1),
        }
    }

    /// Text of the current token, `None` at end of input
    fn found_text(&self) -> Option<String> {
        self.peek().map(Token::text)
    }

    fn eof_error(&self, context: Construct) -> ParseError {
        let (after, location) = match self.previous() {
            Some(token) => (token.text(), token.loc),
            None => (String::new(), self.end_loc()),
        };
        ParseError::UnexpectedEof {
            context,
            after,
            location,
        }
    }

    fn expect_identifier(&mut self, context: Construct) -> ParseResult<Token> {
        match self.peek() {
            Some(token) if token.is_identifier() => {
                let token = token.clone();
                self.position += 1;
                Ok(token)
            }
            found => Err(ParseError::ExpectedTokenType {
                expected: "identifier",
                context,
                found: found.map(Token::text),
                location: self.here(),
            }),
        }
    }

    /// Run `parse` one nesting level deeper
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= self.options.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.options.max_depth,
                location: self.here(),
            });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parser(source: &str) -> Parser {
        let tokens = Lexer::new(source).tokenize().unwrap();
        Parser::new(tokens, ParseOptions::default())
    }

    #[test]
    fn test_cursor_moves() {
        let mut parser = parser("a b c");
        assert_eq!(parser.peek().map(Token::text).as_deref(), Some("a"));
        assert_eq!(parser.peek_future(2).map(Token::text).as_deref(), Some("c"));
        assert!(parser.previous().is_none());

        parser.next_token();
        assert_eq!(parser.previous().map(Token::text).as_deref(), Some("a"));

        parser.skip(5);
        assert!(parser.eof());
        assert!(parser.next_token().is_none());
    }

    #[test]
    fn test_checkpoint_restore() {
        let mut parser = parser("a ; b");
        let checkpoint = parser.checkpoint();
        parser.skip(2);
        assert_eq!(parser.peek().map(Token::text).as_deref(), Some("b"));

        parser.restore(checkpoint);
        assert_eq!(parser.peek().map(Token::text).as_deref(), Some("a"));
    }

    #[test]
    fn test_empty_program() {
        assert!(parser("").parse().unwrap().is_empty());
        assert!(parser("// only a comment").parse().unwrap().len() == 1);
    }

    #[test]
    fn test_nesting_limit() {
        let tokens = Lexer::new("x = [[[[[[[[[1]]]]]]]]]").tokenize().unwrap();
        let mut parser = Parser::new(tokens, ParseOptions::default().with_max_depth(8));
        let err = parser.parse().unwrap_err();
        assert!(matches!(err, ParseError::NestingTooDeep { limit: 8, .. }));
    }

    #[test]
    fn test_assignment_chains_hit_nesting_limit() {
        for source in [
            format!("{}1", "a = ".repeat(1000)),
            format!("{}1", "a[0] = ".repeat(1000)),
        ] {
            let tokens = Lexer::new(&source).tokenize().unwrap();
            let err = Parser::new(tokens, ParseOptions::default()).parse().unwrap_err();
            assert!(
                matches!(err, ParseError::NestingTooDeep { limit: 256, .. }),
                "{:?}",
                err
            );
        }
    }
}
