//! Primary expressions: literals, bracketed forms, `!`, anonymous functions

use super::Parser;
use crate::ast::{Node, ObjectEntry};
use crate::error::{Bracket, Construct, ParseError, ParseResult};
use crate::lexer::{Keyword, Token, TokenKind};
use core_types::Location;

impl Parser {
    /// Parse one atomic or bracketed expression
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Node> {
        let (kind, loc) = match self.peek() {
            Some(token) => (token.kind.clone(), token.loc),
            None => return Err(self.eof_error(Construct::Expression)),
        };

        match kind {
            TokenKind::Punctuation('(') => self.nested(Parser::parse_parenthesized),
            TokenKind::Punctuation('[') => self.nested(Parser::parse_array),
            TokenKind::Punctuation('{') => self.nested(Parser::parse_object_literal),
            TokenKind::Punctuation('!') => self.nested(Parser::parse_not),
            TokenKind::Punctuation(c) => Err(ParseError::UnexpectedToken {
                context: Construct::Expression,
                found: Some(c.to_string()),
                location: loc,
            }),
            TokenKind::Identifier(_) => self.parse_identifier(false),
            TokenKind::Keyword(Keyword::Fn) => self.nested(Parser::parse_anonymous_function),
            kind => {
                self.skip(1);
                Ok(Node::Leaf(Token::new(kind, loc)))
            }
        }
    }

    /// `( expr )`, or `()` for an empty expression
    fn parse_parenthesized(&mut self) -> ParseResult<Node> {
        let open = self.here();
        self.skip(1);

        let unclosed = |found| ParseError::UnclosedBracket {
            kind: Bracket::Paren,
            context: Construct::Parenthesis,
            found,
            location: open,
        };

        if self.eof() {
            return Err(unclosed(None));
        }
        if let Some(close) = self.eat_punct(')') {
            return Ok(Node::EmptyExpression {
                loc: open.to(close),
            });
        }

        let expression = self.parse_expression()?;
        if self.eat_punct(')').is_none() {
            return Err(unclosed(self.found_text()));
        }
        Ok(expression)
    }

    /// `[ a, b, c ]`
    fn parse_array(&mut self) -> ParseResult<Node> {
        let open = self.here();
        self.skip(1);

        let (elements, close) =
            self.parse_delimited(open, ']', Construct::Array, Parser::parse_expression)?;
        Ok(Node::ArrayExpression {
            elements,
            loc: open.to(close),
        })
    }

    /// `{ [key] = value, name = value, item }`
    fn parse_object_literal(&mut self) -> ParseResult<Node> {
        let open = self.here();
        self.skip(1);

        let (entries, close) =
            self.parse_delimited(open, '}', Construct::Object, Parser::parse_object_entry)?;
        Ok(Node::ObjectLiteralExpression {
            entries,
            loc: open.to(close),
        })
    }

    fn parse_object_entry(&mut self) -> ParseResult<ObjectEntry> {
        if let Some(open) = self.eat_punct('[') {
            let key = self.nested(Parser::parse_expression)?;
            self.expect_closing(open, ']', Construct::Object)?;
            let value = match self.eat_punct('=') {
                Some(_) => Some(self.parse_expression()?),
                None => None,
            };
            return Ok(ObjectEntry {
                identifier: key,
                computed: true,
                is_array_style: value.is_none(),
                value,
            });
        }

        if let (Some(name), Some(equals)) = (self.peek(), self.peek_future(1)) {
            if name.is_identifier() && equals.is_punct('=') {
                let name = name.clone();
                self.skip(2);
                let value = self.parse_expression()?;
                return Ok(ObjectEntry {
                    identifier: Node::Leaf(name),
                    computed: false,
                    is_array_style: false,
                    value: Some(value),
                });
            }
        }

        Ok(ObjectEntry {
            identifier: self.parse_expression()?,
            computed: false,
            is_array_style: true,
            value: None,
        })
    }

    /// `!expr`; the operand is a whole expression
    fn parse_not(&mut self) -> ParseResult<Node> {
        let bang = self.here();
        self.skip(1);

        if self.eof() {
            return Err(ParseError::ExpectedTokenType {
                expected: "identifier or expression",
                context: Construct::Not,
                found: None,
                location: bang,
            });
        }

        let expression = self.parse_expression()?;
        Ok(Node::UnaryExpression {
            loc: bang.to(expression.loc()),
            expression: Box::new(expression),
        })
    }

    /// `fn (params) body`
    pub(crate) fn parse_anonymous_function(&mut self) -> ParseResult<Node> {
        let keyword = self.here();
        self.skip(1);

        let Some(open) = self.eat_punct('(') else {
            return Err(ParseError::ExpectedTokenValue {
                expected: "'('",
                context: Construct::Parameters,
                found: self.found_text(),
                location: self.here(),
            });
        };
        let (arguments, _) = self.parse_delimited(open, ')', Construct::Parameters, |parser| {
            parser.expect_identifier(Construct::Parameters)
        })?;

        let body = self.parse_body()?;
        Ok(Node::AnonymousFunctionDeclaration {
            loc: keyword.to(body.loc()),
            arguments,
            body: Box::new(body),
        })
    }

    /// Comma-separated items up to `close`, with the opener already
    /// consumed. Leading, doubled and trailing commas are rejected.
    pub(crate) fn parse_delimited<T>(
        &mut self,
        open: Location,
        close: char,
        context: Construct,
        mut item: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<(Vec<T>, Location)> {
        let unclosed = |found| ParseError::UnclosedBracket {
            kind: Bracket::closed_by(close),
            context,
            found,
            location: open,
        };
        let stray_comma = |location| ParseError::UnexpectedToken {
            context,
            found: Some(",".to_string()),
            location,
        };

        let mut items = Vec::new();
        if let Some(end) = self.eat_punct(close) {
            return Ok((items, end));
        }

        loop {
            match self.peek() {
                None => return Err(unclosed(None)),
                Some(token) if token.is_punct(',') => return Err(stray_comma(token.loc)),
                Some(_) => {}
            }

            items.push(item(self)?);

            if let Some(comma) = self.eat_punct(',') {
                if self.check_punct(close) {
                    return Err(stray_comma(comma));
                }
                continue;
            }
            if let Some(end) = self.eat_punct(close) {
                return Ok((items, end));
            }
            return Err(unclosed(self.found_text()));
        }
    }

    /// Consume the `close` bracket matching `open`
    pub(crate) fn expect_closing(
        &mut self,
        open: Location,
        close: char,
        context: Construct,
    ) -> ParseResult<Location> {
        self.eat_punct(close)
            .ok_or_else(|| ParseError::UnclosedBracket {
                kind: Bracket::closed_by(close),
                context,
                found: self.found_text(),
                location: open,
            })
    }
}
