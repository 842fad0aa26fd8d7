//! Statement dispatch and the keyword-led statements

use super::Parser;
use crate::ast::{CaseMatch, CaseStatement, CaseType, Node, UpdateOperator};
use crate::error::{Construct, Mismatch, ParseError, ParseResult};
use crate::lexer::{Keyword, Token, TokenKind};
use log::trace;

impl Parser {
    /// Parse one statement
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Node> {
        self.nested(Parser::dispatch_statement)
    }

    fn dispatch_statement(&mut self) -> ParseResult<Node> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.eof_error(Construct::Statement));
        };
        trace!(
            "statement at {}:{} starts with '{}'",
            token.loc.line,
            token.loc.column,
            token.text()
        );

        match token.kind {
            TokenKind::Keyword(keyword) => match keyword {
                Keyword::Let | Keyword::Var => self.parse_declaration(),
                Keyword::If => self.parse_if(),
                Keyword::While => self.parse_while(),
                Keyword::Do => self.parse_do_while(),
                Keyword::For => self.parse_for(),
                Keyword::Switch => self.parse_switch(),
                Keyword::Case | Keyword::Default => self.parse_case(),
                Keyword::Fn => self.parse_function(),
                Keyword::Return => self.parse_return(),
                Keyword::Else | Keyword::Elseif => Err(ParseError::UnexpectedKeyword {
                    keyword,
                    location: token.loc,
                }),
            },
            TokenKind::Identifier(_) => self.parse_identifier(true),
            TokenKind::CommentLine(_) | TokenKind::MultiLineComment(_) => {
                self.skip(1);
                Ok(Node::Leaf(token))
            }
            _ => Err(ParseError::UnexpectedToken {
                context: Construct::Statement,
                found: Some(token.text()),
                location: token.loc,
            }),
        }
    }

    /// Skip a `;` only when one of `keywords` follows it
    fn skip_semicolon_before(&mut self, keywords: &[Keyword]) {
        let checkpoint = self.checkpoint();
        if self.skip_semicolon() && !keywords.iter().any(|k| self.check_keyword(*k)) {
            self.restore(checkpoint);
        }
    }

    /// `let name [= value]`
    fn parse_declaration(&mut self) -> ParseResult<Node> {
        let keyword = self.here();
        self.skip(1);

        let identifier = self.expect_identifier(Construct::VariableName)?;
        let value = match self.eat_punct('=') {
            Some(_) => Some(Box::new(self.parse_expression()?)),
            None => None,
        };

        let end = value.as_ref().map_or(identifier.loc, |value| value.loc());
        Ok(Node::VariableDeclaration {
            loc: keyword.to(end),
            identifier,
            value,
        })
    }

    /// `if test body [else { ... } | elseif ...]`
    fn parse_if(&mut self) -> ParseResult<Node> {
        let keyword = self.here();
        self.skip(1);

        let test = self.parse_expression()?;
        let consequent = self.parse_body()?;

        self.skip_semicolon_before(&[Keyword::Else, Keyword::Elseif]);
        let alternate = if self.check_keyword(Keyword::Else) {
            self.skip(1);
            Some(Box::new(self.parse_block()?))
        } else if self.check_keyword(Keyword::Elseif) {
            Some(Box::new(self.nested(Parser::parse_if)?))
        } else {
            None
        };

        let end = alternate
            .as_ref()
            .map_or(consequent.loc(), |alternate| alternate.loc());
        Ok(Node::IfStatement {
            loc: keyword.to(end),
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate,
        })
    }

    fn parse_while(&mut self) -> ParseResult<Node> {
        let keyword = self.here();
        self.skip(1);

        let test = self.parse_expression()?;
        let consequent = self.parse_body()?;
        Ok(Node::WhileStatement {
            loc: keyword.to(consequent.loc()),
            test: Box::new(test),
            consequent: Box::new(consequent),
        })
    }

    fn parse_do_while(&mut self) -> ParseResult<Node> {
        let keyword = self.here();
        self.skip(1);

        let body = self.parse_body()?;
        self.skip_semicolon_before(&[Keyword::While]);
        if !self.check_keyword(Keyword::While) {
            return Err(ParseError::ExpectedTokenValue {
                expected: "'while'",
                context: Construct::DoWhile,
                found: self.found_text(),
                location: self.here(),
            });
        }
        self.skip(1);

        let test = self.parse_expression()?;
        Ok(Node::DoWhileStatement {
            loc: keyword.to(test.loc()),
            test: Box::new(test),
            body: Box::new(body),
        })
    }

    /// `for init, test[, update] body`; without an update clause the
    /// declared name is incremented
    fn parse_for(&mut self) -> ParseResult<Node> {
        let keyword = self.here();
        self.skip(1);

        let init = self.parse_statement()?;
        if self.eat_punct(',').is_none() {
            return Err(self.missing_comma());
        }
        let test = self.parse_expression()?;

        let update = if self.eat_punct(',').is_some() {
            self.parse_statement()?
        } else {
            match &init {
                Node::VariableDeclaration { identifier, .. } if !self.eof() => {
                    Node::UpdateExpression {
                        identifier: identifier.clone(),
                        operator: UpdateOperator::Increment,
                        loc: identifier.loc,
                    }
                }
                _ => return Err(self.missing_comma()),
            }
        };

        let body = self.parse_body()?;
        Ok(Node::ForStatement {
            loc: keyword.to(body.loc()),
            init: Box::new(init),
            test: Box::new(test),
            update: Box::new(update),
            body: Box::new(body),
        })
    }

    fn missing_comma(&self) -> ParseError {
        ParseError::ExpectedTokenValue {
            expected: "'comma'",
            context: Construct::ForLoop,
            found: self.found_text(),
            location: self.here(),
        }
    }

    /// `switch value { case ... }`
    fn parse_switch(&mut self) -> ParseResult<Node> {
        let keyword = self.here();
        self.skip(1);

        let identifier = self.parse_expression()?;
        let (entries, loc) = self.parse_block_parts()?;

        let mut body = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry {
                Node::CaseStatement(case) => body.push(case),
                other => {
                    return Err(ParseError::StructuralMismatch {
                        mismatch: Mismatch::NonCaseInSwitch,
                        snippet: format!("switch {} {{...}}", identifier.summary()),
                        location: other.loc(),
                    })
                }
            }
        }

        Ok(Node::SwitchStatement {
            loc: keyword.to(loc),
            identifier: Box::new(identifier),
            body,
        })
    }

    /// `case a | b body`, `default body`; the body is a block or `: statement`
    fn parse_case(&mut self) -> ParseResult<Node> {
        let keyword = self.here();
        let case_type = if self.check_keyword(Keyword::Default) {
            CaseType::Default
        } else {
            CaseType::Case
        };
        self.skip(1);

        let identifier = match case_type {
            CaseType::Default => CaseMatch::None,
            CaseType::Case => {
                let first = self.parse_expression()?;
                if self.check_punct('|') {
                    let mut values = vec![first];
                    while self.eat_punct('|').is_some() {
                        values.push(self.parse_expression()?);
                    }
                    CaseMatch::Alternatives(values)
                } else {
                    CaseMatch::Single(Box::new(first))
                }
            }
        };

        let body = if self.check_punct('{') {
            self.parse_block()?
        } else if self.eat_punct(':').is_some() {
            self.parse_statement()?
        } else {
            return Err(ParseError::UnexpectedToken {
                context: Construct::Case,
                found: self.found_text(),
                location: self.here(),
            });
        };

        Ok(Node::CaseStatement(CaseStatement {
            loc: keyword.to(body.loc()),
            case_type,
            identifier,
            body: Box::new(body),
        }))
    }

    /// `fn name(params) body`, including member names like `fn obj.method(a)`
    fn parse_function(&mut self) -> ParseResult<Node> {
        if self.peek_future(1).is_some_and(|token| token.is_punct('(')) {
            return self.parse_anonymous_function();
        }

        let keyword = self.here();
        self.skip(1);

        if !self.peek().is_some_and(Token::is_identifier) {
            return Err(ParseError::ExpectedTokenType {
                expected: "identifier",
                context: Construct::FunctionName,
                found: self.found_text(),
                location: self.here(),
            });
        }

        let signature = self.parse_identifier(false)?;
        let (identifier, arguments) =
            split_trailing_call(signature).ok_or_else(|| ParseError::ExpectedTokenValue {
                expected: "'('",
                context: Construct::FunctionName,
                found: self.found_text(),
                location: self.here(),
            })?;

        let arguments = arguments
            .into_iter()
            .map(|argument| match argument {
                Node::Leaf(token) if token.is_identifier() => Ok(token),
                other => Err(ParseError::ExpectedTokenType {
                    expected: "identifier",
                    context: Construct::Parameters,
                    found: Some(other.summary()),
                    location: other.loc(),
                }),
            })
            .collect::<ParseResult<Vec<Token>>>()?;

        let body = self.parse_body()?;
        Ok(Node::FunctionDeclaration {
            loc: keyword.to(body.loc()),
            identifier: Box::new(identifier),
            arguments,
            body: Box::new(body),
        })
    }

    /// `return [value]`
    fn parse_return(&mut self) -> ParseResult<Node> {
        let keyword = self.here();
        self.skip(1);

        let bare = self
            .peek()
            .map_or(true, |token| token.is_punct(';') || token.is_punct('}'));
        if bare {
            return Ok(Node::ReturnStatement {
                statement: None,
                loc: keyword,
            });
        }

        let value = self.parse_expression()?;
        Ok(Node::ReturnStatement {
            loc: keyword.to(value.loc()),
            statement: Some(Box::new(value)),
        })
    }
}

/// Split `name(args)` or `a.b.name(args)` into the name and the call's
/// arguments
fn split_trailing_call(node: Node) -> Option<(Node, Vec<Node>)> {
    match node {
        Node::FunctionCall {
            identifier,
            arguments,
            ..
        } => Some((*identifier, arguments)),
        Node::ObjectExpression {
            object,
            property,
            expression_type,
            ..
        } => {
            let (property, arguments) = split_trailing_call(*property)?;
            Some((
                Node::ObjectExpression {
                    loc: object.loc().to(property.loc()),
                    object,
                    property: Box::new(property),
                    expression_type,
                },
                arguments,
            ))
        }
        _ => None,
    }
}
