//! Identifier-led forms: assignment, update, call, member access, indexing

use super::Parser;
use crate::ast::{AssignmentOperator, MemberSeparator, Node, UpdateOperator};
use crate::error::{Construct, ParseError, ParseResult};
use crate::lexer::{Token, TokenKind};

impl Parser {
    /// Parse an identifier and whatever it leads.
    ///
    /// With `expect_assignment` set (statement position), a name at the very
    /// end of input is an error rather than a bare leaf.
    pub(crate) fn parse_identifier(&mut self, expect_assignment: bool) -> ParseResult<Node> {
        let identifier = match self.next_token() {
            Some(token) => token,
            None => return Err(self.eof_error(Construct::Expression)),
        };

        let Some(next) = self.peek().cloned() else {
            if expect_assignment {
                return Err(ParseError::UnexpectedEof {
                    context: Construct::Assignment,
                    after: identifier.text(),
                    location: identifier.loc,
                });
            }
            return Ok(Node::Leaf(identifier));
        };
        let after = self.peek_future(1).cloned();

        match &next.kind {
            TokenKind::Operator(op) if op == "+" || op == "-" => {
                match after {
                    Some(second) if second.is_operator_symbol(op) => {
                        self.skip(2);
                        let operator = if op == "+" {
                            UpdateOperator::Increment
                        } else {
                            UpdateOperator::Decrement
                        };
                        Ok(Node::UpdateExpression {
                            loc: identifier.loc.to(second.loc),
                            identifier,
                            operator,
                        })
                    }
                    Some(second) if second.is_punct('=') => {
                        self.compound_assignment(identifier, op)
                    }
                    _ => Ok(Node::Leaf(identifier)),
                }
            }
            TokenKind::Operator(op) if after.as_ref().is_some_and(|t| t.is_punct('=')) => {
                self.compound_assignment(identifier, op)
            }
            TokenKind::Punctuation('=') => {
                self.skip(1);
                self.parse_assignment(identifier, AssignmentOperator::Assign)
            }
            TokenKind::Punctuation('(') => self.parse_call(Node::Leaf(identifier)),
            TokenKind::Punctuation('.' | ':') => self.parse_member_chain(Node::Leaf(identifier)),
            TokenKind::Punctuation('[') => self.parse_index(Node::Leaf(identifier)),
            _ => Ok(Node::Leaf(identifier)),
        }
    }

    /// `name op= value` for the arithmetic operators; anything else such as
    /// `x < = y` leaves the name as a leaf
    fn compound_assignment(&mut self, identifier: Token, op: &str) -> ParseResult<Node> {
        match AssignmentOperator::compound(op) {
            Some(operator) => {
                self.skip(2);
                self.parse_assignment(identifier, operator)
            }
            None => Ok(Node::Leaf(identifier)),
        }
    }

    fn parse_assignment(
        &mut self,
        identifier: Token,
        operator: AssignmentOperator,
    ) -> ParseResult<Node> {
        let value = self.nested(Parser::parse_expression)?;
        Ok(Node::AssignmentExpression {
            loc: identifier.loc.to(value.loc()),
            identifier,
            operator,
            value: Box::new(value),
        })
    }

    /// `callee(arguments)`, optionally followed by a member access
    pub(crate) fn parse_call(&mut self, callee: Node) -> ParseResult<Node> {
        let open = self.here();
        self.skip(1);

        let (arguments, close) = self.nested(|parser| {
            parser.parse_delimited(open, ')', Construct::Arguments, Parser::parse_expression)
        })?;
        let call = Node::FunctionCall {
            loc: callee.loc().to(close),
            identifier: Box::new(callee),
            arguments,
        };
        self.parse_member_chain(call)
    }

    /// `object.property` or `object:property`.
    ///
    /// Only taken when an identifier follows the separator, so `case x: y`
    /// keeps `x` as the case value when `y` is not a name.
    pub(crate) fn parse_member_chain(&mut self, object: Node) -> ParseResult<Node> {
        let separator = match self.peek().map(|token| &token.kind) {
            Some(TokenKind::Punctuation(c)) => MemberSeparator::from_char(*c),
            _ => None,
        };
        let Some(expression_type) = separator else {
            return Ok(object);
        };
        if !self.peek_future(1).is_some_and(Token::is_identifier) {
            return Ok(object);
        }
        self.skip(1);

        let property = self.nested(|parser| parser.parse_identifier(false))?;
        Ok(Node::ObjectExpression {
            loc: object.loc().to(property.loc()),
            object: Box::new(object),
            property: Box::new(property),
            expression_type,
        })
    }

    /// `target[index]`, `target[index] = value`, and chains such as
    /// `target[i][j]` or `target[i](args)`
    pub(crate) fn parse_index(&mut self, target: Node) -> ParseResult<Node> {
        let open = self.here();
        self.skip(1);

        let index = self.nested(Parser::parse_expression)?;
        let close = self.expect_closing(open, ']', Construct::Index)?;

        if self.eat_punct('=').is_some() {
            let value = self.nested(Parser::parse_expression)?;
            return Ok(Node::PropertyAssignment {
                loc: target.loc().to(value.loc()),
                identifier: Box::new(target),
                index: Box::new(index),
                value: Box::new(value),
            });
        }

        let access = Node::PropertyAccess {
            loc: target.loc().to(close),
            identifier: Box::new(target),
            index: Box::new(index),
        };
        if self.check_punct('(') {
            self.parse_call(access)
        } else if self.check_punct('[') {
            self.nested(|parser| parser.parse_index(access))
        } else {
            self.parse_member_chain(access)
        }
    }
}
