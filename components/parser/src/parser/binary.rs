//! Precedence climbing over binary operators

use super::Parser;
use crate::ast::{BinaryOperator, Node};
use crate::error::ParseResult;
use crate::lexer::TokenKind;

impl Parser {
    /// Parse a primary expression and any binary operators following it.
    ///
    /// Climbing only starts when an operator follows the first operand and
    /// is itself followed by a non-operator, so `x++` or `x--` after a value
    /// are left for the caller.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Node> {
        let left = self.parse_primary()?;

        let starts_binary = self.peek().is_some_and(|token| token.is_operator())
            && self
                .peek_future(1)
                .is_some_and(|token| !token.is_operator());
        if !starts_binary {
            return Ok(left);
        }

        self.climb(left, 0)
    }

    /// Fold operators binding tighter than `min_precedence` onto `left`.
    ///
    /// Recursion happens only for a strictly higher precedence, so its
    /// depth is bounded by the number of precedence levels.
    fn climb(&mut self, mut left: Node, min_precedence: u8) -> ParseResult<Node> {
        while let Some(operator) = self.peek_binary_operator() {
            if operator.precedence() <= min_precedence {
                break;
            }
            self.skip(1);

            let mut right = self.parse_primary()?;
            while let Some(next) = self.peek_binary_operator() {
                if next.precedence() <= operator.precedence() {
                    break;
                }
                right = self.climb(right, operator.precedence())?;
            }

            left = Node::BinaryExpression {
                loc: left.loc().to(right.loc()),
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn peek_binary_operator(&self) -> Option<BinaryOperator> {
        match &self.peek()?.kind {
            TokenKind::Operator(symbol) => BinaryOperator::from_symbol(symbol),
            _ => None,
        }
    }
}
