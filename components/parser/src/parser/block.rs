//! Block parsing

use super::Parser;
use crate::ast::Node;
use crate::error::{Bracket, Construct, ParseError, ParseResult};
use core_types::Location;

impl Parser {
    /// Parse `{ statements }`
    pub(crate) fn parse_block(&mut self) -> ParseResult<Node> {
        let (body, loc) = self.parse_block_parts()?;
        Ok(Node::BlockStatement { body, loc })
    }

    /// Parse `{ statements }` into its statements and overall location
    pub(crate) fn parse_block_parts(&mut self) -> ParseResult<(Vec<Node>, Location)> {
        if !self.check_punct('{') {
            return Err(ParseError::ExpectedTokenValue {
                expected: "\"{\"",
                context: Construct::Block,
                found: self.found_text(),
                location: self.here(),
            });
        }

        let open = self.here();
        self.nested(|parser| {
            parser.skip(1);

            let mut body = Vec::new();
            let close = loop {
                if let Some(close) = parser.eat_punct('}') {
                    break close;
                }
                if parser.eof() {
                    return Err(ParseError::UnclosedBracket {
                        kind: Bracket::Brace,
                        context: Construct::Block,
                        found: None,
                        location: open,
                    });
                }

                body.push(parser.parse_statement()?);
                parser.skip_semicolon();
            };

            Ok((body, open.to(close)))
        })
    }

    /// A block when one starts here, a single statement otherwise
    pub(crate) fn parse_body(&mut self) -> ParseResult<Node> {
        if self.check_punct('{') {
            self.parse_block()
        } else {
            self.parse_statement()
        }
    }
}
