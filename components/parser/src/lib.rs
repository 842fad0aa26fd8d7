//! Oreo Parser Component
//!
//! Turns Oreo source text into a token list and a located AST. Every
//! lexical or syntactic problem is fatal and comes back as one
//! [`Diagnostic`]; printing it and exiting is left to the caller.
//!
//! # Overview
//!
//! - [`Lexer`] - Tokenizes Oreo source code
//! - [`Token`] - Classified token with its source span
//! - [`Parser`] - Recursive descent parser producing the AST
//! - [`Node`] - Abstract Syntax Tree node types
//! - [`SyntaxError`] - Lexer or parser failure, convertible to a [`Diagnostic`]
//!
//! # Example
//!
//! ```
//! use core_types::ParseOptions;
//! use parser::{parse_source, Node};
//!
//! let ast = parse_source("let x = 1 + 2 * 3", &ParseOptions::default()).unwrap();
//! assert!(matches!(ast[0], Node::VariableDeclaration { .. }));
//!
//! let err = parse_source("let s = \"open", &ParseOptions::default()).unwrap_err();
//! assert_eq!(err.code.code(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{
    AssignmentOperator, BinaryOperator, CaseMatch, CaseStatement, CaseType, MemberSeparator,
    Node, ObjectEntry, UpdateOperator,
};
pub use error::{LexError, ParseError, ParseResult, SyntaxError};
pub use lexer::{Keyword, Lexer, Token, TokenKind};
pub use parser::{Checkpoint, Parser};

use core_types::{Diagnostic, ParseOptions};

/// Tokenize `source`, rendering any failure as a diagnostic
pub fn tokenize(source: &str, options: &ParseOptions) -> Result<Vec<Token>, Diagnostic> {
    Lexer::new(source)
        .tokenize()
        .map_err(|err| err.to_diagnostic(options))
}

/// Tokenize and parse `source` into its top-level statements
pub fn parse_source(source: &str, options: &ParseOptions) -> Result<Vec<Node>, Diagnostic> {
    parse_checked(source, options).map_err(|err| err.to_diagnostic(options))
}

fn parse_checked(source: &str, options: &ParseOptions) -> Result<Vec<Node>, SyntaxError> {
    let tokens = Lexer::new(source).tokenize()?;
    let ast = Parser::new(tokens, options.clone()).parse()?;
    Ok(ast)
}
