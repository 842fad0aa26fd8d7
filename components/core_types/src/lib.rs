//! Shared types for the Oreo front end.
//!
//! This crate provides the foundational types used by the lexer, the parser
//! and the command-line driver: source locations, configuration and fatal
//! diagnostics.
//!
//! # Overview
//!
//! - [`Location`] - Span of a token or AST node
//! - [`ParseOptions`] - File display name and nesting limit
//! - [`Diagnostic`] - A fatal error with source excerpt and hint
//! - [`ErrorCode`] - The documented error codes 1..=9
//!
//! # Examples
//!
//! ```
//! use core_types::{Diagnostic, ErrorCode, Location, ParseOptions};
//!
//! let options = ParseOptions::default().with_file_name("hello.oreo");
//! let error = Diagnostic::new(
//!     ErrorCode::UnterminatedString,
//!     "Unterminated string literal:",
//!     &options.file_name,
//!     Location::new(0, 4, 1, 1),
//! );
//!
//! assert_eq!(error.code.code(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod config;
mod error;
mod source;

pub use config::{ParseOptions, DEFAULT_FILE_NAME, DEFAULT_MAX_DEPTH};
pub use error::{Diagnostic, ErrorCode, Excerpt};
pub use source::Location;
