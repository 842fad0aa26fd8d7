//! Oreo front-end CLI Library
//!
//! Provides the argument model and the [`Driver`] that lexes or parses a
//! source and renders the result for the `oreo` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod driver;
pub mod error;

pub use cli::{Cli, Command, Input};
pub use driver::Driver;
pub use error::{CliError, CliResult};
