//! Runs the lexer or parser over one source and renders the result
//!
//! The driver never prints or exits; the binary decides what to do with the
//! returned text or error.

use crate::cli::{Cli, Command, Input};
use crate::error::{CliError, CliResult};
use core_types::ParseOptions;
use log::info;
use serde::Serialize;
use std::fs;

/// Lexes or parses Oreo source with fixed options
pub struct Driver {
    options: ParseOptions,
    pretty: bool,
}

impl Driver {
    /// Create a driver
    ///
    /// # Example
    /// ```
    /// use core_types::ParseOptions;
    /// use oreo_cli::Driver;
    ///
    /// let driver = Driver::new(ParseOptions::default());
    /// let json = driver.parse_to_json("x = 1").unwrap();
    /// assert!(json.contains("\"AssignmentExpression\""));
    /// ```
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            pretty: false,
        }
    }

    /// Driver configured from command-line arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.options()).with_pretty(cli.pretty)
    }

    /// Enable pretty-printed JSON
    pub fn with_pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }

    /// Options used for every run
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Check if pretty-printing is enabled
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Run a command and return the text to print
    pub fn run(&self, command: &Command) -> CliResult<String> {
        let source = read_source(command.input())?;
        match command {
            Command::Tokens(_) => self.tokens_to_json(&source),
            Command::Parse(_) => self.parse_to_json(&source),
        }
    }

    /// Tokenize `source` and render the tokens
    pub fn tokens_to_json(&self, source: &str) -> CliResult<String> {
        let tokens = parser::tokenize(source, &self.options)?;
        info!("{}: {} tokens", self.options.file_name, tokens.len());
        self.render(&tokens)
    }

    /// Parse `source` and render its top-level statements
    pub fn parse_to_json(&self, source: &str) -> CliResult<String> {
        let ast = parser::parse_source(source, &self.options)?;
        info!("{}: {} top-level statements", self.options.file_name, ast.len());
        self.render(&ast)
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

/// Inline source, or the contents of the input file
fn read_source(input: &Input) -> CliResult<String> {
    if let Some(source) = &input.eval {
        return Ok(source.clone());
    }
    match &input.file {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        }),
        None => Ok(String::new()),
    }
}
