//! Command-line arguments for the `oreo` binary

use clap::{ArgAction, Args, Parser, Subcommand};
use core_types::{ParseOptions, DEFAULT_MAX_DEPTH};
use log::LevelFilter;
use std::path::PathBuf;

/// Lex or parse Oreo source and print the result as JSON
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "oreo", version, about = "Oreo language front end")]
pub struct Cli {
    /// What to produce
    #[command(subcommand)]
    pub command: Command,

    /// File name shown in diagnostics
    #[arg(short, long, global = true)]
    pub name: Option<String>,

    /// Deepest nesting of statements and brackets accepted
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Pretty-print the JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Stage to run
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the token list
    Tokens(Input),
    /// Print the top-level AST nodes
    Parse(Input),
}

/// Where the source comes from
#[derive(Args, Debug, Clone, PartialEq)]
pub struct Input {
    /// Source file
    #[arg(required_unless_present = "eval", conflicts_with = "eval")]
    pub file: Option<PathBuf>,

    /// Inline source instead of a file
    #[arg(short, long)]
    pub eval: Option<String>,
}

impl Command {
    /// Source input of the command
    pub fn input(&self) -> &Input {
        match self {
            Command::Tokens(input) | Command::Parse(input) => input,
        }
    }
}

impl Cli {
    /// Arguments for `oreo parse <file>` with default flags
    pub fn with_file(file: impl Into<PathBuf>) -> Self {
        Self {
            command: Command::Parse(Input {
                file: Some(file.into()),
                eval: None,
            }),
            name: None,
            max_depth: DEFAULT_MAX_DEPTH,
            pretty: false,
            verbose: 0,
        }
    }

    /// Parse options derived from the flags and the input file.
    ///
    /// `--name` wins over the file's own name.
    pub fn options(&self) -> ParseOptions {
        let options = match &self.command.input().file {
            Some(file) => ParseOptions::for_path(file),
            None => ParseOptions::default(),
        };
        let options = match &self.name {
            Some(name) => options.with_file_name(name.as_str()),
            None => options,
        };
        options.with_max_depth(self.max_depth)
    }

    /// Log level selected by `-v`
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
