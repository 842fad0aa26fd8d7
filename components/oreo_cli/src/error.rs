//! Error types for the CLI

use core_types::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Source file could not be read
    #[error("Could not read file '{}': {source}", .path.display())]
    Io {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Lexical or syntactic error in the source
    #[error(transparent)]
    Syntax(#[from] Diagnostic),

    /// Output could not be rendered as JSON
    #[error("Could not serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{ErrorCode, Location};

    #[test]
    fn test_io_error_names_file() {
        let err = CliError::Io {
            path: PathBuf::from("missing.oreo"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Could not read file 'missing.oreo': not found");
    }

    #[test]
    fn test_syntax_error_renders_diagnostic() {
        let diagnostic = Diagnostic::new(
            ErrorCode::UnexpectedCharacter,
            "Unexpected character:",
            "main.oreo",
            Location::new(0, 1, 1, 1),
        );
        let err: CliError = diagnostic.clone().into();
        assert_eq!(err.to_string(), diagnostic.to_string());
    }
}
