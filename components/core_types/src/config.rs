//! Front-end configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Display name used when no file name is known
pub const DEFAULT_FILE_NAME: &str = "main.oreo";

/// Default bound on statement/block/bracket nesting
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options threaded through lexing and parsing.
///
/// The file name only decorates diagnostics; it never changes what is
/// accepted.
///
/// # Examples
///
/// ```
/// use core_types::ParseOptions;
///
/// let options = ParseOptions::default()
///     .with_file_name("game.oreo")
///     .with_max_depth(64);
///
/// assert_eq!(options.file_name, "game.oreo");
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Name shown in `--> file:line:col:` locators
    pub file_name: String,
    /// Deepest nesting accepted before parsing fails
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Options whose display name is the final component of `path`
    pub fn for_path(path: impl AsRef<Path>) -> Self {
        let file_name = path
            .as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

        Self {
            file_name,
            ..Self::default()
        }
    }

    /// Set the display name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Set the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.file_name, DEFAULT_FILE_NAME);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_for_path_uses_file_name() {
        let options = ParseOptions::for_path("src/scripts/player.oreo");
        assert_eq!(options.file_name, "player.oreo");
    }

    #[test]
    fn test_for_path_without_file_name() {
        let options = ParseOptions::for_path("/");
        assert_eq!(options.file_name, DEFAULT_FILE_NAME);
    }
}
