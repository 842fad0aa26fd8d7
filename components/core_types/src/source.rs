//! Source location types for Oreo diagnostics.
//!
//! Every token and AST node carries exactly one [`Location`]. Parents derive
//! their span bottom-up from the token that introduces them and the last
//! child they own.

use serde::{Deserialize, Serialize};

/// A span in the source text.
///
/// `start` and `end` are character offsets (end exclusive), `line` and
/// `column` are 1-based and describe where the span starts.
///
/// # Examples
///
/// ```
/// use core_types::Location;
///
/// let loc = Location::new(4, 9, 1, 5);
///
/// assert_eq!(loc.len(), 5);
/// assert_eq!(loc.line, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    /// Offset of the first character
    pub start: usize,
    /// Offset one past the last character
    pub end: usize,
    /// Line number of `start`
    pub line: u32,
    /// Column number of `start`
    pub column: u32,
}

impl Location {
    /// Create a new location
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Span from the start of `self` to the end of `other`.
    ///
    /// Line and column stay those of `self`. If `other` ends before `self`
    /// does, the end of `self` is kept so that `start <= end` always holds.
    ///
    /// ```
    /// use core_types::Location;
    ///
    /// let head = Location::new(0, 3, 1, 1);
    /// let tail = Location::new(10, 12, 2, 4);
    /// assert_eq!(head.to(tail), Location::new(0, 12, 1, 1));
    /// ```
    pub fn to(self, other: Location) -> Location {
        Location {
            end: self.end.max(other.end),
            ..self
        }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for zero-width spans
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
