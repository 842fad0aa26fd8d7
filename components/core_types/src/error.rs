//! Diagnostics reported by the Oreo front end.
//!
//! Every lexical or syntactic failure is fatal and produces exactly one
//! [`Diagnostic`]. Rendering follows the fixed text layout
//!
//! ```text
//! error[<N>]: <message>
//! --> <file>:<line>:<column>:
//!   |
//! <line> | <excerpt>
//!   | <underline>
//!
//!
//! <hint>
//! ```
//!
//! Deciding whether to print and exit is left to the caller.

use crate::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The documented fatal error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// String (or block comment) reaches end of input unterminated
    UnterminatedString,
    /// `0b` with no binary digit after it
    InvalidBinaryLiteral,
    /// Character that starts no token
    UnexpectedCharacter,
    /// Unexpected or misplaced token inside a bracketed construct
    MisplacedToken,
    /// Unexpected token or keyword where a statement or value must start
    UnexpectedStatement,
    /// Expected identifier, comma, keyword or brace is missing
    ExpectedToken,
    /// Unclosed parenthesis or missing assignment after an identifier
    Unclosed,
    /// `case` outside of a `switch` body
    CaseOutsideSwitch,
    /// Something other than a `case` inside a `switch` body
    NonCaseInSwitch,
}

impl ErrorCode {
    /// All codes in numeric order
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::UnterminatedString,
        ErrorCode::InvalidBinaryLiteral,
        ErrorCode::UnexpectedCharacter,
        ErrorCode::MisplacedToken,
        ErrorCode::UnexpectedStatement,
        ErrorCode::ExpectedToken,
        ErrorCode::Unclosed,
        ErrorCode::CaseOutsideSwitch,
        ErrorCode::NonCaseInSwitch,
    ];

    /// Numeric code printed in `error[<N>]`
    pub fn code(self) -> u8 {
        match self {
            ErrorCode::UnterminatedString => 1,
            ErrorCode::InvalidBinaryLiteral => 2,
            ErrorCode::UnexpectedCharacter => 3,
            ErrorCode::MisplacedToken => 4,
            ErrorCode::UnexpectedStatement => 5,
            ErrorCode::ExpectedToken => 6,
            ErrorCode::Unclosed => 7,
            ErrorCode::CaseOutsideSwitch => 8,
            ErrorCode::NonCaseInSwitch => 9,
        }
    }

    /// Look a code up by number
    pub fn from_code(code: u8) -> Option<ErrorCode> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One rendered source line with its underline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Excerpt {
    /// Line number shown in the gutter
    pub line: u32,
    /// Text shown for the line
    pub text: String,
    /// `~`/`-` lead-in followed by `^` markers
    pub underline: String,
}

impl Excerpt {
    /// Create an excerpt line
    pub fn new(line: u32, text: impl Into<String>, underline: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
            underline: underline.into(),
        }
    }

    /// Excerpt whose underline is `lead` tildes followed by carets under
    /// `marked` characters (at least one caret).
    ///
    /// ```
    /// use core_types::Excerpt;
    ///
    /// let excerpt = Excerpt::marked(3, "(...", 4, 0);
    /// assert_eq!(excerpt.underline, "~~~~^");
    /// ```
    pub fn marked(line: u32, text: impl Into<String>, lead: usize, marked: usize) -> Self {
        Self::new(line, text, format!("{}{}", "~".repeat(lead), "^".repeat(marked.max(1))))
    }
}

/// A fatal lexical or syntactic diagnostic.
///
/// # Examples
///
/// ```
/// use core_types::{Diagnostic, ErrorCode, Excerpt, Location};
///
/// let diagnostic = Diagnostic::new(
///     ErrorCode::UnexpectedCharacter,
///     "Unexpected character:",
///     "main.oreo",
///     Location::new(0, 1, 1, 1),
/// )
/// .with_excerpt(Excerpt::new(1, "@", "^"))
/// .with_hint("Unknown character: '@'.");
///
/// assert!(diagnostic.to_string().starts_with("error[3]: Unexpected character:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Documented error code
    pub code: ErrorCode,
    /// Headline message
    pub message: String,
    /// File display name
    pub file_name: String,
    /// Where the problem was detected
    pub location: Location,
    /// Source excerpt lines
    pub excerpt: Vec<Excerpt>,
    /// Remediation hint, possibly multi-line
    pub hint: String,
}

impl Diagnostic {
    /// Create a diagnostic with no excerpt and no hint
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        file_name: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            file_name: file_name.into(),
            location,
            excerpt: Vec::new(),
            hint: String::new(),
        }
    }

    /// Append an excerpt line
    pub fn with_excerpt(mut self, excerpt: Excerpt) -> Self {
        self.excerpt.push(excerpt);
        self
    }

    /// Set the hint
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error[{}]: {}", self.code, self.message)?;
        writeln!(
            f,
            "--> {}:{}:{}:",
            self.file_name, self.location.line, self.location.column
        )?;
        writeln!(f, "  | ")?;
        for excerpt in &self.excerpt {
            writeln!(f, "{} | {}", excerpt.line, excerpt.text)?;
            writeln!(f, "  | {}", excerpt.underline)?;
        }
        if !self.hint.is_empty() {
            write!(f, "\n\n{}", self.hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}
