//! Lexer and parser error types
//!
//! Every failure is fatal: the lexer and parser stop at the first problem and
//! return one of these values. [`SyntaxError::to_diagnostic`] turns it into
//! the user-facing [`Diagnostic`] with its documented error code.

use crate::lexer::Keyword;
use core_types::{Diagnostic, ErrorCode, Excerpt, Location, ParseOptions};
use std::fmt;
use thiserror::Error;

/// Result type used throughout the parser
pub type ParseResult<T> = Result<T, ParseError>;

/// The construct being parsed when an error was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// `( expr )`
    Parenthesis,
    /// `[ a, b ]`
    Array,
    /// `{ [k] = v, name = v }`
    Object,
    /// Call arguments
    Arguments,
    /// Function parameter list
    Parameters,
    /// `ident[index]`
    Index,
    /// `{ statements }`
    Block,
    /// Statement position
    Statement,
    /// Value position
    Expression,
    /// Operand of `!`
    Not,
    /// Name after `let`/`var`
    VariableName,
    /// Name after `fn`
    FunctionName,
    /// `for init, test, update body`
    ForLoop,
    /// `do body while test`
    DoWhile,
    /// `case`/`default` body
    Case,
    /// Statement-level identifier
    Assignment,
}

impl Construct {
    fn describe(self) -> &'static str {
        match self {
            Construct::Parenthesis => "parenthesis",
            Construct::Array => "array",
            Construct::Object => "object",
            Construct::Arguments => "arguments",
            Construct::Parameters => "function parameters",
            Construct::Index => "index",
            Construct::Block => "block",
            Construct::Statement => "statement",
            Construct::Expression => "expression",
            Construct::Not => "'!'",
            Construct::VariableName => "variable name",
            Construct::FunctionName => "function name",
            Construct::ForLoop => "for loop",
            Construct::DoWhile => "'do while'",
            Construct::Case => "case",
            Construct::Assignment => "assignment",
        }
    }

    /// Text shown in front of the offending token in the excerpt
    fn lead(self) -> &'static str {
        match self {
            Construct::Parenthesis | Construct::Arguments => "(...",
            Construct::Parameters => "fn (...",
            Construct::Array | Construct::Index => "[...",
            Construct::Object => "{...",
            Construct::Block => "{ ... ",
            Construct::Not => "!",
            Construct::FunctionName => "fn ",
            Construct::ForLoop => "for ... ",
            Construct::DoWhile => "do {...} ",
            Construct::Case => "case ",
            _ => "",
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Kind of bracket left open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `( )`
    Paren,
    /// `[ ]`
    Bracket,
    /// `{ }`
    Brace,
}

impl Bracket {
    /// Bracket closed by `close`
    pub fn closed_by(close: char) -> Bracket {
        match close {
            ')' => Bracket::Paren,
            ']' => Bracket::Bracket,
            _ => Bracket::Brace,
        }
    }

    /// Opening character
    pub fn open(self) -> char {
        match self {
            Bracket::Paren => '(',
            Bracket::Bracket => '[',
            Bracket::Brace => '{',
        }
    }

    /// Closing character
    pub fn close(self) -> char {
        match self {
            Bracket::Paren => ')',
            Bracket::Bracket => ']',
            Bracket::Brace => '}',
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bracket::Paren => write!(f, "parenthesis \")\""),
            Bracket::Bracket => write!(f, "bracket \"]\""),
            Bracket::Brace => write!(f, "brace \"}}\""),
        }
    }
}

/// Grammar-shape violations detected after a construct was parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// A `case` that never landed inside a `switch` body
    CaseOutsideSwitch,
    /// A `switch` body entry that is not a `case`
    NonCaseInSwitch,
}

fn or_nothing(found: &Option<String>) -> &str {
    found.as_deref().unwrap_or("nothing")
}

fn or_end_of_file(found: &Option<String>) -> &str {
    found.as_deref().unwrap_or("end of file")
}

fn truncate_preview(text: &str) -> String {
    if text.chars().count() > 15 {
        format!("{}...", text.chars().take(12).collect::<String>())
    } else {
        text.to_string()
    }
}

/// Errors raised while scanning source text
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// End of input inside a string literal
    #[error("Unterminated string literal:")]
    UnterminatedString {
        /// Opening quote character
        quote: char,
        /// Partial content seen before end of input
        content: String,
        /// From the opening quote to end of input
        location: Location,
    },
    /// `0b` with no binary digit after it
    #[error("A binary literal must have at least 1 valid digit:")]
    InvalidBinaryLiteral {
        /// The `0b` prefix
        location: Location,
    },
    /// A character that starts no token
    #[error("Unexpected character:")]
    UnexpectedCharacter {
        /// The character
        character: char,
        /// Where it was found
        location: Location,
    },
    /// End of input inside a block comment
    #[error("Unterminated block comment:")]
    UnterminatedComment {
        /// From the opening `/*` to end of input
        location: Location,
    },
}

impl LexError {
    /// Error code reported for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnterminatedString { .. } | LexError::UnterminatedComment { .. } => {
                ErrorCode::UnterminatedString
            }
            LexError::InvalidBinaryLiteral { .. } => ErrorCode::InvalidBinaryLiteral,
            LexError::UnexpectedCharacter { .. } => ErrorCode::UnexpectedCharacter,
        }
    }

    /// Where the error was detected
    pub fn location(&self) -> Location {
        match self {
            LexError::UnterminatedString { location, .. }
            | LexError::InvalidBinaryLiteral { location }
            | LexError::UnexpectedCharacter { location, .. }
            | LexError::UnterminatedComment { location } => *location,
        }
    }

    /// Preview of an unterminated string: quote plus trimmed content,
    /// shortened to 12 characters and `...` past 15
    pub fn preview(quote: char, content: &str) -> String {
        truncate_preview(&format!("{}{}", quote, content.trim_end()))
    }

    /// Render as a diagnostic
    pub fn to_diagnostic(&self, options: &ParseOptions) -> Diagnostic {
        let location = self.location();
        let line = location.line;
        let diagnostic = Diagnostic::new(
            self.code(),
            self.to_string(),
            options.file_name.as_str(),
            location,
        );

        match self {
            LexError::UnterminatedString { quote, content, .. } => {
                let preview = LexError::preview(*quote, content);
                let underline = format!("{}^", "-".repeat(preview.chars().count()));
                diagnostic
                    .with_excerpt(Excerpt::new(line, preview, underline))
                    .with_hint(format!(
                        "Did you forget to end your string?\n\
                         Erroneous example: {q}Hello, World!\n\
                         Valid example: {q}Hello, World!{q}",
                        q = quote
                    ))
            }
            LexError::InvalidBinaryLiteral { .. } => diagnostic
                .with_excerpt(Excerpt::new(line, "0b", "--^"))
                .with_hint(
                    "Try providing a valid binary literal.\n\
                     Erroneous example: '0b'\n\
                     Valid example: '0b0111010'",
                ),
            LexError::UnexpectedCharacter { character, .. } => diagnostic
                .with_excerpt(Excerpt::new(line, character.to_string(), "^"))
                .with_hint(format!(
                    "Unknown character: '{}'.\nExpected an expression or statement.",
                    character
                )),
            LexError::UnterminatedComment { .. } => diagnostic
                .with_excerpt(Excerpt::marked(line, "/* ... ", 7, 1))
                .with_hint("Incomplete comment: '/* ... '.\nExpected '*/' to close the comment."),
        }
    }
}

/// Errors raised while building the AST
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A token of the wrong class, such as a keyword where a name belongs
    #[error("Expected {expected} when parsing {context}, got '{}'", or_nothing(.found))]
    ExpectedTokenType {
        /// Description of the token class
        expected: &'static str,
        /// Enclosing construct
        context: Construct,
        /// Text of the token found, `None` at end of input
        found: Option<String>,
        /// Where it was found
        location: Location,
    },
    /// A specific token (comma, brace, keyword) is missing
    #[error("Expected {expected} when parsing {context}, got '{}'", or_nothing(.found))]
    ExpectedTokenValue {
        /// The missing token, quoted
        expected: &'static str,
        /// Enclosing construct
        context: Construct,
        /// Text of the token found, `None` at end of input
        found: Option<String>,
        /// Where it was found
        location: Location,
    },
    /// A token that cannot appear here
    #[error("Unexpected token found while parsing {context}:")]
    UnexpectedToken {
        /// Enclosing construct
        context: Construct,
        /// Text of the token found, `None` at end of input
        found: Option<String>,
        /// Where it was found
        location: Location,
    },
    /// A keyword that cannot start a statement
    #[error("Unexpected keyword:")]
    UnexpectedKeyword {
        /// The keyword
        keyword: Keyword,
        /// Where it was found
        location: Location,
    },
    /// A bracket that is never closed
    #[error("Expected closing {kind} when parsing {context}, got '{}'", or_nothing(.found))]
    UnclosedBracket {
        /// Which bracket
        kind: Bracket,
        /// Enclosing construct
        context: Construct,
        /// Token found instead of the closer, `None` at end of input
        found: Option<String>,
        /// The opening bracket
        location: Location,
    },
    /// `case` outside `switch`, or a non-case inside one
    #[error("{}", mismatch_message(.mismatch))]
    StructuralMismatch {
        /// Which violation
        mismatch: Mismatch,
        /// Short rendering of the offending construct
        snippet: String,
        /// The offending node
        location: Location,
    },
    /// Input ended where more was required
    #[error("{}", eof_message(.context, .after))]
    UnexpectedEof {
        /// Enclosing construct
        context: Construct,
        /// Text of the last token before end of input
        after: String,
        /// The last token before end of input
        location: Location,
    },
    /// Statements, blocks or brackets nested past the configured limit
    #[error("Nesting exceeds the limit of {limit} levels")]
    NestingTooDeep {
        /// The configured limit
        limit: usize,
        /// Where the limit was crossed
        location: Location,
    },
}

fn mismatch_message(mismatch: &Mismatch) -> &'static str {
    match mismatch {
        Mismatch::CaseOutsideSwitch => {
            "'case' was found out of a switch statement. Did you mismatch a '{ }' pair?"
        }
        Mismatch::NonCaseInSwitch => {
            "Found a 'non-case' object in a switch statement. Only case statements are allowed."
        }
    }
}

fn eof_message(context: &Construct, after: &str) -> String {
    match context {
        Construct::Assignment => {
            format!("Expected assignment after identifier '{}', got nothing.", after)
        }
        Construct::Expression => "Expected an expression, got 'end of file'".to_string(),
        _ => format!("Unexpected end of file while parsing {}", context),
    }
}

impl ParseError {
    /// Error code reported for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::ExpectedTokenType { .. } | ParseError::ExpectedTokenValue { .. } => {
                ErrorCode::ExpectedToken
            }
            ParseError::UnexpectedToken { context, .. } => match context {
                Construct::Expression => ErrorCode::UnexpectedStatement,
                _ => ErrorCode::MisplacedToken,
            },
            ParseError::UnexpectedKeyword { .. } => ErrorCode::UnexpectedStatement,
            ParseError::UnclosedBracket { context, .. } => match context {
                Construct::Parenthesis => ErrorCode::Unclosed,
                Construct::Block => ErrorCode::ExpectedToken,
                _ => ErrorCode::MisplacedToken,
            },
            ParseError::StructuralMismatch { mismatch, .. } => match mismatch {
                Mismatch::CaseOutsideSwitch => ErrorCode::CaseOutsideSwitch,
                Mismatch::NonCaseInSwitch => ErrorCode::NonCaseInSwitch,
            },
            ParseError::UnexpectedEof { context, .. } => match context {
                Construct::Expression => ErrorCode::UnexpectedStatement,
                Construct::Assignment | Construct::Parenthesis => ErrorCode::Unclosed,
                _ => ErrorCode::ExpectedToken,
            },
            ParseError::NestingTooDeep { .. } => ErrorCode::MisplacedToken,
        }
    }

    /// Where the error was detected
    pub fn location(&self) -> Location {
        match self {
            ParseError::ExpectedTokenType { location, .. }
            | ParseError::ExpectedTokenValue { location, .. }
            | ParseError::UnexpectedToken { location, .. }
            | ParseError::UnexpectedKeyword { location, .. }
            | ParseError::UnclosedBracket { location, .. }
            | ParseError::StructuralMismatch { location, .. }
            | ParseError::UnexpectedEof { location, .. }
            | ParseError::NestingTooDeep { location, .. } => *location,
        }
    }

    /// Render as a diagnostic
    pub fn to_diagnostic(&self, options: &ParseOptions) -> Diagnostic {
        let location = self.location();
        let line = location.line;
        let diagnostic = Diagnostic::new(
            self.code(),
            self.to_string(),
            options.file_name.as_str(),
            location,
        );

        match self {
            ParseError::ExpectedTokenType {
                expected,
                context,
                found,
                ..
            } => {
                let shown = found.as_deref().unwrap_or("");
                let lead = context.lead();
                let hint = match context {
                    Construct::VariableName => "Expected variable name as an identifier.".to_string(),
                    Construct::FunctionName => "Expected function name as an identifier.".to_string(),
                    Construct::Parameters => "Expected parameter name as an identifier.".to_string(),
                    _ => format!("Expected {}.", expected),
                };
                diagnostic
                    .with_excerpt(Excerpt::marked(
                        line,
                        format!("{}{}", lead, shown),
                        lead.chars().count(),
                        shown.chars().count(),
                    ))
                    .with_hint(format!("Incomplete statement: '{}{}'.\n{}", lead, shown, hint))
            }
            ParseError::ExpectedTokenValue {
                expected,
                context,
                found,
                ..
            } => {
                let shown = found.as_deref().unwrap_or("");
                let lead = context.lead();
                let excerpt = Excerpt::marked(
                    line,
                    format!("{}{}", lead, shown),
                    lead.chars().count(),
                    shown.chars().count(),
                );
                let hint = match context {
                    Construct::ForLoop => {
                        "Incomplete statement: 'for ... '.\nExpected 'comma' in for loop.".to_string()
                    }
                    Construct::DoWhile => "Incomplete statement: 'do {...} '.\n\
                         Expected 'while' to finish 'do-while' statement.\n\
                         Did you forget to include the condition?\n\
                         Erroneous example: do {};\n\
                         Valid example: do {} while x == 1;"
                        .to_string(),
                    Construct::Block => format!(
                        "Got: '{}'.\nExpected body.\nDid you forget your body?\n\n\
                         Erroneous example: do let x = 3; while 5 == 2;\n\
                         Valid example:\ndo {{\n\tlet x = 3;\n}} while 5 == 2;",
                        or_end_of_file(found)
                    ),
                    _ => format!("Got: '{}'.\nExpected {}.", or_end_of_file(found), expected),
                };
                diagnostic.with_excerpt(excerpt).with_hint(hint)
            }
            ParseError::UnexpectedToken { context, found, .. } => {
                let shown = or_end_of_file(found);
                let hint = match context {
                    Construct::Expression => {
                        format!("Unexpected token: '{}'.\nAn expression was expected.", shown)
                    }
                    Construct::Statement | Construct::Case => format!(
                        "Unknown or Incomplete statement: '{}'.\nExpected an expression or statement.",
                        shown
                    ),
                    _ if found.as_deref() == Some(",") => "Got token: ','.\n\
                         Expected an expression or value.\n\
                         Did you accidentally misplace a \",\"?"
                        .to_string(),
                    _ => format!("Got token: '{}'.\nExpected an expression or value.", shown),
                };
                let lead = context.lead();
                diagnostic
                    .with_excerpt(Excerpt::marked(
                        line,
                        format!("{}{}", lead, found.as_deref().unwrap_or("")),
                        lead.chars().count(),
                        found.as_deref().map_or(1, |text| text.chars().count()),
                    ))
                    .with_hint(hint)
            }
            ParseError::UnexpectedKeyword { keyword, .. } => diagnostic
                .with_excerpt(Excerpt::new(line, keyword.as_str(), "^"))
                .with_hint(format!(
                    "Unknown or Incomplete statement: '{}'.\nExpected an expression or statement.",
                    keyword
                )),
            ParseError::UnclosedBracket {
                kind,
                context,
                found,
                location,
            } => {
                let snippet = format!("{}...", kind.open());
                let hint = match (context, found) {
                    (Construct::Parenthesis, _) => format!(
                        "Incomplete statement: '(...'.\nExpected ')' to close '(' at {}:{}.",
                        location.line, location.column
                    ),
                    (Construct::Block, _) => {
                        "Incomplete body: '{ ... '.\nExpected end of body.".to_string()
                    }
                    (Construct::Arguments | Construct::Parameters, None) => {
                        "Found 'end of file' while parsing function.\n\
                         Expected ')' to close function argument."
                            .to_string()
                    }
                    (_, found) => format!(
                        "Found '{}' while parsing {}.\nExpected '{}' to close {}.",
                        or_end_of_file(found),
                        context,
                        kind.close(),
                        context
                    ),
                };
                let excerpt = match context {
                    Construct::Block => Excerpt::marked(line, "{ ... ", 6, 1),
                    _ => Excerpt::marked(line, snippet, 4, 1),
                };
                diagnostic.with_excerpt(excerpt).with_hint(hint)
            }
            ParseError::StructuralMismatch {
                mismatch, snippet, ..
            } => {
                let width = snippet.chars().count();
                match mismatch {
                    Mismatch::CaseOutsideSwitch => diagnostic
                        .with_excerpt(Excerpt::marked(
                            line,
                            snippet.as_str(),
                            5.min(width),
                            width.saturating_sub(5),
                        ))
                        .with_hint(format!(
                            "Got: '{}'.\nDid you mismatch a '{{ }}' pair?",
                            snippet
                        )),
                    Mismatch::NonCaseInSwitch => diagnostic
                        .with_excerpt(Excerpt::marked(
                            line,
                            snippet.as_str(),
                            width.saturating_sub(5),
                            5,
                        ))
                        .with_hint("Only case statements are allowed in a switch statement."),
                }
            }
            ParseError::UnexpectedEof { context, after, .. } => {
                let width = after.chars().count();
                let hint = match context {
                    Construct::Assignment => format!(
                        "Incomplete statement: '{}'.\n\
                         Expected 'assignment' after variable name.\n\
                         Did you forget to assign a value?\n\
                         Erroneous example: x;\n\
                         Valid example: x = 3;",
                        after
                    ),
                    Construct::Expression => {
                        "Unexpected token: 'end of file'.\nAn expression was expected.".to_string()
                    }
                    _ => format!(
                        "Incomplete statement: '{}'.\nExpected {} before end of file.",
                        truncate_preview(after),
                        context
                    ),
                };
                diagnostic
                    .with_excerpt(Excerpt::marked(line, after.as_str(), width, 1))
                    .with_hint(hint)
            }
            ParseError::NestingTooDeep { limit, .. } => diagnostic
                .with_excerpt(Excerpt::new(line, "...", "^^^"))
                .with_hint(format!(
                    "Code nested deeper than {} levels cannot be parsed.\n\
                     Try moving the innermost part into a function.",
                    limit
                )),
        }
    }
}

/// Any fatal error from lexing or parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    /// Failure while scanning
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Failure while parsing
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    /// Error code reported for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            SyntaxError::Lex(error) => error.code(),
            SyntaxError::Parse(error) => error.code(),
        }
    }

    /// Render as a diagnostic
    pub fn to_diagnostic(&self, options: &ParseOptions) -> Diagnostic {
        match self {
            SyntaxError::Lex(error) => error.to_diagnostic(options),
            SyntaxError::Parse(error) => error.to_diagnostic(options),
        }
    }
}
