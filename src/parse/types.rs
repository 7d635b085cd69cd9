//! Types produced by the tokenizer and the record assembler.

use serde::Serialize;

/// What kind of lexical unit a [`Token`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Unquoted run of word characters.
    Word,
    /// Token that opened with a quote character; the quotes are retained
    /// in the token text.
    Quoted,
    /// Maximal run of adjacent punctuation characters. `|` and `||` are
    /// both `Punct`, but they are distinct tokens — only the single-char
    /// form acts as a pipe marker.
    Punct,
}

/// A single lexical unit: the text as it appeared on the line, tagged
/// with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    /// Whether this token is the pipe marker used for output routing.
    ///
    /// An explicit kind check, so a quoted `"|"` never counts and a
    /// doubled `||` run (one token, two chars) never counts either.
    pub fn is_pipe(&self) -> bool {
        self.kind == TokenKind::Punct && self.text == "|"
    }
}

/// The structured result of parsing one input line.
///
/// A value object: built once per call, never mutated afterwards, owned
/// entirely by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCommand {
    /// The original input line, unmodified, kept for diagnostics/echo.
    pub raw: String,
    /// The first token of the line. Never empty for non-blank input.
    pub command: String,
    /// Remaining tokens after the command and before any pipe marker,
    /// rejoined with single spaces. `None` when no such tokens exist.
    pub args: Option<String>,
    /// Everything after the first pipe marker, rejoined with single
    /// spaces. `None` when the line has no pipe marker.
    pub pipe_to: Option<String>,
}

/// Errors the parser reports to its caller.
///
/// Unterminated quotes and comments are deliberately NOT errors: the
/// malformed region passes through as literal text instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No token survived comment stripping and tokenization, so no
    /// command could be determined.
    EmptyInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "no command found in input"),
        }
    }
}

impl std::error::Error for ParseError {}
