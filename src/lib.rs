//! lineparse: a single-line command parser for a shell-like interpreter.
//!
//! Given one raw input line, the parser strips C and C++ style comments
//! (quote-aware), tokenizes the remainder under shell-like quoting and
//! punctuation rules, and splits the token stream at the first pipe
//! marker into a [`ParsedCommand`]: the command word, its arguments, and
//! an optional pipe destination. It never executes anything.
//!
//! # Architecture
//!
//! - **[`parse`]** — the two-phase parser: comment stripper, state-machine
//!   tokenizer, pipe splitter / record assembler.
//! - **[`config`]** — configuration loading: embedded defaults + user
//!   overlay merge.
//! - **[`logging`]** — stderr + session-file logger setup for the binary.
//!
//! ```
//! let record = lineparse::parse("sort data.txt /* stale */ -r").unwrap();
//! assert_eq!(record.command, "sort");
//! assert_eq!(record.args.as_deref(), Some("data.txt -r"));
//! assert!(record.pipe_to.is_none());
//! ```

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Global logger installation for the interactive binary.
pub mod logging;
/// Line parsing: comment stripper, tokenizer, pipe splitter.
pub mod parse;

pub use parse::{LineParser, ParseError, ParsedCommand, Token, TokenKind};

/// Parse one line with the default tokenizer settings.
///
/// This is the main entry point for tests and simple usage.
/// Build a [`LineParser`] from a [`config::Config`] to customize the
/// punctuation set or comment character.
pub fn parse(raw_line: &str) -> Result<ParsedCommand, ParseError> {
    LineParser::default().parse(raw_line)
}
