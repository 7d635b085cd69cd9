//! Record assembly: run the comment stripper and tokenizer over one
//! line, then split the token stream at the first pipe marker.

use super::comments::strip_comments;
use super::tokenize::Tokenizer;
use super::types::{ParseError, ParsedCommand, Token};
use crate::config::Config;

/// Stateless parser value: holds only the tokenizer settings, shares
/// nothing between calls, safe to use from any number of callers.
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    tokenizer: Tokenizer,
}

impl LineParser {
    /// Build a parser with the punctuation set and comment character
    /// from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            tokenizer: Tokenizer::new(
                &config.tokenizer.punctuation_chars,
                config.tokenizer.comment_char,
            ),
        }
    }

    /// Parse one raw line into a [`ParsedCommand`].
    ///
    /// Returns [`ParseError::EmptyInput`] when nothing but whitespace
    /// and comments remains.
    pub fn parse(&self, raw: &str) -> Result<ParsedCommand, ParseError> {
        let stripped = strip_comments(raw);
        let tokens = self.tokenizer.tokenize(&stripped);
        log::trace!("line {raw:?} lexed to {tokens:?}");
        assemble(raw, &tokens)
    }
}

/// Split the token stream at the first pipe marker and build the record.
fn assemble(raw: &str, tokens: &[Token]) -> Result<ParsedCommand, ParseError> {
    let first = tokens.first().ok_or(ParseError::EmptyInput)?;
    let command = first.text.clone();

    let (working, pipe_to) = match tokens.iter().position(Token::is_pipe) {
        Some(p) => {
            // The token just before the marker is dropped along with the
            // marker and everything after it; `command` was captured
            // above, before this truncation.
            (&tokens[..p.saturating_sub(1)], join(&tokens[p + 1..]))
        }
        None => (tokens, None),
    };

    let args = if working.len() > 1 {
        join(&working[1..])
    } else {
        None
    };

    Ok(ParsedCommand {
        raw: raw.to_string(),
        command,
        args,
        pipe_to,
    })
}

/// Rejoin token texts with single spaces; `None` for an empty slice.
fn join(tokens: &[Token]) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }
    Some(
        tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
    )
}
