pub mod command;
pub mod comments;
pub mod tokenize;
pub mod types;

pub use command::LineParser;
pub use comments::strip_comments;
pub use tokenize::Tokenizer;
pub use types::{ParseError, ParsedCommand, Token, TokenKind};
