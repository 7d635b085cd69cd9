//! Shell-like tokenizer: whitespace splitting with non-destructive
//! quoting, punctuation-run grouping, and `#` end-of-line comments.

use super::types::{Token, TokenKind};

/// Punctuation characters lexed as standalone runs by default.
pub const DEFAULT_PUNCTUATION: &str = "();<>|&";

/// End-of-line comment marker consumed by the tokenizer by default.
pub const DEFAULT_COMMENT_CHAR: char = '#';

/// Splits one comment-stripped line into a tagged token stream.
///
/// Lexical rules:
/// - whitespace separates tokens outside quotes;
/// - a quote character at token start opens a quoted token that runs to
///   the matching quote; both quotes are retained in the token text, and
///   an unterminated quote consumes the rest of the line rather than
///   failing. Mid-word, a quote is an ordinary word character (`a"b c"d`
///   lexes as `a"b`, `c"d`);
/// - adjacent punctuation characters group into one `Punct` token, so
///   `||` is a single token distinct from `|`;
/// - an unquoted comment character discards everything to end of line.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    punctuation: Vec<char>,
    comment_char: char,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_PUNCTUATION, DEFAULT_COMMENT_CHAR)
    }
}

impl Tokenizer {
    pub fn new(punctuation: &str, comment_char: char) -> Self {
        Self {
            punctuation: punctuation.chars().collect(),
            comment_char,
        }
    }

    fn is_punct(&self, c: char) -> bool {
        self.punctuation.contains(&c)
    }

    /// Tokenize one line. The output may be empty (blank or
    /// comment-only input).
    pub fn tokenize(&self, line: &str) -> Vec<Token> {
        let chars: Vec<char> = line.chars().collect();
        let len = chars.len();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < len {
            let c = chars[i];

            if c.is_whitespace() {
                i += 1;
                continue;
            }

            if c == self.comment_char {
                // Discard to end of line; a later line (inside a
                // consumed block comment's newlines) resumes normally
                while i < len && chars[i] != '\n' {
                    i += 1;
                }
                continue;
            }

            if c == '"' || c == '\'' {
                let start = i;
                i += 1;
                while i < len && chars[i] != c {
                    i += 1;
                }
                if i < len {
                    i += 1; // closing quote
                }
                tokens.push(Token {
                    text: chars[start..i].iter().collect(),
                    kind: TokenKind::Quoted,
                });
                continue;
            }

            if self.is_punct(c) {
                let start = i;
                while i < len && self.is_punct(chars[i]) {
                    i += 1;
                }
                tokens.push(Token {
                    text: chars[start..i].iter().collect(),
                    kind: TokenKind::Punct,
                });
                continue;
            }

            // Quotes encountered past this point are literal word
            // characters; only a token-initial quote opens quoted reading
            let start = i;
            while i < len {
                let c = chars[i];
                if c.is_whitespace() || c == self.comment_char || self.is_punct(c) {
                    break;
                }
                i += 1;
            }
            tokens.push(Token {
                text: chars[start..i].iter().collect(),
                kind: TokenKind::Word,
            });
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<String> {
        Tokenizer::default()
            .tokenize(line)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn whitespace_splits_words() {
        assert_eq!(texts("one two  three"), vec!["one", "two", "three"]);
    }

    #[test]
    fn blank_line_yields_nothing() {
        assert!(texts("   \t ").is_empty());
    }

    #[test]
    fn quoted_string_is_one_token_with_quotes() {
        let tokens = Tokenizer::default().tokenize(r#"say "a b c" done"#);
        assert_eq!(tokens[1].text, r#""a b c""#);
        assert_eq!(tokens[1].kind, TokenKind::Quoted);
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn single_quotes_work_too() {
        let tokens = Tokenizer::default().tokenize("say 'a b' done");
        assert_eq!(tokens[1].text, "'a b'");
        assert_eq!(tokens[1].kind, TokenKind::Quoted);
    }

    #[test]
    fn midword_quote_is_a_literal_char() {
        assert_eq!(texts(r#"ab"c d" x"#), vec!["ab\"c", "d\"", "x"]);
    }

    #[test]
    fn midword_quote_does_not_open_a_quoted_token() {
        let tokens = Tokenizer::default().tokenize(r#"a"b c"d"#);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "a\"b");
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].text, "c\"d");
        assert_eq!(tokens[1].kind, TokenKind::Word);
    }

    #[test]
    fn token_initial_quote_after_a_word_opens_quoting() {
        // The word ends at the space, so the quote IS token-initial here
        assert_eq!(texts(r#"ab "c d" x"#), vec!["ab", "\"c d\"", "x"]);
    }

    #[test]
    fn unterminated_quote_takes_rest_of_line() {
        let tokens = Tokenizer::default().tokenize(r#"say "half done"#);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, r#""half done"#);
        assert_eq!(tokens[1].kind, TokenKind::Quoted);
    }

    #[test]
    fn punctuation_splits_words() {
        assert_eq!(texts("a|b"), vec!["a", "|", "b"]);
    }

    #[test]
    fn punctuation_run_is_one_token() {
        let tokens = Tokenizer::default().tokenize("a || b");
        assert_eq!(tokens[1].text, "||");
        assert_eq!(tokens[1].kind, TokenKind::Punct);
    }

    #[test]
    fn mixed_punctuation_groups() {
        assert_eq!(texts("a |& b"), vec!["a", "|&", "b"]);
    }

    #[test]
    fn single_pipe_is_a_pipe_marker() {
        let tokens = Tokenizer::default().tokenize("a | b");
        assert!(tokens[1].is_pipe());
    }

    #[test]
    fn double_pipe_is_not_a_pipe_marker() {
        let tokens = Tokenizer::default().tokenize("a || b");
        assert!(!tokens[1].is_pipe());
    }

    #[test]
    fn quoted_pipe_is_not_a_pipe_marker() {
        let tokens = Tokenizer::default().tokenize(r#"a "|" b"#);
        assert!(!tokens[1].is_pipe());
    }

    #[test]
    fn hash_discards_rest_of_line() {
        assert_eq!(texts("hi # all a comment"), vec!["hi"]);
    }

    #[test]
    fn hash_inside_quotes_is_literal() {
        assert_eq!(texts(r##"echo "# kept""##), vec!["echo", "\"# kept\""]);
    }

    #[test]
    fn hash_glued_to_word_still_comments() {
        assert_eq!(texts("hi# all a comment"), vec!["hi"]);
    }

    #[test]
    fn custom_punctuation_set() {
        let tokenizer = Tokenizer::new("|@", '#');
        let texts: Vec<String> = tokenizer
            .tokenize("a@b (c)")
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["a", "@", "b", "(c)"]);
    }
}
