//! C and C++ style comment removal, quote-aware.
//!
//! Runs before tokenization. Shell-style `#` comments are not handled
//! here — the tokenizer consumes those itself.

/// Remove `//` and `/* */` comments from a line, leaving quoted strings
/// untouched.
///
/// Every removed comment span becomes a single space so adjacent tokens
/// do not get glued together (`a/**/b` turns into `a b`, not `ab`).
/// A `//` comment runs to the end of its own line; a `/* */` comment
/// stops at the nearest `*/` and may span embedded newlines.
///
/// Malformed input degrades gracefully rather than failing: an
/// unterminated quote emits the quote character alone and scanning
/// resumes at the next character, and an unterminated `/*` emits the
/// `/` alone. Either way the rest of the text is scanned normally, so
/// a `//` following an unclosed quote still counts as a comment.
pub fn strip_comments(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;

    while i < len {
        let c = chars[i];

        if c == '"' || c == '\'' {
            if let Some(end) = quoted_span_end(&chars, i) {
                out.extend(chars[i..end].iter());
                i = end;
            } else {
                out.push(c);
                i += 1;
            }
            continue;
        }

        if c == '/' && i + 1 < len {
            match chars[i + 1] {
                '/' => {
                    // To end of line; the newline itself is preserved
                    while i < len && chars[i] != '\n' {
                        i += 1;
                    }
                    out.push(' ');
                    continue;
                }
                '*' => {
                    if let Some(end) = block_comment_end(&chars, i + 2) {
                        out.push(' ');
                        i = end;
                        continue;
                    }
                    // No closing */ anywhere: the / is literal text
                }
                _ => {}
            }
        }

        out.push(c);
        i += 1;
    }

    out
}

/// Find the end of a quoted span opening at `start` (index one past the
/// closing quote). The body is a sequence of backslash-escaped pairs or
/// characters that are neither backslash nor the quote; a backslash with
/// nothing after it, or a missing closing quote, means no span.
fn quoted_span_end(chars: &[char], start: usize) -> Option<usize> {
    let quote = chars[start];
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        if c == '\\' {
            if i + 1 >= chars.len() {
                return None;
            }
            i += 2;
        } else if c == quote {
            return Some(i + 1);
        } else {
            i += 1;
        }
    }
    None
}

/// Find the index one past the NEAREST `*/` at or after `from`.
fn block_comment_end(chars: &[char], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 1 < chars.len() {
        if chars[i] == '*' && chars[i + 1] == '/' {
            return Some(i + 2);
        }
        i += 1;
    }
    None
}
