use std::fmt::Write;

use calc_lexer::{LexError, Location, Token, TokenType};

use super::expressions::EXPECTED_OPERAND;
use super::ParseError;

/// A region of the input. Offsets are bytes, line and column are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    /// A span of `len` bytes starting at `location`
    pub fn at(location: Location, len: usize) -> Self {
        Self {
            start: location.offset,
            end: location.offset + len,
            line: location.line,
            column: location.column,
        }
    }
}

/// A user-facing description of a lexing or parsing problem. Every
/// diagnostic is an error; there are no warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic at a specific token with a custom message
    pub fn at_token<S: Into<String>>(token: &Token, message: S) -> Self {
        Self::at_span(span_from_token(token), message)
    }

    /// Create a diagnostic with an explicit span
    pub fn at_span<S: Into<String>>(span: Span, message: S) -> Self {
        Self {
            message: message.into(),
            span,
            help: None,
        }
    }

    pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Builds a diagnostic for a parse error. `source` locates errors that
    /// point past the last token.
    pub fn from_parse_error(err: &ParseError, source: &str) -> Self {
        let span = match err.token() {
            Some(token) => span_from_token(token),
            None => end_of_input_span(source),
        };
        let diagnostic = Self::at_span(span, err.to_string());
        match help_for_parse_error(err) {
            Some(help) => diagnostic.with_help(help),
            None => diagnostic,
        }
    }

    pub fn from_lex_error(err: &LexError) -> Self {
        let LexError::InvalidCharacter {
            character,
            location,
        } = err;
        Self::at_span(Span::at(*location, character.len_utf8()), err.to_string()).with_help(
            "only digits, '.', '+', '-', '*', '/', '^', parentheses and spaces are allowed",
        )
    }
}

fn help_for_parse_error(err: &ParseError) -> Option<&'static str> {
    match err {
        ParseError::UnexpectedToken {
            found: Some(token),
            expected,
        } => match token.token_type {
            TokenType::ParenR => Some("did you forget a matching '(' earlier?"),
            TokenType::Minus if *expected == EXPECTED_OPERAND => {
                Some("negative numbers are not supported, write (0 - x) instead")
            }
            t if t.is_operator() && *expected == EXPECTED_OPERAND => {
                Some("two operators in a row; put a number or '(' between them")
            }
            _ => None,
        },
        ParseError::UnexpectedToken {
            found: None,
            expected,
        } => match *expected {
            "')'" => Some("did you forget a closing ')'?"),
            _ => Some("the expression ends too early"),
        },
        ParseError::TrailingTokens { token } => match token.token_type {
            TokenType::ParenR => Some("did you forget a matching '(' earlier?"),
            TokenType::Number | TokenType::ParenL => {
                Some("two operands need an operator between them")
            }
            _ => None,
        },
        ParseError::UnparseableNumber { .. } => {
            Some("a number may contain at most one decimal point")
        }
        ParseError::NestingTooDeep { .. } => {
            Some("simplify the expression or raise the nesting limit")
        }
    }
}

/// Build a Span that covers an entire token
fn span_from_token(token: &Token) -> Span {
    Span::at(token.location, token.lexeme.len())
}

/// A zero-width span just past the last character of `source`
fn end_of_input_span(source: &str) -> Span {
    let mut line = 1;
    let mut column = 1;
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => {
                line += 1;
                column = 1;
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                line += 1;
                column = 1;
            }
            _ => column += 1,
        }
    }
    Span {
        start: source.len(),
        end: source.len(),
        line,
        column,
    }
}

/// The text of a 1-based line; `\n`, `\r\n` and `\r` all end a line.
fn source_line(source: &str, line: usize) -> &str {
    let bytes = source.as_bytes();
    let mut current = 1;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\n' || bytes[i] == b'\r' {
            if current == line {
                return &source[start..i];
            }
            if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                i += 1;
            }
            current += 1;
            start = i + 1;
        }
        i += 1;
    }
    if current == line {
        &source[start..]
    } else {
        ""
    }
}

/// Renders a diagnostic with the offending line and a caret marker:
///
/// ```text
/// error: unexpected trailing ParenR ')' at 1:4
///  --> 1:4
///   |
/// 1 | 2+3)
///   |    ^
///   = help: did you forget a matching '(' earlier?
/// ```
pub fn render_snippet(diag: &Diagnostic, source: &str) -> String {
    let span = diag.span;
    let gutter = span.line.to_string().len();
    let text = source_line(source, span.line);
    let marker_width = source
        .get(span.start..span.end)
        .map(|s| s.chars().count())
        .unwrap_or(0)
        .max(1);

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "error: {}", diag.message);
    let _ = writeln!(out, "{:gutter$}--> {}:{}", "", span.line, span.column);
    let _ = writeln!(out, "{:gutter$} |", "");
    let _ = writeln!(out, "{} | {}", span.line, text);
    let _ = write!(
        out,
        "{:gutter$} | {}{}",
        "",
        " ".repeat(span.column.saturating_sub(1)),
        "^".repeat(marker_width)
    );
    if let Some(help) = &diag.help {
        let _ = write!(out, "\n{:gutter$} = help: {}", "", help);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_source_line() {
        let source = "1 +\r\n2 *\r3\n4";
        assert_eq!(source_line(source, 1), "1 +");
        assert_eq!(source_line(source, 2), "2 *");
        assert_eq!(source_line(source, 3), "3");
        assert_eq!(source_line(source, 4), "4");
        assert_eq!(source_line(source, 5), "");
    }

    #[test]
    fn test_end_of_input_span() {
        let span = end_of_input_span("(1 +\n 2");
        assert_eq!(span.line, 2);
        assert_eq!(span.column, 3);
        assert_eq!(span.start, 7);
        assert_eq!(span.end, 7);
    }
}
