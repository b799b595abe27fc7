use std::num::ParseFloatError;

use calc_lexer::Token;
use nom::error::{ErrorKind, ParseError as NomParseError};
use thiserror::Error;

use super::TokenSlice;

/// Errors that can occur while parsing a token sequence.
///
/// Every variant is fatal to the current parse and carries the token it
/// refers to for diagnostics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A construct had begun but the next token does not continue it
    #[error("unexpected {}, expected {expected}", found_text(.found.as_ref()))]
    UnexpectedToken {
        /// What the grammar would have accepted here
        expected: &'static str,
        /// The offending token, `None` at end of input
        found: Option<Token>,
    },

    /// A complete expression was parsed but tokens remain
    #[error("unexpected trailing {} at {}", .token.describe(), .token.location)]
    TrailingTokens {
        /// The first leftover token
        token: Token,
    },

    /// A number token's text is not a valid floating-point literal
    #[error("cannot parse '{}' at {} as a number", .token.lexeme, .token.location)]
    UnparseableNumber {
        /// The number token
        token: Token,
        /// Why the conversion failed
        source: ParseFloatError,
    },

    /// Parentheses or exponents are nested beyond the configured limit
    #[error("expression is nested more than {limit} levels deep")]
    NestingTooDeep {
        /// The configured maximum depth
        limit: usize,
        /// The token that would have opened the next level
        token: Option<Token>,
    },
}

fn found_text(found: Option<&Token>) -> String {
    match found {
        Some(token) => format!("{} at {}", token.describe(), token.location),
        None => "end of input".to_string(),
    }
}

impl ParseError {
    pub(crate) fn unexpected(expected: &'static str, found: Option<&Token>) -> Self {
        ParseError::UnexpectedToken {
            expected,
            found: found.cloned(),
        }
    }

    /// The token the error points at, if any
    pub fn token(&self) -> Option<&Token> {
        match self {
            ParseError::UnexpectedToken { found, .. } => found.as_ref(),
            ParseError::TrailingTokens { token } | ParseError::UnparseableNumber { token, .. } => {
                Some(token)
            }
            ParseError::NestingTooDeep { token, .. } => token.as_ref(),
        }
    }
}

// Lets nom combinators build errors directly in our error type. The grammar
// procedures construct their own errors, so these only cover combinator
// internals.
impl<'a> NomParseError<TokenSlice<'a>> for ParseError {
    fn from_error_kind(input: TokenSlice<'a>, kind: ErrorKind) -> Self {
        let expected = match kind {
            ErrorKind::Eof => "end of input",
            _ => "an expression",
        };
        ParseError::unexpected(expected, input.peek())
    }

    fn append(_input: TokenSlice<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}
