// Recursive-descent parser for arithmetic expressions, built on nom
// combinators over a slice of lexer tokens.

use calc_ast::ExpressionNode;
use calc_lexer::{Token, TokenType};
use nom::IResult;

pub mod diagnostics;
pub mod error;
pub mod expressions;
pub mod literals;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod token_stream;

pub use diagnostics::{render_snippet, Diagnostic, Span};
pub use error::ParseError;
pub use expressions::{parse_base, parse_exponent, parse_expression, parse_product};
pub use literals::parse_number;
pub use token_stream::TokenSlice;

/// Result type of every grammar procedure
pub type PResult<'a, T> = IResult<TokenSlice<'a>, T, ParseError>;

/// Default bound on parenthesis and exponent nesting
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of parentheses and right-hand exponent operands
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Tracks how deeply the grammar has recursed through parentheses and
/// exponent chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nesting {
    depth: usize,
    max: usize,
}

impl Nesting {
    pub fn new(max: usize) -> Self {
        Self { depth: 0, max }
    }

    /// Enters one more level, failing hard once the limit is exceeded.
    pub fn enter(self, input: TokenSlice<'_>) -> Result<Self, nom::Err<ParseError>> {
        if self.depth >= self.max {
            log::debug!("nesting limit {} reached", self.max);
            return Err(nom::Err::Failure(ParseError::NestingTooDeep {
                limit: self.max,
                token: input.peek().cloned(),
            }));
        }
        Ok(Self {
            depth: self.depth + 1,
            ..self
        })
    }
}

/// Consumes the next token if its type satisfies `predicate`.
///
/// Otherwise returns a recoverable `UnexpectedToken` error naming `expected`.
pub fn take_token_if<'a, F>(
    predicate: F,
    expected: &'static str,
) -> impl Fn(TokenSlice<'a>) -> PResult<'a, &'a Token>
where
    F: Fn(TokenType) -> bool,
{
    move |input: TokenSlice<'a>| match input.peek() {
        Some(token) if predicate(token.token_type) => Ok((input.advance(), token)),
        found => Err(nom::Err::Error(ParseError::unexpected(expected, found))),
    }
}

/// Parses a complete token sequence into an expression tree.
///
/// The parser keeps its tokens, so `parse` can be called repeatedly and
/// always produces the same tree.
#[derive(Debug, Clone)]
pub struct Parser {
    tokens: Vec<Token>,
    config: ParserConfig,
}

impl Parser {
    /// Create a parser with the default configuration
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: Vec<Token>, config: ParserConfig) -> Self {
        Self { tokens, config }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Parses the whole token sequence.
    ///
    /// Returns `Ok(None)` for an empty sequence. Tokens left over after a
    /// complete expression are reported as `TrailingTokens`.
    pub fn parse(&self) -> Result<Option<ExpressionNode>, ParseError> {
        let input = TokenSlice::new(&self.tokens);
        if input.is_empty() {
            log::debug!("no input");
            return Ok(None);
        }

        match parse_expression(input, Nesting::new(self.config.max_depth)) {
            Ok((rest, expr)) => match rest.peek() {
                Some(token) => {
                    log::debug!("trailing tokens from {token}");
                    Err(ParseError::TrailingTokens {
                        token: token.clone(),
                    })
                }
                None => {
                    log::debug!("parsed {} nodes", expr.node_count());
                    Ok(Some(expr))
                }
            },
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                log::debug!("parse failed: {e}");
                Err(e)
            }
            // The grammar only uses complete-input combinators
            Err(nom::Err::Incomplete(_)) => Err(ParseError::unexpected(
                expressions::EXPECTED_OPERAND,
                None,
            )),
        }
    }
}

#[cfg(test)]
mod tests;
