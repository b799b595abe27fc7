//! Lexer implementation for arithmetic expressions
//! Converts input text into a stream of tokens for the parser

use logos::Logos;
use std::ops::Range;

use crate::error::LexError;
use crate::token::{Location, Token};
use crate::LogosToken;

/// The main lexer struct that holds the state of the lexing process
pub struct Lexer<'a> {
    /// The text being lexed
    source: &'a str,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based)
    column: usize,
    /// The byte offset that `line` and `column` describe
    offset: usize,
    /// Set once an error has been reported; the lexer is then exhausted
    failed: bool,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line: 1,
            column: 1,
            offset: 0,
            failed: false,
            inner: LogosToken::lexer(source),
        }
    }

    /// Advance the tracked position to the start of `span`.
    /// Columns count characters so multi-byte input reports sensible positions.
    fn sync_position_to(&mut self, span: &Range<usize>) {
        let text = &self.source[self.offset..span.start];

        let mut iter = text.chars().peekable();
        while let Some(c) = iter.next() {
            match c {
                '\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                '\r' => {
                    // \r\n counts as a single line break
                    if iter.peek() == Some(&'\n') {
                        iter.next();
                    }
                    self.line += 1;
                    self.column = 1;
                }
                _ => self.column += 1,
            }
        }

        self.offset = span.start;
    }

    fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Get the next token from the input.
    ///
    /// Returns `None` at end of input or after an error has been returned.
    pub fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        if self.failed {
            return None;
        }

        loop {
            let raw = self.inner.next()?;
            let span = self.inner.span();
            self.sync_position_to(&span);
            let location = self.location();

            match raw {
                Ok(logos_token) => {
                    let Some(token_type) = logos_token.token_type() else {
                        continue;
                    };
                    let token = Token::new(token_type, &self.source[span], location);
                    #[cfg(feature = "logging")]
                    log::trace!("lexed {token}");
                    return Some(Ok(token));
                }
                Err(()) => {
                    self.failed = true;
                    // Error spans always start on a character boundary
                    let character = self.source[span.start..]
                        .chars()
                        .next()
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    #[cfg(feature = "logging")]
                    log::debug!("invalid character {character:?} at {location}");
                    return Some(Err(LexError::InvalidCharacter {
                        character,
                        location,
                    }));
                }
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Lex the whole input into an ordered token sequence.
///
/// Stops at the first invalid character; tokens produced before it are
/// discarded.
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).collect()
}

// Include the test module
#[cfg(test)]
mod tests;
