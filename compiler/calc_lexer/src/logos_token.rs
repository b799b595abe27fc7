//! Raw token recognizer generated by `logos`.
//!
//! The `Lexer` wraps this enum and converts it into owned `Token`s with
//! location information.

use logos::Logos;

use crate::token::TokenType;

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LogosToken {
    // Digit placement is not validated here; "1.2.3" is one token and is
    // rejected when the parser converts it.
    #[regex(r"[0-9][0-9.]*")]
    /// A digit followed by digits and decimal points
    Number,

    // --- Operators ---
    #[token("+")]
    /// `+`
    Plus,
    #[token("-")]
    /// `-`
    Minus,
    #[token("*")]
    /// `*`
    Mult,
    #[token("/")]
    /// `/`
    Div,
    #[token("^")]
    /// `^`
    Exp,

    // --- Delimiters ---
    #[token("(")]
    /// `(`
    ParenL,
    #[token(")")]
    /// `)`
    ParenR,

    // Only space, carriage return and newline count as whitespace
    #[regex(r"[ \r\n]+", logos::skip)]
    /// Skipped, never produced
    Whitespace,
}

impl LogosToken {
    /// Maps a raw token onto the public token type.
    ///
    /// Returns `None` for tokens that never reach the token stream.
    pub fn token_type(self) -> Option<TokenType> {
        match self {
            LogosToken::Number => Some(TokenType::Number),
            LogosToken::Plus => Some(TokenType::Plus),
            LogosToken::Minus => Some(TokenType::Minus),
            LogosToken::Mult => Some(TokenType::Mult),
            LogosToken::Div => Some(TokenType::Div),
            LogosToken::Exp => Some(TokenType::Exp),
            LogosToken::ParenL => Some(TokenType::ParenL),
            LogosToken::ParenR => Some(TokenType::ParenR),
            LogosToken::Whitespace => None,
        }
    }
}
