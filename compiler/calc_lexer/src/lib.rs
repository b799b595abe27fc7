//! Lexical analyzer for arithmetic expressions
//!
//! This crate converts expression text into a sequence of tokens for the
//! parser. Numbers are maximal runs of digits and decimal points, operators
//! and parentheses are single characters, and space, carriage return and
//! newline are skipped.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::{lex, Lexer};
pub use logos_token::LogosToken;
pub use token::{Location, Token, TokenType};
