use thiserror::Error;

use crate::token::Location;

/// Errors produced while lexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character outside digits, `.`, the operators, parentheses and
    /// whitespace was found.
    #[error("invalid character {character:?} at {location}")]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Where it appears in the input
        location: Location,
    },
}

impl LexError {
    /// The location the error points at
    pub fn location(&self) -> Location {
        match self {
            LexError::InvalidCharacter { location, .. } => *location,
        }
    }
}
