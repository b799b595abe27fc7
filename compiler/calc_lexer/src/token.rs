use std::fmt;

/// Represents a token's location in the source text.
///
/// Line and column numbers are 1-based, the byte offset is 0-based.
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// The 1-based line number in the input
    pub line: usize,
    /// The 1-based column number in the input
    pub column: usize,
    /// The 0-based byte offset from the start of the input
    pub offset: usize,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The classification of a lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// A run of digits and decimal points, starting with a digit
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `^`
    Exp,
    /// `(`
    ParenL,
    /// `)`
    ParenR,
}

impl TokenType {
    /// Returns true for the five binary operator tokens
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenType::Plus | TokenType::Minus | TokenType::Mult | TokenType::Div | TokenType::Exp
        )
    }

    /// The name used in token dumps and diagnostics
    pub fn name(self) -> &'static str {
        match self {
            TokenType::Number => "Number",
            TokenType::Plus => "Plus",
            TokenType::Minus => "Minus",
            TokenType::Mult => "Mult",
            TokenType::Div => "Div",
            TokenType::Exp => "Exp",
            TokenType::ParenL => "ParenL",
            TokenType::ParenR => "ParenR",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified span of input text.
///
/// Tokens own a copy of their text and are never mutated after the lexer
/// produces them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The type of the token
    pub token_type: TokenType,
    /// The exact source text of the token
    pub lexeme: String,
    /// Where the token starts in the input
    pub location: Location,
}

impl Token {
    /// Creates a new token.
    pub fn new<S: Into<String>>(token_type: TokenType, lexeme: S, location: Location) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// One-line description used by `--tokens` dumps, e.g. `Number '3.5'`.
    pub fn describe(&self) -> String {
        format!("{} '{}'", self.token_type, self.lexeme)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.describe(), self.location)
    }
}
