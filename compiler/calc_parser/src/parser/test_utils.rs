//! Test utilities for the parser

// This module is only used for testing purposes
#![allow(dead_code)]

use calc_lexer::token::{Location, Token, TokenType};

/// Creates a token with default location for testing
pub fn create_token(token_type: TokenType, lexeme: &str) -> Token {
    Token::new(token_type, lexeme, Location::default())
}

/// Creates a number token for testing
pub fn create_number(lexeme: &str) -> Token {
    create_token(TokenType::Number, lexeme)
}

/// Creates an operator or parenthesis token for testing
pub fn create_operator(op: &str) -> Token {
    let token_type = match op {
        "+" => TokenType::Plus,
        "-" => TokenType::Minus,
        "*" => TokenType::Mult,
        "/" => TokenType::Div,
        "^" => TokenType::Exp,
        "(" => TokenType::ParenL,
        ")" => TokenType::ParenR,
        _ => panic!("Unknown operator: {}", op),
    };
    create_token(token_type, op)
}

/// Tokenizes a string for testing, panicking on lexer errors
pub fn tokenize(input: &str) -> Vec<Token> {
    calc_lexer::lex(input).unwrap_or_else(|e| panic!("failed to lex {input:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_token() {
        let token = create_operator("^");
        assert_eq!(token.token_type, TokenType::Exp);
        assert_eq!(token.lexeme, "^");
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("1 + 2");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].token_type, TokenType::Number);
        assert_eq!(tokens[1].token_type, TokenType::Plus);
        assert_eq!(tokens[2], Token::new(TokenType::Number, "2", tokens[2].location));
    }
}
