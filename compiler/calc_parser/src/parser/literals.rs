use calc_ast::ExpressionNode;
use calc_lexer::TokenType;

use super::{take_token_if, ParseError, PResult, TokenSlice};

/// Parses a number token into a `Number` leaf.
///
/// Returns a recoverable error if the next token is not a number. Once a
/// number token is consumed, text that does not convert to `f64` (such as
/// `1.2.3`, which the lexer accepts) is a hard `UnparseableNumber` failure.
pub fn parse_number(input: TokenSlice<'_>) -> PResult<'_, ExpressionNode> {
    let (rest, token) = take_token_if(|t| t == TokenType::Number, "a number")(input)?;

    let value = token.lexeme.parse::<f64>().map_err(|source| {
        log::debug!("unparseable number {token}: {source}");
        nom::Err::Failure(ParseError::UnparseableNumber {
            token: token.clone(),
            source,
        })
    })?;

    Ok((rest, ExpressionNode::Number(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::test_utils::tokenize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_number() {
        let tokens = tokenize("12.75");
        let (rest, node) = parse_number(TokenSlice::new(&tokens)).unwrap();
        assert!(rest.is_empty());
        assert_eq!(node, ExpressionNode::Number(12.75));
    }

    #[test]
    fn test_trailing_decimal_point_is_accepted() {
        let tokens = tokenize("2.");
        let (_, node) = parse_number(TokenSlice::new(&tokens)).unwrap();
        assert_eq!(node, ExpressionNode::Number(2.0));
    }

    #[test]
    fn test_non_number_is_no_match() {
        let tokens = tokenize("(1)");
        let result = parse_number(TokenSlice::new(&tokens));
        assert!(matches!(result, Err(nom::Err::Error(_))));
    }

    #[test]
    fn test_malformed_number_is_failure() {
        let tokens = tokenize("1.2.3");
        match parse_number(TokenSlice::new(&tokens)) {
            Err(nom::Err::Failure(ParseError::UnparseableNumber { token, .. })) => {
                assert_eq!(token.lexeme, "1.2.3");
            }
            other => panic!("Expected UnparseableNumber failure, got {:?}", other),
        }
    }
}
