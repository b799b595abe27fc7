//! Grammar procedures, loosest binding first:
//!
//! ```text
//! expr     := product ( ('+'|'-') product )*
//! product  := exponent ( ('*'|'/') exponent )*
//! exponent := base ( '^' exponent )?
//! base     := number | '(' expr ')'
//! ```
//!
//! A procedure whose first token does not fit returns `nom::Err::Error` so the
//! caller can try something else. Once a procedure has consumed a token, any
//! further mismatch is promoted to `nom::Err::Failure` with `cut`.

use calc_ast::{BinaryOperator, ExpressionNode};
use calc_lexer::TokenType;
use nom::combinator::{cut, opt};
use nom::multi::many0;
use nom::sequence::{pair, preceded};

use super::literals::parse_number;
use super::{take_token_if, Nesting, ParseError, PResult, TokenSlice};

/// What `base` accepts, used in error messages
pub(crate) const EXPECTED_OPERAND: &str = "a number or '('";

/// Parses additions and subtractions, folding left: `a - b - c` is `(a - b) - c`.
pub fn parse_expression(input: TokenSlice<'_>, nesting: Nesting) -> PResult<'_, ExpressionNode> {
    log::trace!(
        "parse_expression: {} tokens left, next {:?}",
        input.len(),
        input.peek().map(|t| t.token_type)
    );

    let (input, first) = parse_product(input, nesting)?;
    let (input, rest) = many0(pair(additive_operator, cut(|i| parse_product(i, nesting))))(input)?;

    Ok((input, fold_left(first, rest)))
}

/// Parses multiplications and divisions, folding left.
pub fn parse_product(input: TokenSlice<'_>, nesting: Nesting) -> PResult<'_, ExpressionNode> {
    let (input, first) = parse_exponent(input, nesting)?;
    let (input, rest) = many0(pair(
        multiplicative_operator,
        cut(|i| parse_exponent(i, nesting)),
    ))(input)?;

    Ok((input, fold_left(first, rest)))
}

/// Parses exponentiation. The right operand recurses into this procedure
/// again, so `2^3^2` is `2^(3^2)`.
pub fn parse_exponent(input: TokenSlice<'_>, nesting: Nesting) -> PResult<'_, ExpressionNode> {
    let (input, base) = parse_base(input, nesting)?;
    let (input, exponent) = opt(preceded(
        take_token_if(|t| t == TokenType::Exp, "'^'"),
        cut(|i| {
            let inner = nesting.enter(i)?;
            parse_exponent(i, inner)
        }),
    ))(input)?;

    let node = match exponent {
        Some(exponent) => ExpressionNode::binary(base, BinaryOperator::Pow, exponent),
        None => base,
    };
    Ok((input, node))
}

/// Parses a number or a parenthesized expression.
pub fn parse_base(input: TokenSlice<'_>, nesting: Nesting) -> PResult<'_, ExpressionNode> {
    match input.peek().map(|t| t.token_type) {
        Some(TokenType::Number) => parse_number(input),
        Some(TokenType::ParenL) => parse_parenthesized(input, nesting),
        _ => Err(nom::Err::Error(ParseError::unexpected(
            EXPECTED_OPERAND,
            input.peek(),
        ))),
    }
}

/// Parses `'(' expr ')'`. After the opening parenthesis both the inner
/// expression and the closing parenthesis are required.
fn parse_parenthesized(input: TokenSlice<'_>, nesting: Nesting) -> PResult<'_, ExpressionNode> {
    let (after_open, _) = take_token_if(|t| t == TokenType::ParenL, "'('")(input)?;
    let inner = nesting.enter(input)?;

    let (rest, expr) = cut(|i| parse_expression(i, inner))(after_open)?;
    let (rest, _) = cut(take_token_if(|t| t == TokenType::ParenR, "')'"))(rest)?;

    Ok((rest, expr))
}

fn additive_operator(input: TokenSlice<'_>) -> PResult<'_, BinaryOperator> {
    binary_operator(input, "'+' or '-'", |t| match t {
        TokenType::Plus => Some(BinaryOperator::Add),
        TokenType::Minus => Some(BinaryOperator::Sub),
        _ => None,
    })
}

fn multiplicative_operator(input: TokenSlice<'_>) -> PResult<'_, BinaryOperator> {
    binary_operator(input, "'*' or '/'", |t| match t {
        TokenType::Mult => Some(BinaryOperator::Mul),
        TokenType::Div => Some(BinaryOperator::Div),
        _ => None,
    })
}

fn binary_operator<'a>(
    input: TokenSlice<'a>,
    expected: &'static str,
    select: fn(TokenType) -> Option<BinaryOperator>,
) -> PResult<'a, BinaryOperator> {
    match input.peek().and_then(|t| select(t.token_type)) {
        Some(op) => Ok((input.advance(), op)),
        None => Err(nom::Err::Error(ParseError::unexpected(
            expected,
            input.peek(),
        ))),
    }
}

fn fold_left(first: ExpressionNode, rest: Vec<(BinaryOperator, ExpressionNode)>) -> ExpressionNode {
    rest.into_iter()
        .fold(first, |lhs, (op, rhs)| ExpressionNode::binary(lhs, op, rhs))
}
