use calc_lexer::Token;
use nom::InputLength;

/// The parser's input: the tokens that have not been consumed yet.
///
/// Advancing produces a new slice, so the cursor only ever moves forward and
/// a rule that fails without consuming leaves its caller's input untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenSlice<'a>(pub &'a [Token]);

impl<'a> TokenSlice<'a> {
    /// Create a new token slice over all of `tokens`
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenSlice(tokens)
    }

    /// The next unconsumed token
    pub fn peek(&self) -> Option<&'a Token> {
        self.0.first()
    }

    /// The slice without its first token
    pub fn advance(self) -> Self {
        match self.0.split_first() {
            Some((_, rest)) => TokenSlice(rest),
            None => self,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if we're at the end of input
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl InputLength for TokenSlice<'_> {
    fn input_len(&self) -> usize {
        self.0.len()
    }
}
