use crate::matcher::Matcher;
use crate::parser::Parser;
use crate::result::ParseResult::{self, Success};
use crate::sequence::Sequence;

/// Parser that takes the longest prefix made of consecutive matches
///
/// - predicate: every taken element satisfies it
/// - single element: every taken element equals it
/// - literal run: the prefix is whole repetitions of it, so `"aa"` on
///   `"aaabbb"` takes `"aa"` and leaves `"abbb"`
/// - [`Window`](crate::matcher::Window): every window of the taken prefix
///   satisfies it
///
/// Never fails: when the input does not start with a match, the taken prefix
/// is empty. Callers that need at least one element check the taken length.
#[derive(Debug, Clone, Copy)]
pub struct TakeWhile<M> {
    matcher: M,
}

impl<M> TakeWhile<M> {
    pub fn new(matcher: M) -> Self {
        TakeWhile { matcher }
    }
}

impl<S, M> Parser<S> for TakeWhile<M>
where
    S: Sequence,
    M: Matcher<S>,
{
    type Output = S;

    fn parse(&self, input: S) -> ParseResult<S, S> {
        let (taken, rest) = input.split_at_offset(self.matcher.leading_run(input));
        Success(rest, taken)
    }
}

/// Convenience function to create a TakeWhile parser
pub fn take_while<M>(matcher: M) -> TakeWhile<M> {
    TakeWhile::new(matcher)
}
