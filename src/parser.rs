use crate::result::ParseResult;

/// Core parser trait for parser combinators
///
/// A parser consumes a prefix of `input` and reports what it took and what is
/// left. Parsing must be pure: the same parser on the same input always
/// produces an equal result.
pub trait Parser<I> {
    type Output;

    /// Attempt to parse from the start of `input`
    ///
    /// Returns `Success(rest, taken)` on success, where `rest` is never longer
    /// than `input`, or `Failure(message)` if the parse fails.
    fn parse(&self, input: I) -> ParseResult<I, Self::Output>;
}

/// Any function or closure of the right shape is a parser
impl<I, O, F> Parser<I> for F
where
    F: Fn(I) -> ParseResult<I, O>,
{
    type Output = O;

    fn parse(&self, input: I) -> ParseResult<I, O> {
        self(input)
    }
}
