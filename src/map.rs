use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that transforms the taken value of a parser using a
/// mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<I, P, F, U> Parser<I> for Map<P, F>
where
    P: Parser<I>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, input: I) -> ParseResult<I, U> {
        self.parser.parse(input).map(&self.mapper)
    }
}

/// Convenience function to create a Map parser
///
/// The input type is only fixed once the parser runs, so this works for
/// parsers that accept several kinds of input, like
/// [`TakeN`](crate::basic::TakeN).
pub fn map<P, F>(parser: P, mapper: F) -> Map<P, F> {
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<I>: Parser<I> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<I, P> MapExt<I> for P where P: Parser<I> {}
