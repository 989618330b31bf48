use crate::parser::Parser;
use crate::result::ParseResult::{self, Failure, Success};

/// A tuple of parsers that run one after another, each on the rest left by
/// the previous one
pub trait Chain<I> {
    type Output;

    fn parse_chain(&self, input: I) -> ParseResult<I, Self::Output>;
}

macro_rules! chain_tuple {
    ($($parser:ident $index:tt $taken:ident),+) => {
        impl<I, $($parser),+> Chain<I> for ($($parser,)+)
        where
            $($parser: Parser<I>),+
        {
            type Output = ($($parser::Output,)+);

            fn parse_chain(&self, input: I) -> ParseResult<I, Self::Output> {
                let rest = input;
                $(
                    let ($taken, rest) = match self.$index.parse(rest) {
                        Success(rest, taken) => (taken, rest),
                        Failure(message) => {
                            return ParseResult::failure(format!(
                                "AllOf failed because parser `{}` failed with error: {}",
                                $index, message
                            ))
                        }
                    };
                )+
                Success(rest, ($($taken,)+))
            }
        }
    };
}

chain_tuple!(P0 0 t0);
chain_tuple!(P0 0 t0, P1 1 t1);
chain_tuple!(P0 0 t0, P1 1 t1, P2 2 t2);
chain_tuple!(P0 0 t0, P1 1 t1, P2 2 t2, P3 3 t3);
chain_tuple!(P0 0 t0, P1 1 t1, P2 2 t2, P3 3 t3, P4 4 t4);
chain_tuple!(P0 0 t0, P1 1 t1, P2 2 t2, P3 3 t3, P4 4 t4, P5 5 t5);
chain_tuple!(P0 0 t0, P1 1 t1, P2 2 t2, P3 3 t3, P4 4 t4, P5 5 t5, P6 6 t6);
chain_tuple!(P0 0 t0, P1 1 t1, P2 2 t2, P3 3 t3, P4 4 t4, P5 5 t5, P6 6 t6, P7 7 t7);

/// Parser combinator that requires every parser to succeed, in order
///
/// Each parser receives the rest produced by the previous one. The taken value
/// is the tuple of every parser's taken value and the rest is whatever the
/// last parser left. The first failure stops the chain; nothing consumed so
/// far is returned.
///
/// Unlike chaining binary `and` combinators, the tuple stays flat:
/// `all_of((a, b, c))` produces `(a, b, c)`, not `((a, b), c)`.
#[derive(Debug, Clone, Copy)]
pub struct AllOf<L> {
    parsers: L,
}

impl<L> AllOf<L> {
    pub fn new(parsers: L) -> Self {
        AllOf { parsers }
    }
}

impl<I, L> Parser<I> for AllOf<L>
where
    L: Chain<I>,
{
    type Output = L::Output;

    fn parse(&self, input: I) -> ParseResult<I, Self::Output> {
        self.parsers.parse_chain(input)
    }
}

/// Convenience function to create an AllOf parser
pub fn all_of<L>(parsers: L) -> AllOf<L> {
    AllOf::new(parsers)
}
