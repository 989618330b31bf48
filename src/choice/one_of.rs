use crate::parser::Parser;
use crate::result::ParseResult::{self, Failure, Success};
use std::borrow::Cow;

/// A list of parsers with a common output type, tried one after another
///
/// Implemented for tuples of up to eight parsers, for `Vec<P>` and for
/// `[P; N]`.
pub trait Alternatives<I> {
    type Output;

    /// Runs each alternative on the same `input` in declared order
    ///
    /// Returns the first success, or the failure message of every alternative
    /// in declared order when none succeeds.
    fn first_success(&self, input: I) -> Result<(I, Self::Output), Vec<Cow<'static, str>>>;
}

macro_rules! alternatives_tuple {
    ($($parser:ident $index:tt),+) => {
        impl<I, O, $($parser),+> Alternatives<I> for ($($parser,)+)
        where
            I: Copy,
            $($parser: Parser<I, Output = O>),+
        {
            type Output = O;

            fn first_success(&self, input: I) -> Result<(I, O), Vec<Cow<'static, str>>> {
                let mut failures = Vec::new();
                $(
                    match self.$index.parse(input) {
                        Success(rest, taken) => return Ok((rest, taken)),
                        Failure(message) => failures.push(message),
                    }
                )+
                Err(failures)
            }
        }
    };
}

alternatives_tuple!(P0 0);
alternatives_tuple!(P0 0, P1 1);
alternatives_tuple!(P0 0, P1 1, P2 2);
alternatives_tuple!(P0 0, P1 1, P2 2, P3 3);
alternatives_tuple!(P0 0, P1 1, P2 2, P3 3, P4 4);
alternatives_tuple!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5);
alternatives_tuple!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6);
alternatives_tuple!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7);

fn first_success_in<'p, I, P>(
    parsers: impl IntoIterator<Item = &'p P>,
    input: I,
) -> Result<(I, P::Output), Vec<Cow<'static, str>>>
where
    I: Copy,
    P: Parser<I> + 'p,
{
    let mut failures = Vec::new();
    for parser in parsers {
        match P::parse(parser, input) {
            Success(rest, taken) => return Ok((rest, taken)),
            Failure(message) => failures.push(message),
        }
    }
    Err(failures)
}

impl<I: Copy, P: Parser<I>> Alternatives<I> for Vec<P> {
    type Output = P::Output;

    fn first_success(&self, input: I) -> Result<(I, P::Output), Vec<Cow<'static, str>>> {
        first_success_in(self, input)
    }
}

impl<I: Copy, P: Parser<I>, const N: usize> Alternatives<I> for [P; N] {
    type Output = P::Output;

    fn first_success(&self, input: I) -> Result<(I, P::Output), Vec<Cow<'static, str>>> {
        first_success_in(self, input)
    }
}

/// Parser combinator that returns the result of the first alternative that
/// succeeds
///
/// Every alternative sees the same, unmodified input. The first success wins
/// and later alternatives are not run. When all fail, the failure message
/// lists each alternative's message in declared order:
/// `OneOf failed because none of the parsers succeeded: [0] ...; [1] ...`.
#[derive(Debug, Clone, Copy)]
pub struct OneOf<L> {
    parsers: L,
}

impl<L> OneOf<L> {
    pub fn new(parsers: L) -> Self {
        OneOf { parsers }
    }
}

impl<I, L> Parser<I> for OneOf<L>
where
    L: Alternatives<I>,
{
    type Output = L::Output;

    fn parse(&self, input: I) -> ParseResult<I, Self::Output> {
        match self.parsers.first_success(input) {
            Ok((rest, taken)) => Success(rest, taken),
            Err(failures) if failures.is_empty() => {
                ParseResult::failure("OneOf failed because it has no parsers to try.")
            }
            Err(failures) => {
                let reasons = failures
                    .iter()
                    .enumerate()
                    .map(|(index, message)| format!("[{}] {}", index, message))
                    .collect::<Vec<_>>()
                    .join("; ");
                ParseResult::failure(format!(
                    "OneOf failed because none of the parsers succeeded: {}",
                    reasons
                ))
            }
        }
    }
}

/// Convenience function to create a OneOf parser
///
/// # Example
/// ```
/// use takecomb::{one_of, take_while, Parser, ParseResult::Success};
///
/// let parser = one_of((
///     take_while(|c: char| c.is_ascii_digit()),
///     take_while(|c: char| c.is_alphabetic()),
/// ));
/// assert_eq!(parser.parse("123abc"), Success("abc", "123"));
/// ```
pub fn one_of<L>(parsers: L) -> OneOf<L> {
    OneOf::new(parsers)
}
