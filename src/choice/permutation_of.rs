use crate::parser::Parser;
use crate::result::ParseResult::{self, Success};
use std::borrow::Cow;

/// A list of parsers that must all match once, in any order of occurrence
///
/// Implemented for tuples of up to eight parsers and for `Vec<P>`.
pub trait Permutation<I> {
    type Output;

    fn parse_permutation(&self, input: I) -> ParseResult<I, Self::Output>;
}

fn format_indexes(indexes: &[usize]) -> String {
    match indexes {
        [single] => format!("parser `{}`", single),
        _ => format!("parsers `{:?}`", indexes),
    }
}

/// Builds the failure message from which parsers matched before the scan
/// stalled
fn permutation_failure(matched: &[bool]) -> Cow<'static, str> {
    let (succeeded, never): (Vec<usize>, Vec<usize>) =
        (0..matched.len()).partition(|&index| matched[index]);

    let mut message = format!(
        "PermutationOf failed because {} never succeeded.",
        format_indexes(&never)
    );
    if succeeded.is_empty() {
        message.push_str(" No parsers succeeded.");
    } else {
        message.push_str(&format!(" The {} succeeded.", format_indexes(&succeeded)));
    }
    message.into()
}

macro_rules! permutation_tuple {
    ($($parser:ident $index:tt $taken:ident),+) => {
        impl<I, $($parser),+> Permutation<I> for ($($parser,)+)
        where
            I: Copy,
            $($parser: Parser<I>),+
        {
            type Output = ($($parser::Output,)+);

            fn parse_permutation(&self, input: I) -> ParseResult<I, Self::Output> {
                let mut slots: ($(Option<$parser::Output>,)+) = ($(None::<$parser::Output>,)+);
                let mut rest = input;

                // Each pass matches at most one parser, then rescans from the
                // first unmatched one.
                loop {
                    let mut progressed = false;
                    $(
                        if !progressed && slots.$index.is_none() {
                            if let Success(next, taken) = self.$index.parse(rest) {
                                rest = next;
                                slots.$index = Some(taken);
                                progressed = true;
                            }
                        }
                    )+
                    if !progressed {
                        break;
                    }
                }

                match slots {
                    ($(Some($taken),)+) => Success(rest, ($($taken,)+)),
                    slots => ParseResult::Failure(permutation_failure(&[$(slots.$index.is_some()),+])),
                }
            }
        }
    };
}

permutation_tuple!(P0 0 t0);
permutation_tuple!(P0 0 t0, P1 1 t1);
permutation_tuple!(P0 0 t0, P1 1 t1, P2 2 t2);
permutation_tuple!(P0 0 t0, P1 1 t1, P2 2 t2, P3 3 t3);
permutation_tuple!(P0 0 t0, P1 1 t1, P2 2 t2, P3 3 t3, P4 4 t4);
permutation_tuple!(P0 0 t0, P1 1 t1, P2 2 t2, P3 3 t3, P4 4 t4, P5 5 t5);
permutation_tuple!(P0 0 t0, P1 1 t1, P2 2 t2, P3 3 t3, P4 4 t4, P5 5 t5, P6 6 t6);
permutation_tuple!(P0 0 t0, P1 1 t1, P2 2 t2, P3 3 t3, P4 4 t4, P5 5 t5, P6 6 t6, P7 7 t7);

/// Same scan as the tuples, over any number of parsers of one type
impl<I, P> Permutation<I> for Vec<P>
where
    I: Copy,
    P: Parser<I>,
{
    type Output = Vec<P::Output>;

    fn parse_permutation(&self, input: I) -> ParseResult<I, Self::Output> {
        let mut slots: Vec<Option<P::Output>> = self.iter().map(|_| None).collect();
        let mut rest = input;

        loop {
            let mut progressed = false;
            for (parser, slot) in self.iter().zip(slots.iter_mut()) {
                if slot.is_some() {
                    continue;
                }
                if let Success(next, taken) = parser.parse(rest) {
                    rest = next;
                    *slot = Some(taken);
                    progressed = true;
                    break;
                }
            }
            if !progressed {
                break;
            }
        }

        let matched: Vec<bool> = slots.iter().map(Option::is_some).collect();
        match slots.into_iter().collect::<Option<Vec<_>>>() {
            Some(taken) => Success(rest, taken),
            None => ParseResult::Failure(permutation_failure(&matched)),
        }
    }
}

/// Parser combinator that matches every parser once, in whatever order they
/// occur in the input
///
/// Resolution is greedy and never backtracks: the unmatched parsers are tried
/// in declared order against the current rest, the first one that succeeds
/// consumes its match, and the scan restarts from the first unmatched parser.
/// The parse succeeds once every parser has matched and fails as soon as a
/// full scan matches nothing. When two parsers could both match at the same
/// position, the one declared first wins.
///
/// The taken tuple is always in declared order, not in order of occurrence.
#[derive(Debug, Clone, Copy)]
pub struct PermutationOf<L> {
    parsers: L,
}

impl<L> PermutationOf<L> {
    pub fn new(parsers: L) -> Self {
        PermutationOf { parsers }
    }
}

impl<I, L> Parser<I> for PermutationOf<L>
where
    L: Permutation<I>,
{
    type Output = L::Output;

    fn parse(&self, input: I) -> ParseResult<I, Self::Output> {
        self.parsers.parse_permutation(input)
    }
}

/// Convenience function to create a PermutationOf parser
pub fn permutation_of<L>(parsers: L) -> PermutationOf<L> {
    PermutationOf::new(parsers)
}
