use crate::matcher::Matcher;
use crate::parser::Parser;
use crate::result::ParseResult::{self, Success};
use crate::sequence::Sequence;

/// Parser that takes everything before the first match of a matcher
///
/// The matched delimiter is not consumed: the rest starts with it. By default
/// the parser fails when the matcher never matches; with
/// `fail_on_no_match(false)` it takes the whole input instead.
#[derive(Debug, Clone, Copy)]
pub struct TakeUntil<M> {
    matcher: M,
    fail_on_no_match: bool,
}

impl<M> TakeUntil<M> {
    pub fn new(matcher: M) -> Self {
        TakeUntil {
            matcher,
            fail_on_no_match: true,
        }
    }

    pub fn fail_on_no_match(self, fail_on_no_match: bool) -> Self {
        TakeUntil {
            fail_on_no_match,
            ..self
        }
    }
}

impl<S, M> Parser<S> for TakeUntil<M>
where
    S: Sequence,
    M: Matcher<S>,
{
    type Output = S;

    fn parse(&self, input: S) -> ParseResult<S, S> {
        match self.matcher.find_in(input) {
            Some(found) => {
                let (taken, rest) = input.split_at_offset(found.start);
                Success(rest, taken)
            }
            None if self.fail_on_no_match => ParseResult::failure(format!(
                "Could not find condition=`{}` in input.",
                self.matcher.describe()
            )),
            None => {
                let (taken, rest) = input.split_at_offset(input.offset_len());
                Success(rest, taken)
            }
        }
    }
}

/// Convenience function to create a TakeUntil parser
pub fn take_until<M>(matcher: M) -> TakeUntil<M> {
    TakeUntil::new(matcher)
}
