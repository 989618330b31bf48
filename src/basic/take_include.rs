use crate::matcher::Matcher;
use crate::parser::Parser;
use crate::result::ParseResult::{self, Success};
use crate::sequence::Sequence;

/// Parser that takes everything up to and including the first match of a
/// matcher
///
/// Like [`TakeUntil`](crate::basic::TakeUntil), but the delimiter is part of
/// the taken value and the rest starts right after it.
#[derive(Debug, Clone, Copy)]
pub struct TakeInclude<M> {
    matcher: M,
}

impl<M> TakeInclude<M> {
    pub fn new(matcher: M) -> Self {
        TakeInclude { matcher }
    }
}

impl<S, M> Parser<S> for TakeInclude<M>
where
    S: Sequence,
    M: Matcher<S>,
{
    type Output = S;

    fn parse(&self, input: S) -> ParseResult<S, S> {
        match self.matcher.find_in(input) {
            Some(found) => {
                let (taken, rest) = input.split_at_offset(found.end);
                Success(rest, taken)
            }
            None => ParseResult::failure(format!(
                "Could not find condition=`{}` in input.",
                self.matcher.describe()
            )),
        }
    }
}

/// Convenience function to create a TakeInclude parser
pub fn take_include<M>(matcher: M) -> TakeInclude<M> {
    TakeInclude::new(matcher)
}
