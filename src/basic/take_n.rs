use crate::parser::Parser;
use crate::result::ParseResult::{self, Success};
use crate::sequence::Sequence;

/// Parser that takes a fixed number of elements
///
/// `TakeN::new(n)` takes the first `n` elements. `TakeN::all_but(n)` takes
/// everything except the last `n` elements, leaving those as the rest.
/// Either way the parser fails when the input holds fewer than `n` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeN {
    n: usize,
    from_end: bool,
}

impl TakeN {
    pub fn new(n: usize) -> Self {
        TakeN { n, from_end: false }
    }

    pub fn all_but(n: usize) -> Self {
        TakeN { n, from_end: true }
    }

    fn too_short<S, O>(&self, len: usize) -> ParseResult<S, O> {
        let sign = if self.from_end { "-" } else { "" };
        ParseResult::failure(format!(
            "Can't take N=`{}{}` from input of length=`{}`.",
            sign, self.n, len
        ))
    }
}

impl<S: Sequence> Parser<S> for TakeN {
    type Output = S;

    fn parse(&self, input: S) -> ParseResult<S, S> {
        let count = if self.from_end {
            let len = input.element_count();
            match len.checked_sub(self.n) {
                Some(count) => count,
                None => return self.too_short(len),
            }
        } else {
            self.n
        };

        match input.offset_of(count) {
            Some(offset) => {
                let (taken, rest) = input.split_at_offset(offset);
                Success(rest, taken)
            }
            None => self.too_short(input.element_count()),
        }
    }
}

/// Convenience function to create a TakeN parser
pub fn take_n(n: usize) -> TakeN {
    TakeN::new(n)
}
