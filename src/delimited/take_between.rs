use super::locate;
use crate::matcher::Matcher;
use crate::parser::Parser;
use crate::result::ParseResult::{self, Failure, Success};
use crate::sequence::Sequence;

/// Parser that takes the content between an opening and a closing delimiter
///
/// The first match of `open` is located, then the first match of `close`
/// after it. The taken value is what lies strictly between them. Anything
/// before `open` is discarded. The rest starts after `close`, or at `close`
/// when built with `discard_end_delimiter(false)`.
///
/// # Examples
/// - `"Hello Bob (the best Bob). Welcome."` with `(`, `)` takes
///   `"the best Bob"` and leaves `". Welcome."`
/// - `"<a>b</a>"` with `"<a>"`, `"</a>"` takes `"b"`
#[derive(Debug, Clone, Copy)]
pub struct TakeBetween<O, C> {
    open: O,
    close: C,
    discard_end_delimiter: bool,
}

impl<O, C> TakeBetween<O, C> {
    pub fn new(open: O, close: C) -> Self {
        TakeBetween {
            open,
            close,
            discard_end_delimiter: true,
        }
    }

    pub fn discard_end_delimiter(self, discard_end_delimiter: bool) -> Self {
        TakeBetween {
            discard_end_delimiter,
            ..self
        }
    }
}

impl<S, O, C> Parser<S> for TakeBetween<O, C>
where
    S: Sequence,
    O: Matcher<S>,
    C: Matcher<S>,
{
    type Output = S;

    fn parse(&self, input: S) -> ParseResult<S, S> {
        let (open, close) = match locate(input, &self.open, &self.close) {
            Ok(found) => found,
            Err(message) => return Failure(message),
        };

        let (_, after_open) = input.split_at_offset(open.end);
        let (taken, rest) = after_open.split_at_offset(close.start);
        let rest = if self.discard_end_delimiter {
            rest.split_at_offset(close.end - close.start).1
        } else {
            rest
        };
        Success(rest, taken)
    }
}

/// Convenience function to create a TakeBetween parser
pub fn take_between<O, C>(open: O, close: C) -> TakeBetween<O, C> {
    TakeBetween::new(open, close)
}
