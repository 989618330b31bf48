use super::locate;
use crate::matcher::Matcher;
use crate::parser::Parser;
use crate::result::ParseResult::{self, Failure, Success};
use crate::sequence::Sequence;

/// Parser that takes an opening delimiter, the content after it and the
/// closing delimiter, all together
///
/// Same scan as [`TakeBetween`](crate::delimited::TakeBetween), but the taken
/// value includes both delimiters. Anything before `open` is discarded and
/// the rest starts after `close`.
#[derive(Debug, Clone, Copy)]
pub struct TakeAround<O, C> {
    open: O,
    close: C,
}

impl<O, C> TakeAround<O, C> {
    pub fn new(open: O, close: C) -> Self {
        TakeAround { open, close }
    }
}

impl<S, O, C> Parser<S> for TakeAround<O, C>
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

        let (_, from_open) = input.split_at_offset(open.start);
        let (taken, rest) = from_open.split_at_offset(open.end - open.start + close.end);
        Success(rest, taken)
    }
}

/// Convenience function to create a TakeAround parser
pub fn take_around<O, C>(open: O, close: C) -> TakeAround<O, C> {
    TakeAround::new(open, close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_around_parentheses() {
        let parser = take_around("(", ")");
        assert_eq!(
            parser.parse("Hello Bob (the best Bob). Welcome."),
            Success(". Welcome.", "(the best Bob)")
        );
    }

    #[test]
    fn test_take_around_same_delimiter_does_not_close_on_open() {
        let parser = take_around('|', '|');
        assert_eq!(parser.parse("a|b|c"), Success("c", "|b|"));
    }

    #[test]
    fn test_take_around_multibyte_delimiters() {
        let parser = take_around('«', '»');
        assert_eq!(parser.parse("dit «bonjour» !"), Success(" !", "«bonjour»"));
    }

    #[test]
    fn test_take_around_missing_open() {
        assert_eq!(
            take_around('{', '}').parse("no braces}").failure_message(),
            Some("Could not find start_delimiter=`{` in input.")
        );
    }

    #[test]
    fn test_take_around_missing_close() {
        assert!(take_around('{', '}').parse("{open only").is_failure());
    }

    #[test]
    fn test_take_around_slices() {
        let input: &[u8] = b"xx[ab]yy";
        let parser = take_around([b'['], [b']']);
        assert_eq!(parser.parse(input), Success(&b"yy"[..], &b"[ab]"[..]));
    }
}
