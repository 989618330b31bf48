use crate::parser::Parser;
use crate::result::ParseResult::{self, Failure, Success};
use crate::sequence::Sequence;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Repetition stops at the first failure, or after a success that consumed
/// nothing (which would otherwise repeat forever). That last empty match is
/// kept. `Many` itself never fails.
#[derive(Debug, Clone, Copy)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<S, P> Parser<S> for Many<P>
where
    S: Sequence,
    P: Parser<S>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut input: S) -> ParseResult<S, Self::Output> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(input) {
                Success(rest, taken) => {
                    results.push(taken);
                    let consumed = rest.offset_len() < input.offset_len();
                    input = rest;
                    if !consumed {
                        break;
                    }
                }
                // zero matches is still a match
                Failure(_) => break,
            }
        }

        Success(input, results)
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P> {
    Many::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{take_include, take_n, take_while};
    use crate::choice::all_of;

    fn letter_a(input: &str) -> ParseResult<&str, char> {
        match input.strip_prefix('a') {
            Some(rest) => Success(rest, 'a'),
            None => ParseResult::failure("expected `a`"),
        }
    }

    #[test]
    fn test_many_zero_matches() {
        assert_eq!(many(letter_a).parse("xyz"), Success("xyz", vec![]));
    }

    #[test]
    fn test_many_one_match() {
        assert_eq!(many(letter_a).parse("abc"), Success("bc", vec!['a']));
    }

    #[test]
    fn test_many_multiple_matches() {
        assert_eq!(many(letter_a).parse("aaabcd"), Success("bcd", vec!['a', 'a', 'a']));
    }

    #[test]
    fn test_many_consumes_everything() {
        assert_eq!(many(take_n(2)).parse("abcdef"), Success("", vec!["ab", "cd", "ef"]));
    }

    #[test]
    fn test_many_leaves_short_tail() {
        assert_eq!(many(take_n(2)).parse("abcde"), Success("e", vec!["ab", "cd"]));
    }

    #[test]
    fn test_many_empty_input() {
        assert_eq!(many(letter_a).parse(""), Success("", vec![]));
    }

    #[test]
    fn test_many_stops_on_empty_match() {
        let parser = many(take_while(|c: char| c.is_ascii_digit()));
        assert_eq!(parser.parse("12ab"), Success("ab", vec!["12", ""]));
        assert_eq!(parser.parse("ab"), Success("ab", vec![""]));
    }

    #[test]
    fn test_many_lines() {
        let parser = many(take_include('\n'));
        assert_eq!(
            parser.parse("one\ntwo\nrest"),
            Success("rest", vec!["one\n", "two\n"])
        );
    }

    #[test]
    fn test_many_of_all_of() {
        let parser = many(all_of((take_include(','), take_n(1))));
        assert_eq!(
            parser.parse("a,1b,2c"),
            Success("c", vec![("a,", "1"), ("b,", "2")])
        );
    }

    #[test]
    fn test_many_slices() {
        let input: &[u8] = &[1, 2, 3, 4, 5];
        assert_eq!(
            many(take_n(2)).parse(input),
            Success(&[5][..], vec![&[1, 2][..], &[3, 4][..]])
        );
    }
}
