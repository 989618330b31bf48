use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Outcome of running a parser
///
/// - `Success(rest, taken)`: `rest` is the unconsumed suffix of the input and
///   `taken` is the value produced from the consumed prefix.
/// - `Failure(message)`: the parser could not proceed. The input is not
///   attached; callers that need it keep their own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult<I, O> {
    Success(I, O),
    Failure(Cow<'static, str>),
}

use ParseResult::*;

/// Error value for a failed parse that left the parser world through
/// [`ParseResult::into_result`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseFailure {
    message: Cow<'static, str>,
}

impl ParseFailure {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<I, O> ParseResult<I, O> {
    pub fn failure(message: impl Into<Cow<'static, str>>) -> Self {
        Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Success(..))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    pub fn rest(&self) -> Option<&I> {
        match self {
            Success(rest, _) => Some(rest),
            Failure(_) => None,
        }
    }

    pub fn taken(&self) -> Option<&O> {
        match self {
            Success(_, taken) => Some(taken),
            Failure(_) => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Success(..) => None,
            Failure(message) => Some(message),
        }
    }

    /// Transform the taken value, leaving failures untouched
    pub fn map<T>(self, f: impl FnOnce(O) -> T) -> ParseResult<I, T> {
        match self {
            Success(rest, taken) => Success(rest, f(taken)),
            Failure(message) => Failure(message),
        }
    }

    /// Rewrite the failure message, leaving successes untouched
    pub fn map_failure<M>(self, f: impl FnOnce(Cow<'static, str>) -> M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        match self {
            Success(rest, taken) => Success(rest, taken),
            Failure(message) => Failure(f(message).into()),
        }
    }

    /// Continue parsing from `rest` with the value taken so far
    pub fn and_then<T>(self, f: impl FnOnce(I, O) -> ParseResult<I, T>) -> ParseResult<I, T> {
        match self {
            Success(rest, taken) => f(rest, taken),
            Failure(message) => Failure(message),
        }
    }

    /// Returns `(rest, taken)`
    ///
    /// # Panics
    ///
    /// Panics when called on a `Failure`. Calling this on a result that may
    /// have failed is a caller bug, not a parse error; match on the result or
    /// use [`ParseResult::into_result`] instead.
    pub fn unwrap(self) -> (I, O) {
        match self {
            Success(rest, taken) => (rest, taken),
            Failure(message) => panic!(
                "called ParseResult::unwrap on a Failure value; Error: {}.",
                message
            ),
        }
    }

    /// Returns the failure message
    ///
    /// # Panics
    ///
    /// Panics when called on a `Success`.
    pub fn unwrap_failure(self) -> Cow<'static, str> {
        match self {
            Success(..) => panic!("called ParseResult::unwrap_failure on a Success value"),
            Failure(message) => message,
        }
    }

    pub fn into_result(self) -> Result<(I, O), ParseFailure> {
        match self {
            Success(rest, taken) => Ok((rest, taken)),
            Failure(message) => Err(ParseFailure { message }),
        }
    }
}

impl<I, O> From<ParseResult<I, O>> for Result<(I, O), ParseFailure> {
    fn from(result: ParseResult<I, O>) -> Self {
        result.into_result()
    }
}

impl<I: fmt::Debug, O: fmt::Debug> fmt::Display for ParseResult<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Success(rest, taken) => write!(f, "Success(({:?}, {:?}))", rest, taken),
            Failure(message) => write!(f, "Failure({})", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_structural() {
        let a: ParseResult<&str, &str> = Success("rest", "taken");
        assert_eq!(a, Success("rest", "taken"));
        assert_ne!(a, Success("rest", "other"));
        assert_ne!(a, ParseResult::failure("taken"));
        assert_eq!(
            ParseResult::<&str, &str>::failure("nope"),
            ParseResult::failure(String::from("nope"))
        );
    }

    #[test]
    fn test_nested_equality() {
        let a: ParseResult<&str, (&str, (i32, &str))> = Success("", ("a", (1, "b")));
        assert_eq!(a, Success("", ("a", (1, "b"))));
        assert_ne!(a, Success("", ("a", (2, "b"))));
    }

    #[test]
    fn test_unwrap_success() {
        let result: ParseResult<&str, &str> = Success(" world", "Hello,");
        assert_eq!(result.unwrap(), (" world", "Hello,"));
    }

    #[test]
    #[should_panic(expected = "called ParseResult::unwrap on a Failure value")]
    fn test_unwrap_on_failure_panics() {
        let result: ParseResult<&str, &str> = ParseResult::failure("no comma");
        result.unwrap();
    }

    #[test]
    #[should_panic(expected = "unwrap_failure on a Success value")]
    fn test_unwrap_failure_on_success_panics() {
        let result: ParseResult<&str, &str> = Success("", "x");
        result.unwrap_failure();
    }

    #[test]
    fn test_accessors() {
        let ok: ParseResult<&str, i32> = Success("rest", 5);
        assert!(ok.is_success());
        assert_eq!(ok.rest(), Some(&"rest"));
        assert_eq!(ok.taken(), Some(&5));
        assert_eq!(ok.failure_message(), None);

        let err: ParseResult<&str, i32> = ParseResult::failure("bad");
        assert!(err.is_failure());
        assert_eq!(err.rest(), None);
        assert_eq!(err.failure_message(), Some("bad"));
    }

    #[test]
    fn test_map_and_map_failure() {
        let ok: ParseResult<&str, &str> = Success("rest", "123");
        assert_eq!(ok.map(|s| s.len()), Success("rest", 3));

        let err: ParseResult<&str, &str> = ParseResult::failure("inner");
        let err = err.map_failure(|m| format!("outer: {}", m));
        assert_eq!(err.failure_message(), Some("outer: inner"));
    }

    #[test]
    fn test_and_then_threads_rest() {
        let ok: ParseResult<&str, &str> = Success("bc", "a");
        let chained = ok.and_then(|rest, first| Success(&rest[1..], (first, &rest[..1])));
        assert_eq!(chained, Success("c", ("a", "b")));

        let err: ParseResult<&str, &str> = ParseResult::failure("stop");
        let chained = err.and_then(|rest, first| Success(rest, (first, "never")));
        assert_eq!(chained, ParseResult::failure("stop"));
    }

    #[test]
    fn test_into_result_and_question_mark() {
        fn consumer(result: ParseResult<&str, &str>) -> Result<usize, ParseFailure> {
            let (_, taken) = result.into_result()?;
            Ok(taken.len())
        }

        assert_eq!(consumer(Success("", "abc")), Ok(3));
        let err = consumer(ParseResult::failure("missing digits")).unwrap_err();
        assert_eq!(err.to_string(), "missing digits");
        assert_eq!(err.message(), "missing digits");
    }

    #[test]
    fn test_display() {
        let ok: ParseResult<&str, &str> = Success(". Welcome.", "(the best Bob)");
        assert_eq!(ok.to_string(), r#"Success((". Welcome.", "(the best Bob)"))"#);
        let err: ParseResult<&str, &str> = ParseResult::failure("nope");
        assert_eq!(err.to_string(), "Failure(nope)");
    }
}
