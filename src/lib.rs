//! # TakeComb - Take-based Parser Combinators
//!
//! A small parser combinator library where every parser *takes* a prefix of
//! its input and hands back the rest.
//!
//! A parser is anything implementing [`Parser`], including plain functions
//! `fn(I) -> ParseResult<I, O>`. Parsing produces either
//! `Success(rest, taken)` or `Failure(message)`; nothing panics and the input
//! is never copied, `rest` and `taken` are views into it.
//!
//! - **Basic parsers** ([`basic`]): take N elements, take while a predicate
//!   holds, take until (or including) the first match of a condition
//! - **Combinators** ([`choice`]): the first of several parsers, all of them
//!   in sequence, or all of them in any order
//! - **Delimiters** ([`delimited`]): take what lies between (or around) a pair
//!   of delimiters
//! - **Adapters**: [`map`] the taken value, repeat with [`many`]
//!
//! Built-in parsers work on any [`Sequence`], which is implemented for `&str`
//! and for slices `&[T]`. Conditions are given as a [`Matcher`]: a single
//! element, a literal run of elements, a predicate, or a [`window`] predicate
//! over several neighbouring elements.

pub mod basic;
pub mod choice;
pub mod delimited;
pub mod many;
pub mod map;
pub mod matcher;
pub mod parser;
pub mod result;
pub mod sequence;

pub use basic::{
    TakeInclude, TakeN, TakeUntil, TakeWhile, take_include, take_n, take_until, take_while,
};
pub use choice::{AllOf, OneOf, PermutationOf, all_of, one_of, permutation_of};
pub use delimited::{TakeAround, TakeBetween, take_around, take_between};
pub use many::{Many, many};
pub use map::{Map, MapExt, map};
pub use matcher::{Matcher, Window, window};
pub use parser::Parser;
pub use result::{ParseFailure, ParseResult};
pub use sequence::Sequence;
