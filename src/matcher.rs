use crate::sequence::Sequence;
use std::array;
use std::fmt::Debug;
use std::ops::Range;

/// Locates a delimiter inside a sequence
///
/// A matcher is either a literal (a single element or a subsequence), a
/// predicate over single elements, or a [`Window`] predicate over several
/// consecutive elements. `find_in` returns the native offset range of the
/// first match, so callers can split the input before or after it.
pub trait Matcher<S: Sequence> {
    fn find_in(&self, input: S) -> Option<Range<usize>>;

    /// Native offset where the run of matches at the start of `input` ends
    ///
    /// Literals repeat in whole chunks: `"aa"` over `"aaabbb"` stops at 2,
    /// since the second chunk `"ab"` differs. An empty literal never advances.
    fn leading_run(&self, input: S) -> usize;

    /// Short human-readable form used in failure messages
    fn describe(&self) -> String;
}

/// Predicate matcher: the first element for which the predicate holds
impl<S, F> Matcher<S> for F
where
    S: Sequence,
    F: Fn(S::Element) -> bool,
{
    fn find_in(&self, input: S) -> Option<Range<usize>> {
        let mut elements = input.elements().peekable();
        while let Some((start, element)) = elements.next() {
            if self(element) {
                let end = elements
                    .peek()
                    .map_or(input.offset_len(), |(offset, _)| *offset);
                return Some(start..end);
            }
        }
        None
    }

    fn leading_run(&self, input: S) -> usize {
        input
            .elements()
            .find(|&(_, element)| !self(element))
            .map_or(input.offset_len(), |(offset, _)| offset)
    }

    fn describe(&self) -> String {
        "predicate".to_string()
    }
}

impl<'a> Matcher<&'a str> for char {
    fn find_in(&self, input: &'a str) -> Option<Range<usize>> {
        input
            .find(*self)
            .map(|start| start..start + self.len_utf8())
    }

    fn leading_run(&self, input: &'a str) -> usize {
        input.len() - input.trim_start_matches(*self).len()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl<'a, 'b> Matcher<&'a str> for &'b str {
    fn find_in(&self, input: &'a str) -> Option<Range<usize>> {
        input.find(*self).map(|start| start..start + self.len())
    }

    fn leading_run(&self, input: &'a str) -> usize {
        if self.is_empty() {
            return 0;
        }
        input.len() - input.trim_start_matches(*self).len()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl<'a> Matcher<&'a str> for String {
    fn find_in(&self, input: &'a str) -> Option<Range<usize>> {
        self.as_str().find_in(input)
    }

    fn leading_run(&self, input: &'a str) -> usize {
        self.as_str().leading_run(input)
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl<'a, 'b, T> Matcher<&'a [T]> for &'b [T]
where
    T: PartialEq + Debug,
{
    fn find_in(&self, input: &'a [T]) -> Option<Range<usize>> {
        if self.is_empty() {
            return Some(0..0);
        }
        input
            .windows(self.len())
            .position(|window| window == *self)
            .map(|start| start..start + self.len())
    }

    fn leading_run(&self, input: &'a [T]) -> usize {
        if self.is_empty() {
            return 0;
        }
        let chunks = input
            .chunks(self.len())
            .take_while(|chunk| *chunk == *self)
            .count();
        chunks * self.len()
    }

    fn describe(&self) -> String {
        match self {
            [single] => format!("{:?}", single),
            _ => format!("{:?}", self),
        }
    }
}

impl<'a, T, const N: usize> Matcher<&'a [T]> for [T; N]
where
    T: PartialEq + Debug,
{
    fn find_in(&self, input: &'a [T]) -> Option<Range<usize>> {
        self.as_slice().find_in(input)
    }

    fn leading_run(&self, input: &'a [T]) -> usize {
        self.as_slice().leading_run(input)
    }

    fn describe(&self) -> String {
        Matcher::<&'a [T]>::describe(&self.as_slice())
    }
}

/// Predicate over `N` consecutive elements
///
/// The predicate sees every window of `N` neighbouring elements, from left
/// to right. A match spans the whole window, so `find_in` covers the `N`
/// elements starting where the predicate first holds.
///
/// As a leading run, the window slides while the predicate holds. The run
/// ends with the last element of the final good window: for strictly
/// increasing neighbours, `[1, 2, 3, 4, 5, 1, 2]` runs over `[1, 2, 3, 4, 5]`.
/// Input shorter than one window has nothing to reject and is taken whole.
#[derive(Debug, Clone, Copy)]
pub struct Window<F, const N: usize> {
    predicate: F,
}

impl<F, const N: usize> Window<F, N> {
    pub fn new(predicate: F) -> Self {
        Window { predicate }
    }

    fn window_at<E: Copy>(items: &[(usize, E)], start: usize) -> [E; N] {
        array::from_fn(|k| items[start + k].1)
    }
}

/// Convenience function to create a Window matcher
///
/// `N` is usually inferred from the closure argument,
/// e.g. `window(|[a, b]: [char; 2]| a == b)`.
pub fn window<F, const N: usize>(predicate: F) -> Window<F, N> {
    Window::new(predicate)
}

/// Offset of the `index`-th element, or `len` past the last one
fn offset_at<E>(items: &[(usize, E)], index: usize, len: usize) -> usize {
    items.get(index).map_or(len, |(offset, _)| *offset)
}

impl<S, F, const N: usize> Matcher<S> for Window<F, N>
where
    S: Sequence,
    F: Fn([S::Element; N]) -> bool,
{
    fn find_in(&self, input: S) -> Option<Range<usize>> {
        let items: Vec<_> = input.elements().collect();
        let len = input.offset_len();
        (0..(items.len() + 1).saturating_sub(N))
            .find(|&start| (self.predicate)(Self::window_at(&items, start)))
            .map(|start| offset_at(&items, start, len)..offset_at(&items, start + N, len))
    }

    fn leading_run(&self, input: S) -> usize {
        let items: Vec<_> = input.elements().collect();
        let len = input.offset_len();
        let first_rejected = (0..(items.len() + 1).saturating_sub(N))
            .find(|&start| !(self.predicate)(Self::window_at(&items, start)));
        match first_rejected {
            Some(0) => 0,
            Some(start) => offset_at(&items, start + N - 1, len),
            None => len,
        }
    }

    fn describe(&self) -> String {
        format!("predicate over {} elements", N)
    }
}
