use std::iter::{self, Enumerate};
use std::slice;
use std::str::CharIndices;

/// Generic input sequence for the built-in parsers
///
/// A sequence is an immutable view over ordered elements that can be split
/// into a consumed prefix and a remaining suffix without copying. Positions
/// are expressed as native offsets: byte offsets for `&str` (always on a
/// character boundary) and indices for slices.
pub trait Sequence: Copy {
    /// The type of elements this sequence iterates over
    type Element: Copy;

    /// Iterator over `(offset, element)` pairs
    type Elements: Iterator<Item = (usize, Self::Element)>;

    fn elements(self) -> Self::Elements;

    /// Length in native offsets
    fn offset_len(self) -> usize;

    /// Split into `(prefix, suffix)` at a native offset
    ///
    /// `offset` must come from this sequence (an element offset or
    /// `offset_len`).
    fn split_at_offset(self, offset: usize) -> (Self, Self);

    /// Number of elements
    fn element_count(self) -> usize {
        self.elements().count()
    }

    /// Native offset just after the first `n` elements, or `None` when the
    /// sequence holds fewer than `n` elements
    fn offset_of(self, n: usize) -> Option<usize> {
        self.elements()
            .map(|(offset, _)| offset)
            .chain(iter::once(self.offset_len()))
            .nth(n)
    }
}

impl<'a> Sequence for &'a str {
    type Element = char;
    type Elements = CharIndices<'a>;

    fn elements(self) -> Self::Elements {
        self.char_indices()
    }

    fn offset_len(self) -> usize {
        self.len()
    }

    fn split_at_offset(self, offset: usize) -> (Self, Self) {
        self.split_at(offset)
    }

    fn element_count(self) -> usize {
        self.chars().count()
    }
}

impl<'a, T> Sequence for &'a [T] {
    type Element = &'a T;
    type Elements = Enumerate<slice::Iter<'a, T>>;

    fn elements(self) -> Self::Elements {
        self.iter().enumerate()
    }

    fn offset_len(self) -> usize {
        self.len()
    }

    fn split_at_offset(self, offset: usize) -> (Self, Self) {
        self.split_at(offset)
    }

    fn element_count(self) -> usize {
        self.len()
    }

    fn offset_of(self, n: usize) -> Option<usize> {
        (n <= self.len()).then_some(n)
    }
}
