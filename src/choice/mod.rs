//! Combinators that compose several parsers: the first that matches, all of
//! them in sequence, or all of them in any order.

pub mod all_of;
pub mod one_of;
pub mod permutation_of;

pub use all_of::{AllOf, Chain, all_of};
pub use one_of::{Alternatives, OneOf, one_of};
pub use permutation_of::{Permutation, PermutationOf, permutation_of};
