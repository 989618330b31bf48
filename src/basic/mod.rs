pub mod take_include;
pub mod take_n;
pub mod take_until;
pub mod take_while;

pub use take_include::{TakeInclude, take_include};
pub use take_n::{TakeN, take_n};
pub use take_until::{TakeUntil, take_until};
pub use take_while::{TakeWhile, take_while};
