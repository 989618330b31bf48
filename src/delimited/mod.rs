pub mod take_around;
pub mod take_between;

pub use take_around::{TakeAround, take_around};
pub use take_between::{TakeBetween, take_between};

use crate::matcher::Matcher;
use crate::sequence::Sequence;
use std::borrow::Cow;
use std::ops::Range;

/// Finds the opening delimiter, then the closing delimiter after it
///
/// Returns the opening match as offsets into `input` and the closing match as
/// offsets into the part of `input` that follows the opening match.
pub(crate) fn locate<S, O, C>(
    input: S,
    open: &O,
    close: &C,
) -> Result<(Range<usize>, Range<usize>), Cow<'static, str>>
where
    S: Sequence,
    O: Matcher<S>,
    C: Matcher<S>,
{
    let Some(open_range) = open.find_in(input) else {
        return Err(format!(
            "Could not find start_delimiter=`{}` in input.",
            open.describe()
        )
        .into());
    };

    let (_, after_open) = input.split_at_offset(open_range.end);
    match close.find_in(after_open) {
        Some(close_range) => Ok((open_range, close_range)),
        None => Err(format!(
            "Could not find end_delimiter=`{}` in input after start_delimiter=`{}`.",
            close.describe(),
            open.describe()
        )
        .into()),
    }
}
