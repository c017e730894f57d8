//! Argument checks shared by every sort entry point.

use std::ops::Range;

use crate::error::{SortError, SortResult};

/// Unwraps an optional argument, or reports it as missing under `name`.
pub(crate) fn require<A>(arg: Option<A>, name: &'static str) -> SortResult<A> {
    match arg {
        Some(val) => Ok(val),
        None => {
            tracing::debug!(name, "rejecting missing sort argument");
            Err(SortError::NullArgument { name })
        }
    }
}

/// Turns signed `start..end` borders into an index range of a sequence with `len` elements.
///
/// Accepts exactly `0 <= start <= end <= len`.
pub(crate) fn check_borders(len: usize, start: isize, end: isize) -> SortResult<Range<usize>> {
    // A negative border fails the conversion, so the remaining checks are done on usize.
    match (usize::try_from(start), usize::try_from(end)) {
        (Ok(s), Ok(e)) if s <= e && e <= len => Ok(s..e),
        _ => {
            tracing::debug!(start, end, len, "rejecting sort borders");
            Err(SortError::OutOfRange { start, end, len })
        }
    }
}

/// Full-sequence borders, for the overloads without explicit range.
#[inline]
pub(crate) fn full(len: usize) -> Range<usize> {
    0..len
}
