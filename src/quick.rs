//! Recursive quicksort with Hoare partitioning around the middle element.
//!
//! Partitioning works on inclusive borders `[lo, hi]`. The public borders are half-open, so the
//! top-level call passes `end - 1`.

use std::cmp::Ordering;
use std::ops::Range;

use crate::border;
use crate::error::SortResult;

sort_impl!("quick_sort_unstable");

/// Sorts the whole slice by the natural order of `T`.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    let range = border::full(v.len());
    quick_sort(v, range, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the whole slice with `compare`.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let range = border::full(v.len());
    quick_sort(v, range, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v[start..end]` by the natural order of `T`.
pub fn sort_range<T>(v: &mut [T], start: isize, end: isize) -> SortResult
where
    T: Ord,
{
    sort_range_by(v, crate::natural_order, start, end)
}

/// Sorts `v[start..end]` with `compare`. Elements outside the borders are left untouched.
pub fn sort_range_by<T, F>(v: &mut [T], compare: F, start: isize, end: isize) -> SortResult
where
    F: FnMut(&T, &T) -> Ordering,
{
    try_sort_range_by(Some(v), Some(compare), start, end)
}

/// Like [`sort_range_by`], but both the sequence and the comparator may be absent.
///
/// The borders are checked against the exclusive `end`, before it is turned into the inclusive
/// upper border used by the partitioning.
pub fn try_sort_range_by<T, F>(
    v: Option<&mut [T]>,
    compare: Option<F>,
    start: isize,
    end: isize,
) -> SortResult
where
    F: FnMut(&T, &T) -> Ordering,
{
    let v = border::require(v, "array")?;
    let mut compare = border::require(compare, "comparer")?;
    let range = border::check_borders(v.len(), start, end)?;

    tracing::trace!(algorithm = "quick_sort", start, end, len = v.len(), "sorting range");

    quick_sort(v, range, &mut |a, b| compare(a, b) == Ordering::Less);
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn quick_sort<T, F>(v: &mut [T], range: Range<usize>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let v = &mut v[range];

    if let Some(hi) = v.len().checked_sub(1) {
        quicksort(v, 0, hi, is_less);
    }
}

/// Sorts the inclusive range `v[lo..=hi]`.
fn quicksort<T, F>(v: &mut [T], mut lo: usize, mut hi: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while lo < hi {
        let part = partition(v, lo, hi, is_less);

        // Recurse into the smaller side and continue with the larger one, this keeps the stack
        // depth logarithmic. Both sides are disjoint so the order does not affect the result.
        if part - lo < hi - part {
            quicksort(v, lo, part, is_less);
            lo = part + 1;
        } else {
            quicksort(v, part + 1, hi, is_less);
            hi = part;
        }
    }
}

/// Hoare partition of `v[lo..=hi]` around the value in the middle, with `lo < hi`.
///
/// Returns `j` such that every element in `v[lo..=j]` is not greater than the pivot and every
/// element in `v[j + 1..=hi]` is not less than it, with `lo <= j < hi`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition<T, F>(v: &mut [T], lo: usize, hi: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(lo < hi && hi < v.len());

    // The pivot is a value, not a position. Whenever its slot takes part in a swap, follow it.
    let mut pivot = lo + (hi - lo) / 2;

    let mut i = lo;
    let mut j = hi;

    while i <= j {
        // For a total order the pivot value itself stops both scans, the bounds only matter for
        // comparators that are not.
        while i < hi && is_less(&v[i], &v[pivot]) {
            i += 1;
        }

        while j > lo && is_less(&v[pivot], &v[j]) {
            j -= 1;
        }

        if i >= j {
            break;
        }

        v.swap(i, j);
        if pivot == i {
            pivot = j;
        } else if pivot == j {
            pivot = i;
        }

        i += 1;
        j -= 1;
    }

    // Splitting at `hi` would leave the left side as large as the input.
    j.min(hi - 1)
}
