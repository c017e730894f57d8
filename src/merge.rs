//! Top-down recursive merge sort.
//!
//! Each merge takes an element from the left run only if it is strictly less than the current
//! element of the right run. On ties the right run wins, so equal elements from the right half are
//! placed before equal elements from the left half and the sort is *not* stable.

use std::cmp::Ordering;
use std::mem;
use std::ops::Range;
use std::ptr;

use crate::border;
use crate::error::SortResult;

sort_impl!("merge_sort_unstable");

/// Sorts the whole slice by the natural order of `T`.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    let range = border::full(v.len());
    merge_sort(v, range, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the whole slice with `compare`.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let range = border::full(v.len());
    merge_sort(v, range, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v[start..end]` by the natural order of `T`.
pub fn sort_range<T>(v: &mut [T], start: isize, end: isize) -> SortResult
where
    T: Ord,
{
    sort_range_by(v, crate::natural_order, start, end)
}

/// Sorts `v[start..end]` with `compare`. Elements outside the borders are left untouched.
///
/// Fails with [`SortError::OutOfRange`](crate::SortError::OutOfRange) unless
/// `0 <= start <= end <= v.len()`, in which case `v` is not modified.
pub fn sort_range_by<T, F>(v: &mut [T], compare: F, start: isize, end: isize) -> SortResult
where
    F: FnMut(&T, &T) -> Ordering,
{
    try_sort_range_by(Some(v), Some(compare), start, end)
}

/// Like [`sort_range_by`], but both the sequence and the comparator may be absent.
///
/// Arguments are checked in order: sequence, comparator, borders. The first failing check is
/// reported and nothing is sorted. Panics raised by `compare` are propagated, `v` then still holds
/// every one of its original elements exactly once.
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

    tracing::trace!(algorithm = "merge_sort", start, end, len = v.len(), "sorting range");

    merge_sort(v, range, &mut |a, b| compare(a, b) == Ordering::Less);
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn merge_sort<T, F>(v: &mut [T], range: Range<usize>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    let v = &mut v[range];
    let len = v.len();

    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    // Every merge copies its left run into `buf`, and a left run is never longer than `len / 2`.
    // The buffer is only used as raw scratch space, its length stays 0 so nothing is ever dropped
    // through it.
    let mut buf = Vec::<T>::with_capacity(len / 2);

    sort_split(v, buf.as_mut_ptr(), is_less);
}

/// Sorts `v` by splitting it at `len / 2`, sorting both halves and merging them.
///
/// `buf` must be valid for writes of `v.len() / 2` elements.
fn sort_split<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    sort_split(&mut v[..mid], buf, is_less);
    sort_split(&mut v[mid..], buf, is_less);

    // SAFETY: 0 < mid < len, and `buf` holds `mid` elements by the contract above.
    unsafe {
        merge(v, mid, buf, is_less);
    }
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` using `buf` as temporary storage, and
/// stores the result into `v[..]`.
///
/// # Safety
///
/// The two slices must be non-empty and `mid` must be in bounds. Buffer `buf` must be long enough
/// to hold a copy of `v[..mid]`. Also, `T` must not be a zero-sized type.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    let arr_ptr = v.as_mut_ptr();
    let (v_mid, v_end) = unsafe { (arr_ptr.add(mid), arr_ptr.add(len)) };

    // The left run is copied into `buf`, then the copy and the right run are traced forwards,
    // writing the chosen element into `v` each step. The write position never overtakes the right
    // run's read position, they only meet once the left copy is used up.
    //
    // If the right run is consumed first, whatever is left of the copy is moved into the remaining
    // hole at the end of `v`. `hole` does that on drop, which also restores `v` to a permutation of
    // its original elements if `is_less` panics.
    let mut hole;

    unsafe {
        ptr::copy_nonoverlapping(arr_ptr, buf, mid);
        hole = MergeHole {
            start: buf,
            end: buf.add(mid),
            dest: arr_ptr,
        };
    }

    let left = &mut hole.start;
    let mut right = v_mid;
    let out = &mut hole.dest;

    while *left < hole.end && right < v_end {
        // Only a strictly lesser left element is taken first. On equality the right run wins.
        unsafe {
            if is_less(&**left, &*right) {
                ptr::copy_nonoverlapping(*left, *out, 1);
                *left = left.add(1);
            } else {
                ptr::copy_nonoverlapping(right, *out, 1);
                right = right.add(1);
            }
            *out = out.add(1);
        }
    }

    // Finally, `hole` gets dropped.

    // When dropped, copies the range `start..end` into `dest..`.
    struct MergeHole<T> {
        start: *mut T,
        end: *mut T,
        dest: *mut T,
    }

    impl<T> Drop for MergeHole<T> {
        fn drop(&mut self) {
            // SAFETY: `T` is not a zero-sized type, `start..end` lies within `buf` and the hole
            // starting at `dest` is exactly as long as the unconsumed part of the copy.
            unsafe {
                let len = self.end.offset_from(self.start) as usize;
                ptr::copy_nonoverlapping(self.start, self.dest, len);
            }
        }
    }
}
