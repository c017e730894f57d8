//! In-place merge sort and quick sort over slices, with optional sub-range borders.
//!
//! Both algorithms expose the same set of entry points, see [`merge`] and [`quick`]. Sorting needs
//! exclusive access to the sequence for the whole call. Sorting overlapping ranges of one sequence
//! from several threads requires external locking, which `&mut [T]` already enforces in safe code.

use std::cmp::Ordering;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }

            #[inline]
            fn sort_range_by<T, F>(
                arr: &mut [T],
                compare: F,
                start: isize,
                end: isize,
            ) -> $crate::SortResult
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_range_by(arr, compare, start, end)
            }
        }
    };
}

mod border;
pub mod error;
pub mod merge;
pub mod patterns;
pub mod quick;

pub use error::{SortError, SortResult};

/// Nullable entry point for merge sort, see [`merge::try_sort_range_by`].
pub use merge::try_sort_range_by as sort_merge;

/// Nullable entry point for quick sort, see [`quick::try_sort_range_by`].
pub use quick::try_sort_range_by as sort_quick;

/// Common interface of the sort implementations, used to drive tests and benchmarks generically.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    fn sort_range_by<T, F>(arr: &mut [T], compare: F, start: isize, end: isize) -> SortResult
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// The default comparator, the natural order of `T`.
#[inline]
pub fn natural_order<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}
