use std::cmp::Ordering;
use std::mem::{size_of, MaybeUninit};

use crate::stable::merge::merge;

sort_impl!("rust_mergesort_top_down_stable");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
///
/// # Current implementation
///
/// Classic recursive top-down merge sort. The slice is halved until the ranges hold at most one
/// element, and the sorted halves are merged on the way back up. It allocates temporary storage
/// the size of `v` once per call, every merge reuses it.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// classic_sort_rs::stable::rust_mergesort_top_down::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but the slice still holds
/// every element it held before the call.
///
/// # Examples
///
/// ```
/// use classic_sort_rs::stable::rust_mergesort_top_down::sort_by;
///
/// let mut v = [5, 4, 1, 3, 2];
/// sort_by(&mut v, |a, b| a.cmp(b));
/// assert!(v == [1, 2, 3, 4, 5]);
///
/// // reverse sorting
/// sort_by(&mut v, |a, b| b.cmp(a));
/// assert!(v == [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

fn merge_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // Allocate a buffer to use as scratch memory. We keep the length 0 so we can keep in it
    // shallow copies of the contents of `v` without risking the dtors running on copies if
    // `is_less` panics.
    let mut buf = Vec::<T>::with_capacity(len);

    sort_range(v, 0, len, buf.spare_capacity_mut(), &mut is_less);
}

/// Sorts `v[lo..hi]`, `buf` must cover at least `v.len()` elements.
fn sort_range<T, F>(v: &mut [T], lo: usize, hi: usize, buf: &mut [MaybeUninit<T>], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if hi - lo <= 1 {
        return;
    }

    let mid = lo + (hi - lo) / 2;

    sort_range(v, lo, mid, buf, is_less);
    sort_range(v, mid, hi, buf, is_less);

    merge(&mut v[lo..hi], mid - lo, &mut buf[lo..hi], is_less);
}
