use std::cmp::{self, Ordering};
use std::mem::size_of;

use crate::stable::merge::merge;

sort_impl!("rust_mergesort_bottom_up_stable");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
///
/// # Current implementation
///
/// Iterative bottom-up merge sort. The first pass merges neighboring single elements into runs of
/// two, every following pass merges neighboring runs of the previous pass, doubling the run length
/// until a single run spans the whole slice. There is no recursion. The result is identical to
/// [`rust_mergesort_top_down`](super::rust_mergesort_top_down), only the merge order differs.
///
/// It allocates temporary storage the size of `v` once per call.
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

    // See `rust_mergesort_top_down` for why the length stays 0.
    let mut buf = Vec::<T>::with_capacity(len);
    let buf = buf.spare_capacity_mut();

    let mut run_len = 1;
    while run_len < len {
        // Merge pairs of neighboring runs. The last pair may have a short right run, a lone run at
        // the end is left alone and picked up by a later pass.
        let mut lo = 0;
        while lo < len - run_len {
            let mid = lo + run_len;
            let hi = cmp::min(mid + run_len, len);

            merge(&mut v[lo..hi], run_len, &mut buf[..hi - lo], &mut is_less);

            lo = hi;
        }

        run_len *= 2;
    }
}
