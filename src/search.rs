//! Binary search over sorted slices.

use std::cmp::Ordering;

/// Binary searches the sorted slice `v` for `target`.
///
/// If `v` contains an element equal to `target` its index is returned. With several equal
/// elements any one of them may be returned. Otherwise the returned index is the position where
/// `target` could be inserted while keeping `v` sorted. The result is always in `0..=v.len()`.
pub fn binary_search<T>(v: &[T], target: &T) -> usize
where
    T: Ord,
{
    binary_search_by(v, target, |elem, target| elem.cmp(target))
}

/// Binary searches the slice `v`, sorted according to `compare`, for `target`.
///
/// `compare` is called as `compare(elem, target)`. Returns the same as [`binary_search`].
pub fn binary_search_by<T, F>(v: &[T], target: &T, mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut lo = 0;
    let mut hi = v.len();

    // Everything in `v[..lo]` is less than `target`, everything in `v[hi..]` is greater.
    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        match compare(&v[mid], target) {
            Ordering::Equal => return mid,
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    lo
}

/// Returns the smallest index `i` for which `pred(&v[i])` is true, or `v.len()` if there is none.
///
/// `pred` must be false for a (possibly empty) prefix of `v` and true for the remainder. Note this
/// is the inverse of [`slice::partition_point`], which looks for the first element the predicate
/// rejects.
pub fn first_match<T, P>(v: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut lo = 0;
    let mut hi = v.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        if pred(&v[mid]) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    lo
}
