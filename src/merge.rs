//! Out-of-place merging of two sorted slices.

use std::cmp::Ordering;

/// Merges the sorted slices `left` and `right` into a new sorted vector.
///
/// On equal elements the one from `left` comes first.
pub fn merge<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    merge_by(left, right, |a, b| a.cmp(b))
}

/// Merges the slices `left` and `right`, both sorted according to `compare`, into a new vector
/// sorted according to `compare`.
///
/// The merge is stable: equal elements keep their order within each input, and elements from
/// `left` come before equal elements from `right`.
pub fn merge_by<T, F>(left: &[T], right: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());

    let mut l = 0;
    let mut r = 0;
    while l < left.len() && r < right.len() {
        if compare(&left[l], &right[r]) != Ordering::Greater {
            merged.push(left[l].clone());
            l += 1;
        } else {
            merged.push(right[r].clone());
            r += 1;
        }
    }

    // At most one of these is non-empty.
    merged.extend_from_slice(&left[l..]);
    merged.extend_from_slice(&right[r..]);

    merged
}
