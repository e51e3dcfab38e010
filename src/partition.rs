//! Three-way partitioning.

use std::cmp::Ordering;
use std::ops::Range;

/// Partitions `v` around `pivot`, see [`three_way_by`].
pub fn three_way<T>(v: &mut [T], pivot: &T) -> Range<usize>
where
    T: Ord,
{
    three_way_by(v, |elem| elem.cmp(pivot))
}

/// Takes the input slice `v` and re-arranges elements such that when the call returns all
/// elements for which `f(elem)` is `Less` are at the start of `v`, followed by all elements for
/// which it is `Equal`, followed by all elements for which it is `Greater`.
///
/// Returns the range of the `Equal` elements. The range is empty if there are none, its start is
/// then the number of `Less` elements.
///
/// Each element is passed to `f` exactly once. The partition is not stable.
pub fn three_way_by<T, F>(v: &mut [T], mut f: F) -> Range<usize>
where
    F: FnMut(&T) -> Ordering,
{
    // v[..lt]    Less
    // v[lt..i]   Equal
    // v[i..gt]   not yet seen
    // v[gt..]    Greater
    let mut lt = 0;
    let mut i = 0;
    let mut gt = v.len();

    while i < gt {
        match f(&v[i]) {
            Ordering::Less => {
                v.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Equal => i += 1,
            Ordering::Greater => {
                gt -= 1;
                v.swap(i, gt);
            }
        }
    }

    lt..gt
}
