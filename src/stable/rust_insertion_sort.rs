#![allow(unused_unsafe)]

use std::cmp::Ordering;
use std::mem::ManuallyDrop;
use std::ptr;

sort_impl!("rust_insertion_sort_stable");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements), *O*(*n*^2) worst-case and *O*(*n*)
/// on already sorted input. It does not allocate.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// This sort is stable (i.e., does not reorder equal elements), *O*(*n*^2) worst-case and *O*(*n*)
/// on already sorted input.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but the slice still holds
/// every element it held before the call.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // SAFETY: `v_base.add(i)` is in-bounds for every `i` in `1..len`, and `v_base < tail` holds as
    // `i >= 1`. Everything left of `tail` was sorted by the previous iterations.
    unsafe {
        let v_base = v.as_mut_ptr();
        for i in 1..len {
            insert_tail(v_base, v_base.add(i), &mut is_less);
        }
    }
}

/// Sorts range [begin, tail] assuming [begin, tail) is already sorted.
///
/// Elements of the prefix are only shifted past the tail element while they compare strictly
/// greater than it, equal elements keep their order.
///
/// # Safety
/// begin < tail and p must be valid and initialized for all begin <= p <= tail.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
unsafe fn insert_tail<T, F>(begin: *mut T, tail: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // SAFETY: see individual comments.
    unsafe {
        // SAFETY: in-bounds as tail > begin.
        let mut sift = tail.sub(1);
        if !is_less(&*tail, &*sift) {
            return;
        }

        // SAFETY: after this read tail is never read from again, as we only ever
        // read from sift, sift < tail and we only ever decrease sift. Thus this is
        // effectively a move, not a copy. Should a panic occur, or we have found
        // the correct insertion position, gap_guard ensures the element is moved
        // back into the array.
        let tmp = ManuallyDrop::new(tail.read());
        let mut gap_guard = CopyOnDrop {
            src: &*tmp,
            dst: tail,
        };

        loop {
            // SAFETY: we move sift into the gap (which is valid), and point the
            // gap guard destination at sift, ensuring that if a panic occurs the
            // gap is once again filled.
            ptr::copy_nonoverlapping(sift, gap_guard.dst, 1);
            gap_guard.dst = sift;

            if sift == begin {
                break;
            }

            // SAFETY: we checked that sift != begin, thus this is in-bounds.
            sift = sift.sub(1);
            if !is_less(&tmp, &*sift) {
                break;
            }
        }
    }
}

// When dropped, copies from `src` into `dst`.
struct CopyOnDrop<T> {
    src: *const T,
    dst: *mut T,
}

impl<T> Drop for CopyOnDrop<T> {
    fn drop(&mut self) {
        // SAFETY: `src` holds the element taken out of the slice and `dst` is the current gap.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dst, 1);
        }
    }
}
