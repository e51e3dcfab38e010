use std::mem::MaybeUninit;
use std::ptr;

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` using `buf` as temporary storage, and
/// stores the result into `v[..]`.
///
/// The merged run is first written into `buf` and then copied back over `v` in one go. Until that
/// final copy `v` is only read from, so if `is_less` panics every element is still in `v` exactly
/// once and the shallow copies in `buf` are simply forgotten.
///
/// Panics if `buf` is shorter than `v`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn merge<T, F>(v: &mut [T], mid: usize, buf: &mut [MaybeUninit<T>], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // One of the runs is empty, the other one is already in place.
    if mid == 0 || mid >= len {
        return;
    }

    assert!(buf.len() >= len, "merge buffer is shorter than the merged range");

    // SAFETY: `left` only advances while it is below `left_end` and `right` only while it is below
    // `right_end`, so every read is in-bounds of `v`. Exactly `len` elements are written through
    // `out`, which we checked `buf` can hold. `v` and `buf` are distinct borrows, so none of the
    // copies overlap. `MaybeUninit<T>` has the same layout as `T`.
    unsafe {
        let v_base = v.as_mut_ptr();
        let buf_base = buf.as_mut_ptr().cast::<T>();

        let mut left = v_base as *const T;
        let left_end = v_base.add(mid) as *const T;
        let mut right = left_end;
        let right_end = v_base.add(len) as *const T;
        let mut out = buf_base;

        for _ in 0..len {
            let take_left = if left == left_end {
                false
            } else if right == right_end {
                true
            } else {
                // If equal, prefer the left run to maintain stability.
                !is_less(&*right, &*left)
            };

            let src = if take_left { left } else { right };
            ptr::copy_nonoverlapping(src, out, 1);
            out = out.add(1);
            left = left.add(take_left as usize);
            right = right.add(!take_left as usize);
        }

        ptr::copy_nonoverlapping(buf_base, v_base, len);
    }
}
