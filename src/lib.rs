//! Comparison driven slice algorithms. The stable and unstable sorts all share the
//! `sort`/`sort_by` surface and register themselves with the shared test suite via `sort_impl!`.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

pub mod stable;
pub mod unstable;

pub mod merge;
pub mod partition;
pub mod search;
pub mod shuffle;
