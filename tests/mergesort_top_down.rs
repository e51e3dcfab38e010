use classic_sort_rs::stable::rust_mergesort_top_down;
use sort_test_tools::instantiate_stable_sort_tests;

type TestSort = rust_mergesort_top_down::SortImpl;

instantiate_stable_sort_tests!(TestSort);

fn comparison_bound(len: usize) -> usize {
    // Each of the ceil(log2(len)) levels merges at most `len` elements with fewer comparisons
    // than elements.
    let levels = usize::BITS - len.saturating_sub(1).leading_zeros();
    len * levels as usize
}

#[test]
fn n_log_n_comparisons() {
    for len in [0usize, 1, 2, 3, 7, 64, 1_000, 4_097] {
        for mut v in [
            sort_test_tools::patterns::random(len),
            sort_test_tools::patterns::descending(len),
            sort_test_tools::patterns::random_uniform(len, 0..4),
        ] {
            let mut comparisons = 0;

            rust_mergesort_top_down::sort_by(&mut v, |a, b| {
                comparisons += 1;
                a.cmp(b)
            });

            assert!(comparisons <= comparison_bound(len), "len: {len}, comparisons: {comparisons}");
            assert!(sort_test_tools::tests::is_sorted_by(&v, |a, b| a.cmp(b)));
        }
    }
}

#[test]
fn non_copy_elements() {
    let mut v: Vec<Box<String>> = ["pear", "apple", "fig", "apple", "kiwi"]
        .iter()
        .map(|s| Box::new(s.to_string()))
        .collect();

    rust_mergesort_top_down::sort(&mut v);

    let sorted: Vec<&str> = v.iter().map(|s| s.as_str()).collect();
    assert_eq!(sorted, ["apple", "apple", "fig", "kiwi", "pear"]);
}
