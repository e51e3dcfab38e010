use classic_sort_rs::merge::{merge, merge_by};

#[test]
fn empty_inputs() {
    assert_eq!(merge::<i32>(&[], &[]), Vec::<i32>::new());
    assert_eq!(merge(&[1, 2], &[]), [1, 2]);
    assert_eq!(merge(&[], &[1, 2]), [1, 2]);
}

#[test]
fn interleaved() {
    assert_eq!(merge(&[1, 4, 5, 8, 9], &[0, 2, 3, 6, 7]), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(merge(&[-5, 100], &[-7, -6, 0, 101]), [-7, -6, -5, 0, 100, 101]);
}

#[test]
fn left_first_on_ties() {
    let left = [(1, 'a'), (2, 'b'), (2, 'c')];
    let right = [(1, 'x'), (2, 'y'), (3, 'z')];

    let merged = merge_by(&left, &right, |a, b| a.0.cmp(&b.0));

    assert_eq!(
        merged,
        [(1, 'a'), (1, 'x'), (2, 'b'), (2, 'c'), (2, 'y'), (3, 'z')]
    );
}

#[test]
fn random_runs() {
    let mut left = sort_test_tools::patterns::random_uniform(300, 0..50);
    let mut right = sort_test_tools::patterns::random_uniform(177, 0..50);
    left.sort();
    right.sort();

    let merged = merge(&left, &right);

    let mut expected = [left.as_slice(), right.as_slice()].concat();
    expected.sort();
    assert_eq!(merged, expected);
}
