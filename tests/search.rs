use classic_sort_rs::search::{binary_search, binary_search_by, first_match};

const DATA: [i32; 14] = [-10, -5, 0, 1, 2, 3, 5, 7, 11, 100, 100, 100, 1000, 10000];

fn gen_arr(len: i32) -> Vec<i32> {
    (0..len).collect()
}

#[test]
fn binary_search_insertion_points() {
    let cases: [(Vec<i32>, i32, usize); 16] = [
        (gen_arr(0), 0, 0),
        (gen_arr(1), 0, 0),
        (gen_arr(1), 1, 1),
        (gen_arr(1), -1, 0),
        (gen_arr(2), 0, 0),
        (gen_arr(2), 1, 1),
        (gen_arr(2), -1, 0),
        (gen_arr(2), 2, 2),
        (gen_arr(100), 0, 0),
        (gen_arr(100), 99, 99),
        (gen_arr(100), 49, 49),
        (gen_arr(100), 50, 50),
        (gen_arr(100), 51, 51),
        (gen_arr(100), 100, 100),
        (gen_arr(100), 150, 100),
        (gen_arr(100), -150, 0),
    ];

    for (v, target, expected) in cases {
        assert_eq!(binary_search(&v, &target), expected, "len: {}, target: {target}", v.len());
    }
}

#[test]
fn binary_search_finds_present_values() {
    for val in DATA {
        let idx = binary_search(&DATA, &val);
        assert_eq!(DATA[idx], val);
    }
}

#[test]
fn binary_search_missing_values() {
    assert_eq!(binary_search(&DATA, &-11), 0);
    assert_eq!(binary_search(&DATA, &4), 6);
    assert_eq!(binary_search(&DATA, &99), 9);
    assert_eq!(binary_search(&DATA, &10001), DATA.len());
}

#[test]
fn binary_search_by_descending_order() {
    let v = [9, 7, 5, 3, 1];

    assert_eq!(binary_search_by(&v, &5, |elem, target| target.cmp(elem)), 2);
    assert_eq!(binary_search_by(&v, &6, |elem, target| target.cmp(elem)), 2);
    assert_eq!(binary_search_by(&v, &0, |elem, target| target.cmp(elem)), 5);
}

#[test]
fn binary_search_by_key_only() {
    let v = [(1, 'a'), (3, 'b'), (5, 'c')];

    assert_eq!(binary_search_by(&v, &(3, 'z'), |elem, target| elem.0.cmp(&target.0)), 1);
    assert_eq!(binary_search_by(&v, &(4, 'z'), |elem, target| elem.0.cmp(&target.0)), 2);
}

#[test]
fn first_match_boundaries() {
    assert_eq!(first_match(&[] as &[i32], |_| true), 0);
    assert_eq!(first_match(&DATA, |_| true), 0);
    assert_eq!(first_match(&DATA, |_| false), DATA.len());
    assert_eq!(first_match(&DATA, |&x| x >= 100), 9);
    assert_eq!(first_match(&DATA, |&x| x > 100), 12);
    assert_eq!(first_match(&DATA, |&x| x >= 4), 6);
}

#[test]
fn first_match_is_inverse_of_partition_point() {
    for threshold in -20..20 {
        let v = gen_arr(30);
        assert_eq!(
            first_match(&v, |&x| x >= threshold),
            v.partition_point(|&x| x < threshold)
        );
    }
}
