// Two-way merge shared by both merge sorts.
pub(crate) mod merge;

// Baseline O(n^2) sort, O(n) on sorted input.
pub mod rust_insertion_sort;

// Recursive merge sort.
pub mod rust_mergesort_top_down;

// Iterative merge sort, same output as the top-down variant.
pub mod rust_mergesort_bottom_up;
