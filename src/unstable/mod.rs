// Baseline O(n^2) sort with at most n - 1 swaps.
pub mod rust_selection_sort;
