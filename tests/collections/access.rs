//! Integration tests for positional access and search

use nullguard_collections::{
    contains, drop, first_or_default, first_or_null, get_or_default, get_or_else, get_or_null,
    head, index_of_or_null, init, is_not_null_or_empty, is_null_or_empty, last_or_null,
    null_if_empty, size_or_zero, slice_indices, slice_range, sub_list, tail, take, take_last,
};

// =============================================================================
// Checks
// =============================================================================

#[test]
fn absent_list_is_empty() {
    assert!(is_null_or_empty::<[i32]>(None));
    assert!(is_null_or_empty(Some(&[] as &[i32])));
    assert!(is_not_null_or_empty(Some(&[1][..])));
    assert_eq!(size_or_zero::<[i32]>(None), 0);
    assert_eq!(null_if_empty(Some(&Vec::<i32>::new())), None);
}

// =============================================================================
// Positional Access
// =============================================================================

#[test]
fn get_out_of_range_is_absent() {
    let list = [1, 2, 3];
    assert_eq!(get_or_null(Some(&list[..]), 7), None);
    assert_eq!(get_or_null(Some(&list[..]), 2), Some(&3));
    assert_eq!(get_or_null::<i32>(None, 0), None);
    assert_eq!(get_or_default(Some(&list[..]), 9, -1), -1);
    assert_eq!(get_or_else(Some(&list[..]), 9, |_| 0), 0);
}

#[test]
fn ends_of_list() {
    let list = ["a", "b", "c"];
    assert_eq!(first_or_null(Some(&list[..])), Some(&"a"));
    assert_eq!(last_or_null(Some(&list[..])), Some(&"c"));
    assert_eq!(first_or_null::<&str>(None), None);
    assert_eq!(first_or_default(Some(&[] as &[&str]), "none"), "none");
    assert_eq!(head(Some(&list[..])), Some(&"a"));
    assert_eq!(tail(Some(&list[..])), vec!["b", "c"]);
    assert_eq!(init(Some(&list[..])), vec!["a", "b"]);
    assert!(tail::<i32>(None).is_empty());
}

#[test]
fn take_and_drop_clamp_counts() {
    let list = [1, 2, 3, 4];
    assert_eq!(take(Some(&list[..]), 2), vec![1, 2]);
    assert_eq!(take(Some(&list[..]), 10), vec![1, 2, 3, 4]);
    assert!(take(Some(&list[..]), -1).is_empty());
    assert_eq!(take_last(Some(&list[..]), 1), vec![4]);
    assert_eq!(drop(Some(&list[..]), 3), vec![4]);
    assert_eq!(drop(Some(&list[..]), -5), vec![1, 2, 3, 4]);
}

#[test]
fn slicing_clamps_bounds() {
    let list = [0, 1, 2, 3, 4];
    assert_eq!(sub_list(Some(&list[..]), -2, 2), vec![0, 1]);
    assert_eq!(sub_list(Some(&list[..]), 3, 100), vec![3, 4]);
    assert!(sub_list(Some(&list[..]), 4, 1).is_empty());
    assert_eq!(slice_range(Some(&list[..]), 1..3), vec![1, 2]);
    assert_eq!(slice_indices(Some(&list[..]), &[4, 9, 0]), vec![4, 0]);
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn search_absent_and_present() {
    let list = [5, 6, 5];
    assert_eq!(index_of_or_null(Some(&list[..]), &5), Some(0));
    assert_eq!(index_of_or_null(Some(&list[..]), &9), None);
    assert!(contains(Some(&list[..]), &6));
    assert!(!contains(None, &6));
}
