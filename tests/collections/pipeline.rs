//! Integration tests for transforms, windowing, and aggregation

use std::collections::HashMap;

use nullguard_collections::{
    Windowing, associate_by, average_of, chunked, distinct, distinct_by, fold, group_by, map,
    map_not_null, max_by, max_or_null, min_or_null, partition, reduce, shuffled, sorted,
    sorted_by_key_descending, sum_of, windowed, zip, zip_with_next,
};

// =============================================================================
// Transforms
// =============================================================================

#[test]
fn group_by_first_letter() {
    let words = ["apple", "avocado", "banana"];
    let groups = group_by(Some(&words[..]), |w| w.chars().next());
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[&Some('a')], vec!["apple", "avocado"]);
    assert_eq!(groups[&Some('b')], vec!["banana"]);
}

#[test]
fn group_by_length_keeps_order() {
    let words = ["a", "bb", "ccc", "dd"];
    let groups = group_by(Some(&words[..]), |w| w.len());
    assert_eq!(groups[&1], vec!["a"]);
    assert_eq!(groups[&2], vec!["bb", "dd"]);
    assert_eq!(groups[&3], vec!["ccc"]);
}

#[test]
fn group_by_absent_is_empty() {
    let groups: HashMap<i32, Vec<i32>> = group_by(None, |x: &i32| *x);
    assert!(groups.is_empty());
}

#[test]
fn distinct_keeps_first_occurrence() {
    assert_eq!(distinct(Some(&[1, 2, 1, 3, 2][..])), vec![1, 2, 3]);
    let words = ["a", "B", "b", "A"];
    assert_eq!(
        distinct_by(Some(&words[..]), |w| w.to_lowercase()),
        vec!["a", "B"]
    );
}

#[test]
fn distinct_is_idempotent() {
    let once = distinct(Some(&[3, 3, 1, 2, 1][..]));
    assert_eq!(distinct(Some(once.as_slice())), once);
}

#[test]
fn map_and_filter_absent() {
    assert!(map(None::<&[i32]>, |x| x * 2).is_empty());
    let parsed = map_not_null(Some(&["1", "x", "3"][..]), |s| s.parse::<i32>().ok());
    assert_eq!(parsed, vec![1, 3]);
}

#[test]
fn partition_splits_all_elements() {
    let (even, odd) = partition(Some(&[1, 2, 3, 4, 5][..]), |x| x % 2 == 0);
    assert_eq!(even, vec![2, 4]);
    assert_eq!(odd, vec![1, 3, 5]);
}

#[test]
fn sorting() {
    assert_eq!(sorted(Some(&[3, 1, 2][..])), vec![1, 2, 3]);
    let people = [("ann", 31), ("bob", 25), ("cy", 40)];
    let oldest_first = sorted_by_key_descending(Some(&people[..]), |p| p.1);
    assert_eq!(oldest_first[0].0, "cy");
}

#[test]
fn shuffle_is_a_permutation() {
    let list: Vec<i32> = (0..50).collect();
    let mut mixed = shuffled(Some(list.as_slice()));
    mixed.sort_unstable();
    assert_eq!(mixed, list);
}

#[test]
fn associate_last_wins() {
    let pairs = [("a", 1), ("b", 2), ("a", 3)];
    let by_key = associate_by(Some(&pairs[..]), |p| p.0);
    assert_eq!(by_key[&"a"], ("a", 3));
}

#[test]
fn zipping_stops_at_shorter() {
    assert_eq!(
        zip(Some(&[1, 2, 3][..]), Some(&['a', 'b'][..])),
        vec![(1, 'a'), (2, 'b')]
    );
    assert!(zip::<i32, char>(None, Some(&['a'][..])).is_empty());
    assert_eq!(zip_with_next(Some(&[1, 4, 9][..]), |a, b| b - a), vec![3, 5]);
}

// =============================================================================
// Windowing
// =============================================================================

#[test]
fn windowed_pairs() {
    let list = [1, 2, 3, 4, 5];
    assert_eq!(
        windowed(Some(&list[..]), Windowing::new(2)),
        vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5]]
    );
}

#[test]
fn windowed_full_windows() {
    let list = [1, 2, 3, 4, 5];
    assert_eq!(
        windowed(Some(&list[..]), Windowing::new(3)),
        vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]
    );
}

#[test]
fn windowed_with_step_and_partial() {
    let list = [1, 2, 3, 4, 5];
    let windowing = Windowing::new(2).with_step(2).with_partial(true);
    assert_eq!(
        windowed(Some(&list[..]), windowing),
        vec![vec![1, 2], vec![3, 4], vec![5]]
    );
    let full_only = Windowing::new(2).with_step(2);
    assert_eq!(
        windowed(Some(&list[..]), full_only),
        vec![vec![1, 2], vec![3, 4]]
    );
}

#[test]
fn chunked_keeps_remainder() {
    assert_eq!(
        chunked(Some(&[1, 2, 3, 4, 5][..]), 2),
        vec![vec![1, 2], vec![3, 4], vec![5]]
    );
    assert!(chunked::<i32>(None, 2).is_empty());
}

// =============================================================================
// Aggregation
// =============================================================================

#[test]
fn reduce_and_fold() {
    assert_eq!(reduce(Some(&[1, 2, 3][..]), |acc, x| acc + x), Some(6));
    assert_eq!(reduce(Some(&[] as &[i32]), |acc, x| acc + x), None);
    assert_eq!(fold(None::<&[i32]>, 10, |acc, x| acc + x), 10);
}

#[test]
fn extremes() {
    let list = [3, 9, 1, 9];
    assert_eq!(max_or_null(Some(&list[..])), Some(&9));
    assert_eq!(min_or_null(Some(&list[..])), Some(&1));
    assert_eq!(max_or_null::<i32>(None), None);
    let words = ["aa", "bbb", "ccc"];
    assert_eq!(max_by(Some(&words[..]), |w| w.len()), Some(&"bbb"));
}

#[test]
fn sums_and_averages() {
    let list = [1, 2, 3, 4];
    assert_eq!(sum_of(Some(&list[..]), |x| *x), 10);
    assert!((average_of(Some(&list[..]), |x| f64::from(*x)) - 2.5).abs() < f64::EPSILON);
    assert!(average_of(None::<&[i32]>, |x| f64::from(*x)).abs() < f64::EPSILON);
}
