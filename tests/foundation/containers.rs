//! Integration tests for Container and frozen snapshots
//!
//! Tests item counting and persistent-collection semantics.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use nullguard_foundation::{Container, FrozenMap, FrozenSet, FrozenVec};

// =============================================================================
// Container
// =============================================================================

#[test]
fn text_counts_chars() {
    assert_eq!("héllo".item_count(), 5);
    assert!("".has_no_items());
    assert_eq!(String::from("日本").item_count(), 2);
}

#[test]
fn collections_count_items() {
    assert_eq!(vec![1, 2, 3].item_count(), 3);
    assert_eq!([1, 2][..].item_count(), 2);
    assert!(VecDeque::<i32>::new().has_no_items());
    assert_eq!(HashSet::from([1, 2]).item_count(), 2);
    assert_eq!(HashMap::from([(1, 'a')]).item_count(), 1);
    assert!(BTreeMap::<i32, i32>::new().has_no_items());
}

// =============================================================================
// Frozen Collections
// =============================================================================

#[test]
fn frozen_vec_appending_is_persistent() {
    let original: FrozenVec<i32> = [1, 2].into_iter().collect();
    let extended = original.appending(3);
    assert_eq!(original.len(), 2);
    assert_eq!(extended.thaw(), vec![1, 2, 3]);
    assert_eq!(extended.get(2), Some(&3));
    assert_eq!(extended.get(3), None);
    assert_eq!(extended.item_count(), 3);
}

#[test]
fn frozen_set_including_is_persistent() {
    let original: FrozenSet<&str> = ["a"].into_iter().collect();
    let extended = original.including("b");
    assert!(!original.contains(&"b"));
    assert!(extended.contains(&"b"));
    assert_eq!(extended.len(), 2);
}

#[test]
fn frozen_map_with_entry_is_persistent() {
    let original: FrozenMap<&str, i32> = [("a", 1)].into_iter().collect();
    let updated = original.with_entry("a", 2);
    assert_eq!(original.get(&"a"), Some(&1));
    assert_eq!(updated.get(&"a"), Some(&2));
    assert_eq!(updated.len(), 1);
}

#[test]
fn empty_frozen_collections() {
    assert!(FrozenVec::<i32>::new().is_empty());
    assert!(FrozenSet::<i32>::new().is_empty());
    assert!(FrozenMap::<i32, i32>::new().is_empty());
}
