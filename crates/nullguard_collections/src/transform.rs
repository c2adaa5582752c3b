//! Pipeline transforms over possibly-absent lists.
//!
//! An absent input behaves exactly like an empty one: every function returns
//! an empty `Vec` (or empty map / pair of vecs) for it.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::checks::slice_or_empty;

// =============================================================================
// Filtering
// =============================================================================

/// Elements matching `predicate`.
pub fn filter<T, P>(list: Option<&[T]>, mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    slice_or_empty(list).iter().filter(|e| predicate(e)).cloned().collect()
}

/// Elements not matching `predicate`.
pub fn filter_not<T, P>(list: Option<&[T]>, mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter(list, |e| !predicate(e))
}

/// The present elements of a list of optional values.
pub fn filter_not_null<T: Clone>(list: Option<&[Option<T>]>) -> Vec<T> {
    slice_or_empty(list).iter().flatten().cloned().collect()
}

/// Elements for which `predicate(index, element)` holds.
pub fn filter_indexed<T, P>(list: Option<&[T]>, mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(usize, &T) -> bool,
{
    slice_or_empty(list)
        .iter()
        .enumerate()
        .filter(|(i, e)| predicate(*i, e))
        .map(|(_, e)| e.clone())
        .collect()
}

/// The longest prefix whose elements all match `predicate`.
pub fn take_while<T, P>(list: Option<&[T]>, mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    slice_or_empty(list).iter().take_while(|e| predicate(e)).cloned().collect()
}

/// The longest suffix whose elements all match `predicate`.
pub fn take_last_while<T, P>(list: Option<&[T]>, mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let items = slice_or_empty(list);
    let kept = items.iter().rev().take_while(|e| predicate(e)).count();
    items[items.len() - kept..].to_vec()
}

/// Everything after the longest prefix matching `predicate`.
pub fn drop_while<T, P>(list: Option<&[T]>, mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    slice_or_empty(list).iter().skip_while(|e| predicate(e)).cloned().collect()
}

/// Everything before the longest suffix matching `predicate`.
pub fn drop_last_while<T, P>(list: Option<&[T]>, mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let items = slice_or_empty(list);
    let dropped = items.iter().rev().take_while(|e| predicate(e)).count();
    items[..items.len() - dropped].to_vec()
}

// =============================================================================
// Mapping
// =============================================================================

/// Applies `transform` to every element.
pub fn map<T, R, F>(list: Option<&[T]>, transform: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    slice_or_empty(list).iter().map(transform).collect()
}

/// Applies `transform(index, element)` to every element.
pub fn map_indexed<T, R, F>(list: Option<&[T]>, mut transform: F) -> Vec<R>
where
    F: FnMut(usize, &T) -> R,
{
    slice_or_empty(list)
        .iter()
        .enumerate()
        .map(|(i, e)| transform(i, e))
        .collect()
}

/// Applies `transform` and keeps only the present results.
pub fn map_not_null<T, R, F>(list: Option<&[T]>, transform: F) -> Vec<R>
where
    F: FnMut(&T) -> Option<R>,
{
    slice_or_empty(list).iter().filter_map(transform).collect()
}

/// Applies `transform` and concatenates the produced sequences.
pub fn flat_map<T, R, I, F>(list: Option<&[T]>, transform: F) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    F: FnMut(&T) -> I,
{
    slice_or_empty(list).iter().flat_map(transform).collect()
}

/// Applies `transform(index, element)` and concatenates the results.
pub fn flat_map_indexed<T, R, I, F>(list: Option<&[T]>, mut transform: F) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    F: FnMut(usize, &T) -> I,
{
    slice_or_empty(list)
        .iter()
        .enumerate()
        .flat_map(|(i, e)| transform(i, e))
        .collect()
}

/// Concatenates the present inner lists.
pub fn flatten<T: Clone>(lists: Option<&[Option<Vec<T>>]>) -> Vec<T> {
    slice_or_empty(lists).iter().flatten().flatten().cloned().collect()
}

/// Runs `action` on every element and returns a copy of the list.
pub fn on_each<T, F>(list: Option<&[T]>, action: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T),
{
    let items = slice_or_empty(list);
    items.iter().for_each(action);
    items.to_vec()
}

/// Runs `action(index, element)` on every element and returns a copy.
pub fn on_each_indexed<T, F>(list: Option<&[T]>, mut action: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize, &T),
{
    let items = slice_or_empty(list);
    for (i, e) in items.iter().enumerate() {
        action(i, e);
    }
    items.to_vec()
}

// =============================================================================
// Ordering
// =============================================================================

/// The elements in reverse order.
pub fn reversed<T: Clone>(list: Option<&[T]>) -> Vec<T> {
    slice_or_empty(list).iter().rev().cloned().collect()
}

/// Sorted in natural ascending order (stable).
pub fn sorted<T: Clone + Ord>(list: Option<&[T]>) -> Vec<T> {
    let mut out = slice_or_empty(list).to_vec();
    out.sort();
    out
}

/// Sorted in natural descending order (stable).
pub fn sorted_descending<T: Clone + Ord>(list: Option<&[T]>) -> Vec<T> {
    sorted_with(list, |a, b| b.cmp(a))
}

/// Sorted ascending by a computed key (stable).
pub fn sorted_by_key<T, K, F>(list: Option<&[T]>, selector: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut out = slice_or_empty(list).to_vec();
    out.sort_by_key(selector);
    out
}

/// Sorted descending by a computed key (stable).
pub fn sorted_by_key_descending<T, K, F>(list: Option<&[T]>, mut selector: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    sorted_with(list, |a, b| selector(b).cmp(&selector(a)))
}

/// Sorted by a caller-supplied comparator (stable).
pub fn sorted_with<T, F>(list: Option<&[T]>, comparator: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = slice_or_empty(list).to_vec();
    out.sort_by(comparator);
    out
}

/// A copy in random order, using the thread-local generator.
pub fn shuffled<T: Clone>(list: Option<&[T]>) -> Vec<T> {
    shuffled_with(list, &mut rand::thread_rng())
}

/// A copy in random order, using the given generator.
pub fn shuffled_with<T: Clone, R: Rng + ?Sized>(list: Option<&[T]>, rng: &mut R) -> Vec<T> {
    let mut out = slice_or_empty(list).to_vec();
    out.shuffle(rng);
    out
}

// =============================================================================
// Deduplication
// =============================================================================

/// Elements with duplicates removed, keeping first occurrences in order.
pub fn distinct<T: Clone + Eq + Hash>(list: Option<&[T]>) -> Vec<T> {
    distinct_by(list, Clone::clone)
}

/// Elements whose computed key has not been seen before, in order.
pub fn distinct_by<T, K, F>(list: Option<&[T]>, mut selector: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    slice_or_empty(list)
        .iter()
        .filter(|e| seen.insert(selector(e)))
        .cloned()
        .collect()
}

// =============================================================================
// Grouping
// =============================================================================

/// Splits into `(matching, non_matching)`, preserving order in both.
pub fn partition<T, P>(list: Option<&[T]>, mut predicate: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    slice_or_empty(list).iter().cloned().partition(|e| predicate(e))
}

/// Groups elements by a computed key; order is preserved within each group.
///
/// Keys come back in hash order, not first-seen order. Sort the keys, or
/// collect with [`group_by_to`](crate::destination::group_by_to) into a
/// map with the hasher you need, when key order matters.
pub fn group_by<T, K, F>(list: Option<&[T]>, key_selector: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    group_by_value(list, key_selector, Clone::clone)
}

/// Groups transformed values by a computed key; order is preserved within
/// each group. Keys come back in hash order.
pub fn group_by_value<T, K, V, F, G>(
    list: Option<&[T]>,
    mut key_selector: F,
    mut value_transform: G,
) -> HashMap<K, Vec<V>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
    G: FnMut(&T) -> V,
{
    let mut groups: HashMap<K, Vec<V>> = HashMap::new();
    for e in slice_or_empty(list) {
        groups
            .entry(key_selector(e))
            .or_default()
            .push(value_transform(e));
    }
    groups
}

/// Maps each element to a key; on collision the last element wins.
///
/// Keys come back in hash order, not first-seen order.
pub fn associate_by<T, K, F>(list: Option<&[T]>, key_selector: F) -> HashMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    associate_by_value(list, key_selector, Clone::clone)
}

/// Maps each element to a key and a value; on collision the last wins.
/// Keys come back in hash order.
pub fn associate_by_value<T, K, V, F, G>(
    list: Option<&[T]>,
    mut key_selector: F,
    mut value_transform: G,
) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
    G: FnMut(&T) -> V,
{
    slice_or_empty(list)
        .iter()
        .map(|e| (key_selector(e), value_transform(e)))
        .collect()
}

/// Builds a map from the `(key, value)` pair produced for each element; on
/// collision the last pair wins. Keys come back in hash order.
pub fn associate<T, K, V, F>(list: Option<&[T]>, transform: F) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: FnMut(&T) -> (K, V),
{
    slice_or_empty(list).iter().map(transform).collect()
}

// =============================================================================
// Zipping
// =============================================================================

/// Pairs elements positionally, truncating to the shorter list. An absent
/// list yields no pairs.
pub fn zip<A: Clone, B: Clone>(first: Option<&[A]>, second: Option<&[B]>) -> Vec<(A, B)> {
    zip_with(first, second, |a, b| (a.clone(), b.clone()))
}

/// Combines elements positionally, truncating to the shorter list.
pub fn zip_with<A, B, R, F>(first: Option<&[A]>, second: Option<&[B]>, mut transform: F) -> Vec<R>
where
    F: FnMut(&A, &B) -> R,
{
    slice_or_empty(first)
        .iter()
        .zip(slice_or_empty(second))
        .map(|(a, b)| transform(a, b))
        .collect()
}

/// Combines each element with its successor.
pub fn zip_with_next<T, R, F>(list: Option<&[T]>, mut transform: F) -> Vec<R>
where
    F: FnMut(&T, &T) -> R,
{
    slice_or_empty(list)
        .windows(2)
        .map(|pair| transform(&pair[0], &pair[1]))
        .collect()
}
