//! Lookups, updates, and projections over possibly-absent hash maps.
//!
//! Read-only helpers treat an absent map as empty. Mutating helpers take
//! `Option<&mut HashMap>` and do nothing (returning `None`) when the map
//! itself is absent, which is distinct from the key being missing.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::{BuildHasher, Hash};

// =============================================================================
// Lookup
// =============================================================================

/// The value for `key`, or `None` if the map is absent or lacks the key.
pub fn get_or_null<'m, K, V, Q, S>(map: Option<&'m HashMap<K, V, S>>, key: &Q) -> Option<&'m V>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    map?.get(key)
}

/// The value for `key`, or `default`.
pub fn get_or_default<K, V, Q, S>(map: Option<&HashMap<K, V, S>>, key: &Q, default: V) -> V
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    V: Clone,
    S: BuildHasher,
{
    get_or_null(map, key).cloned().unwrap_or(default)
}

/// True if the map is present and has `key`.
pub fn contains_key<K, V, Q, S>(map: Option<&HashMap<K, V, S>>, key: &Q) -> bool
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    map.is_some_and(|m| m.contains_key(key))
}

/// True if the map is present and some entry holds `value`.
pub fn contains_value<K, V: PartialEq, S>(map: Option<&HashMap<K, V, S>>, value: &V) -> bool {
    map.is_some_and(|m| m.values().any(|v| v == value))
}

/// The keys, empty when absent.
#[must_use]
pub fn keys_or_empty<K, V, S>(map: Option<&HashMap<K, V, S>>) -> Vec<&K> {
    map.map(|m| m.keys().collect()).unwrap_or_default()
}

/// The values, empty when absent.
#[must_use]
pub fn values_or_empty<K, V, S>(map: Option<&HashMap<K, V, S>>) -> Vec<&V> {
    map.map(|m| m.values().collect()).unwrap_or_default()
}

/// The entries, empty when absent.
#[must_use]
pub fn entries_or_empty<K, V, S>(map: Option<&HashMap<K, V, S>>) -> Vec<(&K, &V)> {
    map.map(|m| m.iter().collect()).unwrap_or_default()
}

// =============================================================================
// Mutation
// =============================================================================

/// The value for `key`, inserting `default()` first if the key is missing.
///
/// Returns `None` only when the map itself is absent; `default` is not
/// called in that case.
pub fn get_or_put<'m, K, V, S, F>(
    map: Option<&'m mut HashMap<K, V, S>>,
    key: K,
    default: F,
) -> Option<&'m mut V>
where
    K: Eq + Hash,
    S: BuildHasher,
    F: FnOnce() -> V,
{
    Some(map?.entry(key).or_insert_with(default))
}

/// Inserts `value` only if `key` is missing.
///
/// Returns the value already stored under `key`, or `None` if the value was
/// inserted (or the map is absent).
pub fn put_if_absent<'m, K, V, S>(
    map: Option<&'m mut HashMap<K, V, S>>,
    key: K,
    value: V,
) -> Option<&'m V>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    match map?.entry(key) {
        Entry::Occupied(entry) => Some(entry.into_mut()),
        Entry::Vacant(entry) => {
            entry.insert(value);
            None
        }
    }
}

/// Removes `key`, returning its previous value.
pub fn remove_or_null<K, V, Q, S>(map: Option<&mut HashMap<K, V, S>>, key: &Q) -> Option<V>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    map?.remove(key)
}

/// Replaces the entry for `key` with `remap(key, previous)`.
///
/// A `None` result removes the entry. Returns the new value.
pub fn compute<'m, K, V, S, F>(
    map: Option<&'m mut HashMap<K, V, S>>,
    key: K,
    remap: F,
) -> Option<&'m V>
where
    K: Eq + Hash,
    S: BuildHasher,
    F: FnOnce(&K, Option<V>) -> Option<V>,
{
    let map = map?;
    let previous = map.remove(&key);
    let value = remap(&key, previous)?;
    Some(map.entry(key).or_insert(value))
}

/// Inserts `mapping(key)` if `key` is missing and the mapping produces a
/// value. Returns the stored value, new or existing.
pub fn compute_if_absent<'m, K, V, S, F>(
    map: Option<&'m mut HashMap<K, V, S>>,
    key: K,
    mapping: F,
) -> Option<&'m V>
where
    K: Eq + Hash,
    S: BuildHasher,
    F: FnOnce(&K) -> Option<V>,
{
    match map?.entry(key) {
        Entry::Occupied(entry) => Some(entry.into_mut()),
        Entry::Vacant(entry) => {
            let value = mapping(entry.key())?;
            Some(entry.insert(value))
        }
    }
}

/// Replaces an existing entry with `remap(key, current)`; a `None` result
/// removes it. Missing keys are left alone. Returns the new value.
pub fn compute_if_present<'m, K, V, S, F>(
    map: Option<&'m mut HashMap<K, V, S>>,
    key: K,
    remap: F,
) -> Option<&'m V>
where
    K: Eq + Hash,
    S: BuildHasher,
    F: FnOnce(&K, &V) -> Option<V>,
{
    match map?.entry(key) {
        Entry::Occupied(mut entry) => {
            if let Some(value) = remap(entry.key(), entry.get()) {
                entry.insert(value);
                Some(entry.into_mut())
            } else {
                entry.remove();
                None
            }
        }
        Entry::Vacant(_) => None,
    }
}

// =============================================================================
// Projection
// =============================================================================

/// Entries whose key matches `predicate`.
pub fn filter_keys<K, V, S, P>(map: Option<&HashMap<K, V, S>>, mut predicate: P) -> HashMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
    P: FnMut(&K) -> bool,
{
    filter_entries(map, |k, _| predicate(k))
}

/// Entries whose value matches `predicate`.
pub fn filter_values<K, V, S, P>(map: Option<&HashMap<K, V, S>>, mut predicate: P) -> HashMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
    P: FnMut(&V) -> bool,
{
    filter_entries(map, |_, v| predicate(v))
}

/// Entries matching `predicate(key, value)`.
pub fn filter_entries<K, V, S, P>(map: Option<&HashMap<K, V, S>>, mut predicate: P) -> HashMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
    P: FnMut(&K, &V) -> bool,
{
    let Some(map) = map else {
        return HashMap::new();
    };
    map.iter()
        .filter(|(k, v)| predicate(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Re-keys every entry; when two entries map to the same key an arbitrary
/// one of them is kept.
pub fn map_keys<K, V, R, S, F>(map: Option<&HashMap<K, V, S>>, mut transform: F) -> HashMap<R, V>
where
    V: Clone,
    R: Eq + Hash,
    F: FnMut(&K, &V) -> R,
{
    let Some(map) = map else {
        return HashMap::new();
    };
    map.iter().map(|(k, v)| (transform(k, v), v.clone())).collect()
}

/// Replaces every value with `transform(key, value)`.
pub fn map_values<K, V, R, S, F>(map: Option<&HashMap<K, V, S>>, mut transform: F) -> HashMap<K, R>
where
    K: Clone + Eq + Hash,
    F: FnMut(&K, &V) -> R,
{
    let Some(map) = map else {
        return HashMap::new();
    };
    map.iter().map(|(k, v)| (k.clone(), transform(k, v))).collect()
}
