//! Builders that skip absent elements, and frozen snapshots.

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use nullguard_foundation::{FrozenMap, FrozenSet, FrozenVec};

/// A list of the present elements, in order.
pub fn list_of_not_null<T, I>(elements: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    elements.into_iter().flatten().collect()
}

/// A set of the present elements.
pub fn set_of_not_null<T, I>(elements: I) -> HashSet<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = Option<T>>,
{
    elements.into_iter().flatten().collect()
}

/// A map of the present pairs; later pairs overwrite earlier ones.
pub fn map_of_not_null<K, V, I>(pairs: I) -> HashMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = Option<(K, V)>>,
{
    pairs.into_iter().flatten().collect()
}

/// An immutable snapshot of the list, empty when absent.
pub fn frozen_list<T: Clone>(list: Option<&[T]>) -> FrozenVec<T> {
    list.unwrap_or(&[]).iter().cloned().collect()
}

/// An immutable snapshot of the set, empty when absent.
pub fn frozen_set<T, S>(set: Option<&HashSet<T, S>>) -> FrozenSet<T>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    set.into_iter().flatten().cloned().collect()
}

/// An immutable snapshot of the map, empty when absent.
pub fn frozen_map<K, V, S>(map: Option<&HashMap<K, V, S>>) -> FrozenMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    map.into_iter()
        .flatten()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
