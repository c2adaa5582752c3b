//! Length abstraction shared by the emptiness checks.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::frozen::{FrozenMap, FrozenSet, FrozenVec};

/// Anything with a countable number of items: text, sequences, sets, maps.
///
/// Text counts Unicode scalar values, not bytes.
pub trait Container {
    /// Number of items held.
    fn item_count(&self) -> usize;

    /// True if no items are held.
    fn has_no_items(&self) -> bool {
        self.item_count() == 0
    }
}

impl Container for str {
    fn item_count(&self) -> usize {
        self.chars().count()
    }

    fn has_no_items(&self) -> bool {
        self.is_empty()
    }
}

impl Container for String {
    fn item_count(&self) -> usize {
        self.as_str().item_count()
    }

    fn has_no_items(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Container for [T] {
    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<T> Container for Vec<T> {
    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<T> Container for VecDeque<T> {
    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<T, S: BuildHasher> Container for HashSet<T, S> {
    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S: BuildHasher> Container for HashMap<K, V, S> {
    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<T> Container for BTreeSet<T> {
    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Container for BTreeMap<K, V> {
    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<T: Clone> Container for FrozenVec<T> {
    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<T: Clone + Eq + Hash> Container for FrozenSet<T> {
    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<K: Clone + Eq + Hash, V: Clone> Container for FrozenMap<K, V> {
    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<C: Container + ?Sized> Container for &C {
    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn has_no_items(&self) -> bool {
        (**self).has_no_items()
    }
}
