//! Read-only snapshots handed out by the `frozen_*` builders.
//!
//! A snapshot is taken once and never mutated afterwards. Cloning shares the
//! underlying `im` tree, so passing a snapshot around costs nothing. The
//! `appending`/`including`/`with_entry` methods leave the receiver untouched
//! and hand back a second snapshot; `thaw` copies back out into a std
//! container for callers that need to mutate.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Size queries shared by every snapshot type.
macro_rules! snapshot_size {
    ($noun:literal) => {
        #[doc = concat!("How many ", $noun, " the snapshot holds.")]
        #[must_use]
        pub fn len(&self) -> usize {
            self.0.len()
        }

        #[doc = concat!("True when the snapshot holds no ", $noun, ".")]
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.0.is_empty()
        }
    };
}

/// Ordered snapshot of a list.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrozenVec<T: Clone>(im::Vector<T>);

impl<T: Clone> FrozenVec<T> {
    /// A snapshot with nothing in it.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    snapshot_size!("elements");

    /// Element at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// A second snapshot with `item` added at the end.
    #[must_use]
    pub fn appending(&self, item: T) -> Self {
        let mut tree = self.0.clone();
        tree.push_back(item);
        Self(tree)
    }

    /// Elements in order.
    pub fn iter(&self) -> im::vector::Iter<'_, T> {
        self.0.iter()
    }

    /// Copies the elements back into a mutable `Vec`.
    #[must_use]
    pub fn thaw(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for FrozenVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frozen")?;
        f.debug_list().entries(&self.0).finish()
    }
}

impl<T: Clone> FromIterator<T> for FrozenVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self(items.into_iter().collect())
    }
}

impl<'a, T: Clone> IntoIterator for &'a FrozenVec<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Unordered snapshot of a set.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrozenSet<T: Clone + Eq + Hash>(im::HashSet<T>);

impl<T: Clone + Eq + Hash> FrozenSet<T> {
    /// A snapshot with nothing in it.
    #[must_use]
    pub fn new() -> Self {
        Self(im::HashSet::new())
    }

    snapshot_size!("members");

    /// Membership test.
    #[must_use]
    pub fn contains(&self, member: &T) -> bool {
        self.0.contains(member)
    }

    /// A second snapshot that also holds `member`.
    #[must_use]
    pub fn including(&self, member: T) -> Self {
        let mut tree = self.0.clone();
        tree.insert(member);
        Self(tree)
    }

    /// Members in unspecified order.
    pub fn iter(&self) -> im::hashset::Iter<'_, T> {
        self.0.iter()
    }

    /// Copies the members back into a mutable `HashSet`.
    #[must_use]
    pub fn thaw(&self) -> HashSet<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> fmt::Debug for FrozenSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frozen")?;
        f.debug_set().entries(&self.0).finish()
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for FrozenSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(members: I) -> Self {
        Self(members.into_iter().collect())
    }
}

impl<'a, T: Clone + Eq + Hash> IntoIterator for &'a FrozenSet<T> {
    type Item = &'a T;
    type IntoIter = im::hashset::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Unordered snapshot of a key/value map.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrozenMap<K: Clone + Eq + Hash, V: Clone>(im::HashMap<K, V>);

impl<K: Clone + Eq + Hash, V: Clone> FrozenMap<K, V> {
    /// A snapshot with nothing in it.
    #[must_use]
    pub fn new() -> Self {
        Self(im::HashMap::new())
    }

    snapshot_size!("entries");

    /// Value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.0.get(key)
    }

    /// A second snapshot where `key` maps to `value`, replacing any old value.
    #[must_use]
    pub fn with_entry(&self, key: K, value: V) -> Self {
        Self(self.0.update(key, value))
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> im::hashmap::Iter<'_, K, V> {
        self.0.iter()
    }

    /// Copies the entries back into a mutable `HashMap`.
    #[must_use]
    pub fn thaw(&self) -> HashMap<K, V> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K, V> fmt::Debug for FrozenMap<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frozen")?;
        f.debug_map().entries(&self.0).finish()
    }
}

impl<K: Clone + Eq + Hash, V: Clone> FromIterator<(K, V)> for FrozenMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self(entries.into_iter().collect())
    }
}

impl<'a, K: Clone + Eq + Hash, V: Clone> IntoIterator for &'a FrozenMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = im::hashmap::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
