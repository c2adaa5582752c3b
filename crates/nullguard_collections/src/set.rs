//! Set algebra where an absent set acts as the empty set.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

fn owned<T, S>(set: Option<&HashSet<T, S>>) -> HashSet<T>
where
    T: Clone + Eq + Hash,
{
    set.map(|s| s.iter().cloned().collect()).unwrap_or_default()
}

/// Elements in either set.
pub fn union<T, S>(first: Option<&HashSet<T, S>>, second: Option<&HashSet<T, S>>) -> HashSet<T>
where
    T: Clone + Eq + Hash,
{
    let mut out = owned(first);
    out.extend(owned(second));
    out
}

/// Elements in both sets; empty if either is absent.
pub fn intersect<T, S>(first: Option<&HashSet<T, S>>, second: Option<&HashSet<T, S>>) -> HashSet<T>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    let (Some(first), Some(second)) = (first, second) else {
        return HashSet::new();
    };
    first.iter().filter(|e| second.contains(*e)).cloned().collect()
}

/// Elements of `first` not in `second`.
///
/// Subtracting from an absent set is empty; subtracting an absent set
/// leaves `first` unchanged.
pub fn subtract<T, S>(first: Option<&HashSet<T, S>>, second: Option<&HashSet<T, S>>) -> HashSet<T>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    let Some(second) = second else {
        return owned(first);
    };
    first
        .into_iter()
        .flatten()
        .filter(|e| !second.contains(*e))
        .cloned()
        .collect()
}

/// A copy of the set with `element` added.
pub fn plus<T, S>(set: Option<&HashSet<T, S>>, element: T) -> HashSet<T>
where
    T: Clone + Eq + Hash,
{
    let mut out = owned(set);
    out.insert(element);
    out
}

/// A copy of the set with every item of `elements` added.
pub fn plus_all<T, S, I>(set: Option<&HashSet<T, S>>, elements: I) -> HashSet<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut out = owned(set);
    out.extend(elements);
    out
}

/// A copy of the set with `element` removed.
pub fn minus<T, S>(set: Option<&HashSet<T, S>>, element: &T) -> HashSet<T>
where
    T: Clone + Eq + Hash,
{
    let mut out = owned(set);
    out.remove(element);
    out
}
