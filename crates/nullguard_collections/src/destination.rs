//! Transforms that append into a caller-owned destination.
//!
//! Each function extends `destination` and hands it back so calls can be
//! chained. An absent source leaves the destination untouched.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::checks::slice_or_empty;

/// Appends the elements matching `predicate`.
pub fn filter_to<'d, T, C, P>(list: Option<&[T]>, destination: &'d mut C, mut predicate: P) -> &'d mut C
where
    T: Clone,
    C: Extend<T>,
    P: FnMut(&T) -> bool,
{
    destination.extend(slice_or_empty(list).iter().filter(|e| predicate(e)).cloned());
    destination
}

/// Appends the elements not matching `predicate`.
pub fn filter_not_to<'d, T, C, P>(
    list: Option<&[T]>,
    destination: &'d mut C,
    mut predicate: P,
) -> &'d mut C
where
    T: Clone,
    C: Extend<T>,
    P: FnMut(&T) -> bool,
{
    filter_to(list, destination, |e| !predicate(e))
}

/// Appends the present elements.
pub fn filter_not_null_to<'d, T, C>(list: Option<&[Option<T>]>, destination: &'d mut C) -> &'d mut C
where
    T: Clone,
    C: Extend<T>,
{
    destination.extend(slice_or_empty(list).iter().flatten().cloned());
    destination
}

/// Appends `transform(element)` for every element.
pub fn map_to<'d, T, R, C, F>(list: Option<&[T]>, destination: &'d mut C, transform: F) -> &'d mut C
where
    C: Extend<R>,
    F: FnMut(&T) -> R,
{
    destination.extend(slice_or_empty(list).iter().map(transform));
    destination
}

/// Appends the present results of `transform`.
pub fn map_not_null_to<'d, T, R, C, F>(
    list: Option<&[T]>,
    destination: &'d mut C,
    transform: F,
) -> &'d mut C
where
    C: Extend<R>,
    F: FnMut(&T) -> Option<R>,
{
    destination.extend(slice_or_empty(list).iter().filter_map(transform));
    destination
}

/// Appends every item of every sequence produced by `transform`.
pub fn flat_map_to<'d, T, R, I, C, F>(
    list: Option<&[T]>,
    destination: &'d mut C,
    transform: F,
) -> &'d mut C
where
    I: IntoIterator<Item = R>,
    C: Extend<R>,
    F: FnMut(&T) -> I,
{
    destination.extend(slice_or_empty(list).iter().flat_map(transform));
    destination
}

/// Appends each element to the group for its key, creating groups as
/// needed.
pub fn group_by_to<'d, T, K, S, F>(
    list: Option<&[T]>,
    destination: &'d mut HashMap<K, Vec<T>, S>,
    mut key_selector: F,
) -> &'d mut HashMap<K, Vec<T>, S>
where
    T: Clone,
    K: Eq + Hash,
    S: BuildHasher,
    F: FnMut(&T) -> K,
{
    for e in slice_or_empty(list) {
        destination
            .entry(key_selector(e))
            .or_default()
            .push(e.clone());
    }
    destination
}
