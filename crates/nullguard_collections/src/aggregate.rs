//! Folds, counts, and extrema.
//!
//! Aggregates that need at least one element return `None` for an empty or
//! absent list instead of failing. Seeded folds always return a value.

use nullguard_coalesce::NullSafeNumber;

use crate::checks::slice_or_empty;

/// Combines elements left to right, starting from the first.
///
/// Returns `None` for an empty or absent list.
pub fn reduce<T, F>(list: Option<&[T]>, operation: F) -> Option<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let (first, rest) = slice_or_empty(list).split_first()?;
    Some(rest.iter().fold(first.clone(), operation))
}

/// Combines elements left to right into `initial`.
pub fn fold<T, R, F>(list: Option<&[T]>, initial: R, operation: F) -> R
where
    F: FnMut(R, &T) -> R,
{
    slice_or_empty(list).iter().fold(initial, operation)
}

/// Like [`fold`], also passing each element's position.
pub fn fold_indexed<T, R, F>(list: Option<&[T]>, initial: R, mut operation: F) -> R
where
    F: FnMut(usize, R, &T) -> R,
{
    slice_or_empty(list)
        .iter()
        .enumerate()
        .fold(initial, |acc, (i, e)| operation(i, acc, e))
}

/// Combines elements right to left into `initial`.
pub fn fold_right<T, R, F>(list: Option<&[T]>, initial: R, mut operation: F) -> R
where
    F: FnMut(&T, R) -> R,
{
    slice_or_empty(list)
        .iter()
        .rev()
        .fold(initial, |acc, e| operation(e, acc))
}

/// Like [`fold_right`], also passing each element's position.
pub fn fold_right_indexed<T, R, F>(list: Option<&[T]>, initial: R, mut operation: F) -> R
where
    F: FnMut(usize, &T, R) -> R,
{
    slice_or_empty(list)
        .iter()
        .enumerate()
        .rev()
        .fold(initial, |acc, (i, e)| operation(i, e, acc))
}

/// True if every element matches; vacuously true when absent.
pub fn all<T, P>(list: Option<&[T]>, predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    slice_or_empty(list).iter().all(predicate)
}

/// True if some element matches; false when absent.
pub fn any<T, P>(list: Option<&[T]>, predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    slice_or_empty(list).iter().any(predicate)
}

/// True if no element matches; true when absent.
pub fn none<T, P>(list: Option<&[T]>, predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    !any(list, predicate)
}

/// Number of elements, 0 when absent.
#[must_use]
pub fn count<T>(list: Option<&[T]>) -> usize {
    slice_or_empty(list).len()
}

/// Number of elements matching `predicate`.
pub fn count_where<T, P>(list: Option<&[T]>, mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    slice_or_empty(list).iter().filter(|e| predicate(e)).count()
}

/// Largest element by natural order; the first one wins on ties.
#[must_use]
pub fn max_or_null<T: Ord>(list: Option<&[T]>) -> Option<&T> {
    max_by(list, |e| e)
}

/// Smallest element by natural order; the first one wins on ties.
#[must_use]
pub fn min_or_null<T: Ord>(list: Option<&[T]>) -> Option<&T> {
    min_by(list, |e| e)
}

/// Element with the largest computed key; the first one wins on ties.
pub fn max_by<'a, T, K, F>(list: Option<&'a [T]>, mut selector: F) -> Option<&'a T>
where
    K: Ord,
    F: FnMut(&'a T) -> K,
{
    let mut best: Option<(K, &T)> = None;
    for e in slice_or_empty(list) {
        let key = selector(e);
        if best.as_ref().is_none_or(|(k, _)| key > *k) {
            best = Some((key, e));
        }
    }
    best.map(|(_, e)| e)
}

/// Element with the smallest computed key; the first one wins on ties.
pub fn min_by<'a, T, K, F>(list: Option<&'a [T]>, mut selector: F) -> Option<&'a T>
where
    K: Ord,
    F: FnMut(&'a T) -> K,
{
    let mut best: Option<(K, &T)> = None;
    for e in slice_or_empty(list) {
        let key = selector(e);
        if best.as_ref().is_none_or(|(k, _)| key < *k) {
            best = Some((key, e));
        }
    }
    best.map(|(_, e)| e)
}

/// Sum of a numeric projection; the additive identity when empty or absent.
///
/// Integer sums wrap on overflow.
pub fn sum_of<T, N, F>(list: Option<&[T]>, selector: F) -> N
where
    N: NullSafeNumber + Default,
    F: FnMut(&T) -> N,
{
    slice_or_empty(list)
        .iter()
        .map(selector)
        .fold(N::default(), NullSafeNumber::plus)
}

/// Arithmetic mean of a projection; `0.0` when empty or absent.
#[allow(clippy::cast_precision_loss)]
pub fn average_of<T, F>(list: Option<&[T]>, selector: F) -> f64
where
    F: FnMut(&T) -> f64,
{
    let items = slice_or_empty(list);
    if items.is_empty() {
        return 0.0;
    }
    items.iter().map(selector).sum::<f64>() / items.len() as f64
}
