//! Bounds-checked positional access.
//!
//! Nothing here panics on an index: out-of-range lookups return `None`, and
//! range arguments are clamped into `[0, len]`.

use std::ops::Range;

/// Clamps a signed position into `[0, len]`.
fn clamp_index(index: isize, len: usize) -> usize {
    usize::try_from(index).map_or(0, |i| i.min(len))
}

/// Converts a signed count to `usize`, treating negatives as zero.
fn non_negative(n: isize) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// The element at `index`, or `None` if absent or out of `[0, len)`.
#[must_use]
pub fn get_or_null<T>(list: Option<&[T]>, index: usize) -> Option<&T> {
    list?.get(index)
}

/// The element at `index`, or `default` if absent or out of range.
pub fn get_or_default<T: Clone>(list: Option<&[T]>, index: usize, default: T) -> T {
    get_or_null(list, index).cloned().unwrap_or(default)
}

/// The element at `index`, or `default(index)` if absent or out of range.
pub fn get_or_else<T, F>(list: Option<&[T]>, index: usize, default: F) -> T
where
    T: Clone,
    F: FnOnce(usize) -> T,
{
    get_or_null(list, index)
        .cloned()
        .unwrap_or_else(|| default(index))
}

/// The first element, or `None` if absent or empty.
#[must_use]
pub fn first_or_null<T>(list: Option<&[T]>) -> Option<&T> {
    list?.first()
}

/// The first element, or `default`.
pub fn first_or_default<T: Clone>(list: Option<&[T]>, default: T) -> T {
    first_or_null(list).cloned().unwrap_or(default)
}

/// The last element, or `None` if absent or empty.
#[must_use]
pub fn last_or_null<T>(list: Option<&[T]>) -> Option<&T> {
    list?.last()
}

/// The last element, or `default`.
pub fn last_or_default<T: Clone>(list: Option<&[T]>, default: T) -> T {
    last_or_null(list).cloned().unwrap_or(default)
}

/// The first element; same as [`first_or_null`].
#[must_use]
pub fn head<T>(list: Option<&[T]>) -> Option<&T> {
    first_or_null(list)
}

/// Everything but the first element.
pub fn tail<T: Clone>(list: Option<&[T]>) -> Vec<T> {
    drop(list, 1)
}

/// Everything but the last element.
pub fn init<T: Clone>(list: Option<&[T]>) -> Vec<T> {
    drop_last(list, 1)
}

/// Elements in `[from, to)`, with both ends clamped into `[0, len]`.
///
/// A range whose clamped start lies after its clamped end is empty.
pub fn sub_list<T: Clone>(list: Option<&[T]>, from: isize, to: isize) -> Vec<T> {
    let Some(list) = list else {
        return Vec::new();
    };
    let from = clamp_index(from, list.len());
    let to = clamp_index(to, list.len());
    if from >= to {
        return Vec::new();
    }
    list[from..to].to_vec()
}

/// The first `n` elements; negative `n` takes none.
pub fn take<T: Clone>(list: Option<&[T]>, n: isize) -> Vec<T> {
    let Some(list) = list else {
        return Vec::new();
    };
    list.iter().take(non_negative(n)).cloned().collect()
}

/// The last `n` elements; negative `n` takes none.
pub fn take_last<T: Clone>(list: Option<&[T]>, n: isize) -> Vec<T> {
    let Some(list) = list else {
        return Vec::new();
    };
    let start = list.len().saturating_sub(non_negative(n));
    list[start..].to_vec()
}

/// All but the first `n` elements; negative `n` drops none.
pub fn drop<T: Clone>(list: Option<&[T]>, n: isize) -> Vec<T> {
    let Some(list) = list else {
        return Vec::new();
    };
    list.iter().skip(non_negative(n)).cloned().collect()
}

/// All but the last `n` elements; negative `n` drops none.
pub fn drop_last<T: Clone>(list: Option<&[T]>, n: isize) -> Vec<T> {
    let Some(list) = list else {
        return Vec::new();
    };
    let end = list.len().saturating_sub(non_negative(n));
    list[..end].to_vec()
}

/// Elements whose positions fall inside `range`, clamped to the list.
pub fn slice_range<T: Clone>(list: Option<&[T]>, range: Range<usize>) -> Vec<T> {
    let Some(list) = list else {
        return Vec::new();
    };
    let start = range.start.min(list.len());
    let end = range.end.min(list.len());
    if start >= end {
        return Vec::new();
    }
    list[start..end].to_vec()
}

/// Elements at the given positions, in the order given; out-of-range
/// positions are skipped.
pub fn slice_indices<T: Clone>(list: Option<&[T]>, indices: &[usize]) -> Vec<T> {
    let Some(list) = list else {
        return Vec::new();
    };
    indices.iter().filter_map(|&i| list.get(i).cloned()).collect()
}
