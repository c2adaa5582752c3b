//! First-present selection over an ordered list of candidates.

/// Returns the first present candidate, scanning left to right.
///
/// Scanning stops at the first hit, so a lazy iterator is only advanced as
/// far as needed.
pub fn coalesce<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().flatten().next()
}

/// Returns the first present candidate, or `default` if none is present.
pub fn coalesce_or_default<T, I>(values: I, default: T) -> T
where
    I: IntoIterator<Item = Option<T>>,
{
    coalesce(values).unwrap_or(default)
}

/// Returns the first present candidate, or evaluates `default` if none is
/// present.
pub fn coalesce_or_else<T, I, F>(values: I, default: F) -> T
where
    I: IntoIterator<Item = Option<T>>,
    F: FnOnce() -> T,
{
    coalesce(values).unwrap_or_else(default)
}

/// Returns the first present value among a fixed list of `Option`
/// expressions.
///
/// Each expression is evaluated only if every expression before it was
/// `None`.
///
/// ```
/// use nullguard_coalesce::coalesce;
///
/// assert_eq!(coalesce!(None, None, Some(5)), Some(5));
/// assert_eq!(coalesce!(None::<i32>, None), None);
/// ```
#[macro_export]
macro_rules! coalesce {
    ($first:expr $(,)?) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        match $first {
            ::core::option::Option::Some(value) => ::core::option::Option::Some(value),
            ::core::option::Option::None => $crate::coalesce!($($rest),+),
        }
    };
}
