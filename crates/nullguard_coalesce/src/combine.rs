//! All-or-nothing combinators over several possibly-absent values.

/// Applies `block` if both values are present.
pub fn let2<A, B, R, F>(a: Option<A>, b: Option<B>, block: F) -> Option<R>
where
    F: FnOnce(A, B) -> R,
{
    Some(block(a?, b?))
}

/// Applies `block` if all three values are present.
pub fn let3<A, B, C, R, F>(a: Option<A>, b: Option<B>, c: Option<C>, block: F) -> Option<R>
where
    F: FnOnce(A, B, C) -> R,
{
    Some(block(a?, b?, c?))
}

/// Applies `block` if all four values are present.
pub fn let4<A, B, C, D, R, F>(
    a: Option<A>,
    b: Option<B>,
    c: Option<C>,
    d: Option<D>,
    block: F,
) -> Option<R>
where
    F: FnOnce(A, B, C, D) -> R,
{
    Some(block(a?, b?, c?, d?))
}

/// Applies `block` if all five values are present.
pub fn let5<A, B, C, D, E, R, F>(
    a: Option<A>,
    b: Option<B>,
    c: Option<C>,
    d: Option<D>,
    e: Option<E>,
    block: F,
) -> Option<R>
where
    F: FnOnce(A, B, C, D, E) -> R,
{
    Some(block(a?, b?, c?, d?, e?))
}

/// Applies `block` if both values are present, otherwise returns `default`.
pub fn let2_or<A, B, R, F>(a: Option<A>, b: Option<B>, default: R, block: F) -> R
where
    F: FnOnce(A, B) -> R,
{
    let2(a, b, block).unwrap_or(default)
}

/// Applies `block` if all three values are present, otherwise returns
/// `default`.
pub fn let3_or<A, B, C, R, F>(a: Option<A>, b: Option<B>, c: Option<C>, default: R, block: F) -> R
where
    F: FnOnce(A, B, C) -> R,
{
    let3(a, b, c, block).unwrap_or(default)
}
