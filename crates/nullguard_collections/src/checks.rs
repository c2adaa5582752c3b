//! Size and emptiness checks that treat an absent container as empty.

use nullguard_foundation::Container;

/// True if the container is absent or empty.
#[must_use]
pub fn is_null_or_empty<C: Container + ?Sized>(container: Option<&C>) -> bool {
    container.is_none_or(|c| c.has_no_items())
}

/// True if the container is present and holds at least one item.
#[must_use]
pub fn is_not_null_or_empty<C: Container + ?Sized>(container: Option<&C>) -> bool {
    !is_null_or_empty(container)
}

/// Number of items, or 0 for an absent container.
#[must_use]
pub fn size_or_zero<C: Container + ?Sized>(container: Option<&C>) -> usize {
    container.map_or(0, |c| c.item_count())
}

/// The slice itself, or an empty slice if absent.
#[must_use]
pub fn slice_or_empty<T>(list: Option<&[T]>) -> &[T] {
    list.unwrap_or(&[])
}

/// The container, or `None` if it is absent or empty.
#[must_use]
pub fn null_if_empty<C: Container + ?Sized>(container: Option<&C>) -> Option<&C> {
    container.filter(|c| !c.has_no_items())
}

/// An owned container, or its empty default if absent.
pub fn or_empty<C: Default>(container: Option<C>) -> C {
    container.unwrap_or_default()
}
