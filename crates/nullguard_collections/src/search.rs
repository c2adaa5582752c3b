//! Linear search returning `None` instead of a `-1` sentinel.

/// Position of the first element equal to `element`.
pub fn index_of_or_null<T: PartialEq>(list: Option<&[T]>, element: &T) -> Option<usize> {
    list?.iter().position(|e| e == element)
}

/// Position of the first element matching `predicate`.
pub fn index_of_first_or_null<T, P>(list: Option<&[T]>, predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    list?.iter().position(predicate)
}

/// Position of the last element matching `predicate`.
pub fn index_of_last_or_null<T, P>(list: Option<&[T]>, predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    list?.iter().rposition(predicate)
}

/// The first element matching `predicate`.
pub fn find_first_or_null<T, P>(list: Option<&[T]>, mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    list?.iter().find(|e| predicate(*e))
}

/// The last element matching `predicate`.
pub fn find_last_or_null<T, P>(list: Option<&[T]>, mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    list?.iter().rev().find(|e| predicate(*e))
}

/// True if the list is present and contains `element`.
pub fn contains<T: PartialEq>(list: Option<&[T]>, element: &T) -> bool {
    list.is_some_and(|l| l.contains(element))
}
