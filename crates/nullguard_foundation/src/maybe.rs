//! Immutable two-state optional wrapper.
//!
//! A [`Maybe`] is either `Present(value)` or `Empty`, fixed at construction.
//! Every transformation produces a new wrapper; none mutates the receiver.
//! Unlike a bare `Option<Option<T>>`, a `Maybe<Option<T>>` keeps "empty" and
//! "present but holding `None`" apart.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A box holding zero or one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Maybe<T> {
    /// Holds no value.
    Empty,
    /// Holds exactly one value.
    Present(T),
}

/// Wraps a possibly-absent value.
pub fn wrap<T>(value: Option<T>) -> Maybe<T> {
    Maybe::of(value)
}

/// Wraps a value only if it is present; identical to [`wrap`].
pub fn wrap_if_present<T>(value: Option<T>) -> Maybe<T> {
    match value {
        Some(v) => Maybe::Present(v),
        None => Maybe::Empty,
    }
}

impl<T> Maybe<T> {
    /// Builds a wrapper from a possibly-absent value.
    pub fn of(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Self::Present)
    }

    /// Builds a present wrapper.
    pub fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Builds an empty wrapper.
    #[must_use]
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Returns true if a value is held.
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns true if no value is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Extracts the value.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NoSuchElement`](crate::ErrorKind::NoSuchElement)
    /// if the wrapper is empty.
    pub fn get(self) -> Result<T> {
        match self {
            Self::Present(v) => Ok(v),
            Self::Empty => Err(Error::no_such_element()),
        }
    }

    /// Converts into a plain `Option`.
    pub fn or_none(self) -> Option<T> {
        self.into()
    }

    /// Extracts the value or returns `other`.
    pub fn or_else(self, other: T) -> T {
        match self {
            Self::Present(v) => v,
            Self::Empty => other,
        }
    }

    /// Extracts the value or evaluates `supplier`.
    ///
    /// `supplier` runs only when the wrapper is empty.
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(v) => v,
            Self::Empty => supplier(),
        }
    }

    /// Extracts the value or returns the error produced by `err`.
    ///
    /// # Errors
    ///
    /// Returns `err()` if the wrapper is empty.
    pub fn or_else_err<E, F>(self, err: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(v) => Ok(v),
            Self::Empty => Err(err()),
        }
    }

    /// Transforms the held value. An empty wrapper stays empty and `mapper`
    /// is not called.
    pub fn map<R, F>(self, mapper: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Present(v) => Maybe::Present(mapper(v)),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Transforms the held value with a function that itself returns a
    /// wrapper, without nesting.
    pub fn flat_map<R, F>(self, mapper: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        match self {
            Self::Present(v) => mapper(v),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(v) if predicate(&v) => Self::Present(v),
            _ => Self::Empty,
        }
    }

    /// Runs `action` on the held value, if any, and returns the wrapper.
    #[must_use]
    pub fn if_present<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(v) = &self {
            action(v);
        }
        self
    }

    /// Runs `action` if the wrapper is empty, and returns the wrapper.
    #[must_use]
    pub fn if_empty<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_empty() {
            action();
        }
        self
    }

    /// Collapses the wrapper into a plain value.
    pub fn fold<R, E, P>(self, if_empty: E, if_present: P) -> R
    where
        E: FnOnce() -> R,
        P: FnOnce(T) -> R,
    {
        match self {
            Self::Present(v) => if_present(v),
            Self::Empty => if_empty(),
        }
    }

    /// Observes the raw contents, present or not, without altering them.
    #[must_use]
    pub fn peek<F>(self, action: F) -> Self
    where
        F: FnOnce(Option<&T>),
    {
        action(self.as_option_ref());
        self
    }

    /// Borrows the held value.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(v) => Maybe::Present(v),
            Self::Empty => Maybe::Empty,
        }
    }

    fn as_option_ref(&self) -> Option<&T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Empty => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Present(v) => Some(v),
            Maybe::Empty => None,
        }
    }
}
