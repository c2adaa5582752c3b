//! Error types for nullguard.
//!
//! Uses `thiserror` for ergonomic error definition. Every error belongs to
//! one of two categories: a caller error (an illegal argument was passed)
//! or a state-invariant violation (a value the caller asserted to exist was
//! missing).

use std::fmt;

use thiserror::Error;

/// Default message used when a required value is absent.
pub const REQUIRED_VALUE_WAS_NULL: &str = "Required value was null";

/// The main error type for nullguard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional name of the operation that raised the error.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Records which operation raised this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an illegal-argument error.
    #[must_use]
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IllegalArgument(message.into()))
    }

    /// Creates an illegal-state error.
    #[must_use]
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IllegalState(message.into()))
    }

    /// Creates an error for a failed type-requiring cast.
    #[must_use]
    pub fn invalid_cast(expected: &'static str) -> Self {
        Self::new(ErrorKind::InvalidCast { expected })
    }

    /// Creates an error for a negative length argument.
    #[must_use]
    pub fn negative_length(parameter: &'static str, value: i64) -> Self {
        Self::new(ErrorKind::NegativeLength { parameter, value })
    }

    /// Creates an error for a range whose minimum exceeds its maximum.
    #[must_use]
    pub fn invalid_bounds(min: impl fmt::Debug, max: impl fmt::Debug) -> Self {
        Self::new(ErrorKind::InvalidBounds {
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        })
    }

    /// Creates an error for extracting a value from an empty wrapper.
    #[must_use]
    pub fn no_such_element() -> Self {
        Self::new(ErrorKind::NoSuchElement)
    }

    /// Returns the category this error belongs to.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A caller passed an argument the operation cannot accept.
    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    /// A value asserted to be present was absent.
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// A type-requiring cast found a value of another type.
    #[error("cannot cast value to {expected}")]
    InvalidCast {
        /// Name of the requested type.
        expected: &'static str,
    },

    /// A length or count argument was negative.
    #[error("{parameter} must be >= 0, got {value}")]
    NegativeLength {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The value that was passed.
        value: i64,
    },

    /// A range was requested with `min > max`.
    #[error("cannot coerce value to an empty range: maximum {max} is less than minimum {min}")]
    InvalidBounds {
        /// Debug rendering of the minimum.
        min: String,
        /// Debug rendering of the maximum.
        max: String,
    },

    /// A value was extracted from an empty wrapper.
    #[error("No value present")]
    NoSuchElement,
}

impl ErrorKind {
    /// Maps this kind onto the caller-error / state-invariant taxonomy.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IllegalArgument(_)
            | Self::InvalidCast { .. }
            | Self::NegativeLength { .. }
            | Self::InvalidBounds { .. } => ErrorCategory::CallerError,
            Self::IllegalState(_) | Self::NoSuchElement => ErrorCategory::StateInvariant,
        }
    }
}

/// The two categories of raised errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The caller supplied an illegal argument.
    CallerError,
    /// An invariant the caller relied on did not hold.
    StateInvariant,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CallerError => write!(f, "caller error"),
            Self::StateInvariant => write!(f, "state invariant violation"),
        }
    }
}

/// A fault swallowed by one of the `try_*` wrappers.
///
/// `Failed` carries the error returned by the caller's block, `Panicked`
/// the message of a panic raised inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault<E> {
    /// The block returned `Err`.
    Failed(E),
    /// The block panicked.
    Panicked(String),
}

impl<E> Fault<E> {
    /// Returns true if the block panicked rather than returning an error.
    #[must_use]
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }
}

impl<E: fmt::Display> fmt::Display for Fault<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(err) => write!(f, "{err}"),
            Self::Panicked(message) => write!(f, "panicked: {message}"),
        }
    }
}
