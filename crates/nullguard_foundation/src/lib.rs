//! Core types shared by every nullguard layer.
//!
//! This crate provides:
//! - [`Error`] - The caller-error / state-invariant error taxonomy
//! - [`Fault`] - A fault swallowed by a `try_*` wrapper
//! - [`Maybe`] - The immutable present/empty optional wrapper
//! - [`Container`] - Item counting for text and collections
//! - Frozen snapshots ([`FrozenVec`], [`FrozenSet`], [`FrozenMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod container;
pub mod error;
pub mod frozen;
pub mod maybe;

pub use container::Container;
pub use error::{Error, ErrorCategory, ErrorKind, Fault, REQUIRED_VALUE_WAS_NULL};
pub use frozen::{FrozenMap, FrozenSet, FrozenVec};
pub use maybe::{Maybe, wrap, wrap_if_present};

/// Result type alias using nullguard's Error.
pub type Result<T> = std::result::Result<T, Error>;
