//! Nullguard - Null-safe utility toolkit
//!
//! This crate re-exports all layers of the nullguard toolkit for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: nullguard_collections — Sequence, map, and set helpers
//!          nullguard_text        — Text helpers, case styles, codecs
//! Layer 1: nullguard_coalesce    — Coalescing, fallbacks, null-safe arithmetic
//! Layer 0: nullguard_foundation  — Core types (Error, Fault, Maybe, Container)
//! ```
//!
//! # Example
//!
//! ```
//! use nullguard::coalesce::coalesce;
//! use nullguard::collections::get_or_null;
//! use nullguard::foundation::wrap;
//! use nullguard::text::to_slug;
//!
//! assert_eq!(coalesce([None, None, Some(5)]), Some(5));
//! assert_eq!(get_or_null(Some(&[1, 2, 3][..]), 7), None);
//! assert_eq!(wrap(Some(5)).map(|x| x * 2).get().unwrap(), 10);
//! assert_eq!(to_slug(Some("Hello, World!  Foo")).as_deref(), Some("hello-world-foo"));
//! ```

pub use nullguard_coalesce as coalesce;
pub use nullguard_collections as collections;
pub use nullguard_foundation as foundation;
pub use nullguard_text as text;
