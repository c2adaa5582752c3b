//! Container helpers that never fail on an absent or short container.
//!
//! Every function takes its input as `Option<&[T]>`, `Option<&HashMap<..>>`
//! or `Option<&HashSet<..>>` and treats `None` as the empty container, so a
//! pipeline over missing data degrades to an empty result instead of an
//! error. Positional lookups return `None` out of range rather than
//! panicking.
//!
//! Functions are organized by category:
//! - Emptiness and size ([`checks`])
//! - Positional access and slicing ([`access`])
//! - Linear search ([`search`])
//! - Pipeline transforms ([`transform`]) and windowing ([`window`])
//! - Aggregation ([`aggregate`])
//! - Appending into an existing container ([`destination`])
//! - Map operations ([`map`](mod@map)), reached through the module path since their
//!   names overlap with the list helpers
//! - Set algebra ([`set`])
//! - Builders and frozen snapshots ([`build`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::implicit_hasher)]

pub mod access;
pub mod aggregate;
pub mod build;
pub mod checks;
pub mod destination;
pub mod map;
pub mod search;
pub mod set;
pub mod transform;
pub mod window;

pub use access::{
    drop, drop_last, first_or_default, first_or_null, get_or_default, get_or_else, get_or_null,
    head, init, last_or_default, last_or_null, slice_indices, slice_range, sub_list, tail, take,
    take_last,
};
pub use aggregate::{
    all, any, average_of, count, count_where, fold, fold_indexed, fold_right, fold_right_indexed,
    max_by, max_or_null, min_by, min_or_null, none, reduce, sum_of,
};
pub use build::{
    frozen_list, frozen_map, frozen_set, list_of_not_null, map_of_not_null, set_of_not_null,
};
pub use checks::{
    is_not_null_or_empty, is_null_or_empty, null_if_empty, or_empty, size_or_zero, slice_or_empty,
};
pub use destination::{
    filter_not_null_to, filter_not_to, filter_to, flat_map_to, group_by_to, map_not_null_to,
    map_to,
};
pub use search::{
    contains, find_first_or_null, find_last_or_null, index_of_first_or_null,
    index_of_last_or_null, index_of_or_null,
};
pub use set::{intersect, minus, plus, plus_all, subtract, union};
pub use transform::{
    associate, associate_by, associate_by_value, distinct, distinct_by, drop_last_while,
    drop_while, filter, filter_indexed, filter_not, filter_not_null, flat_map, flat_map_indexed,
    flatten, group_by, group_by_value, map, map_indexed, map_not_null, on_each, on_each_indexed,
    partition, reversed, shuffled, shuffled_with, sorted, sorted_by_key, sorted_by_key_descending,
    sorted_descending, sorted_with, take_last_while, take_while, zip, zip_with, zip_with_next,
};
pub use window::{Windowing, chunked, windowed};
