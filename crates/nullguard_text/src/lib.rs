//! Text helpers that tolerate absent input.
//!
//! Every function takes its text as `Option<&str>`. Absent input propagates
//! to an absent result unless an empty or `false` result is the more useful
//! answer, as documented per function. Lengths and positions count `char`s.
//!
//! Functions are organized by category:
//! - Predicates and comparison ([`predicates`])
//! - Trimming and case ([`trim`](mod@trim))
//! - Bounded and delimiter-based extraction ([`extract`])
//! - Padding ([`pad`]) and truncation ([`truncate`](mod@truncate))
//! - Replacement and whitespace cleanup ([`clean`])
//! - Splitting, lines, and joining ([`split`](mod@split))
//! - Case styles ([`case_style`])
//! - Base64 and lenient parsing ([`encode`])
//! - Compiled-pattern matching ([`pattern`])
//! - Indentation ([`indent`](mod@indent))
//! - Fallbacks, repetition, and appending ([`compose`])
//!
//! Only the truncation functions, `trim_margin` and `split_regex` can fail; they
//! return [`nullguard_foundation::Result`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod chars;

pub mod case_style;
pub mod clean;
pub mod compose;
pub mod encode;
pub mod extract;
pub mod indent;
pub mod pad;
pub mod pattern;
pub mod predicates;
pub mod split;
pub mod trim;
pub mod truncate;

pub use case_style::{to_camel_case, to_kebab_case, to_slug, to_snake_case, to_title_case};
pub use clean::{
    collapse_whitespace, remove_prefix, remove_suffix, remove_surrounding, remove_whitespace,
    replace, replace_char,
};
pub use compose::{append_to, or_default, or_empty, repeat, repeat_char};
pub use encode::{
    decode_base64, encode_base64, to_boolean_or_null, to_double_or_null, to_float_or_null,
    to_int_or_null, to_long_or_null,
};
pub use extract::{
    drop, drop_last, drop_while, substring_after, substring_after_last, substring_before,
    substring_before_last, substring_between, take, take_last, take_while,
};
pub use indent::{DEFAULT_INDENT, DEFAULT_MARGIN, indent, trim_indent, trim_margin};
pub use pad::{center, pad_end, pad_start};
pub use pattern::{find_all, find_first, matches_pattern, replace_all, replace_first};
pub use predicates::{
    compare, contains, contains_char, ends_with, equals, has_length, is_alpha, is_alphanumeric,
    is_blank, is_empty, is_not_blank, is_not_empty, is_numeric, matches, starts_with,
};
pub use split::{
    JoinOptions, LineSeq, Lines, join_to_string, join_to_string_with, line_sequence, lines, split,
    split_pattern, split_regex,
};
pub use trim::{
    capitalize, decapitalize, to_lower_case, to_upper_case, trim, trim_end, trim_start,
    trim_to_null,
};
pub use truncate::{DEFAULT_ELLIPSIS, ELLIPSIS_CHAR, ellipsize, ellipsize_middle, truncate};
