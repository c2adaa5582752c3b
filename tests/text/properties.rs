//! Property tests for text helpers

use nullguard_text::{decode_base64, encode_base64, ellipsize, trim};
use proptest::prelude::*;

proptest! {
    #[test]
    fn trim_is_idempotent(s in ".*") {
        let once = trim(Some(s.as_str()));
        prop_assert_eq!(trim(once), once);
    }

    #[test]
    fn base64_round_trips(s in ".*") {
        let encoded = encode_base64(Some(s.as_str()));
        prop_assert_eq!(decode_base64(encoded.as_deref()), Some(s));
    }

    #[test]
    fn ellipsize_respects_limit(s in ".{0,40}", max in 0_i64..20) {
        let out = ellipsize(Some(s.as_str()), max).unwrap().unwrap();
        let limit = usize::try_from(max.max(1)).unwrap();
        prop_assert!(out.chars().count() <= limit);
    }
}
