//! `Match` agrees with hand-written `match` expressions.

use matchkit::{
    between, evaluate, gt, literal, lt, ne, range, tags, variant, Match, TaggedOption,
    TaggedResult, WILDCARD,
};
use proptest::prelude::*;

fn bucket(x: i64) -> u8 {
    Match::on(&x)
        .when(literal(0), |_| 0)
        .when(lt(-1000), |_| 1)
        .when(between(1, 100), |_| 2)
        .when(range(-1000, 0), |_| 3)
        .when(gt(100), |_| 4)
        .otherwise(|_| 5)
}

fn bucket_by_hand(x: i64) -> u8 {
    match x {
        0 => 0,
        x if x < -1000 => 1,
        1..=100 => 2,
        x if -1000 < x && x < 0 => 3,
        x if x > 100 => 4,
        _ => 5,
    }
}

proptest! {
    #[test]
    fn first_match_wins_like_match(x in any::<i64>()) {
        prop_assert_eq!(bucket(x), bucket_by_hand(x));
    }

    #[test]
    fn row_arms_agree_with_tuple_match(a in any::<i64>(), b in any::<i64>()) {
        let by_row = Match::on(&(a, b))
            .when([gt(0), gt(0)], |_| "both positive")
            .when([literal(0), WILDCARD], |_| "first zero")
            .when([WILDCARD, ne(0)], |_| "second nonzero")
            .otherwise(|_| "other");
        let by_hand = match (a, b) {
            (a, b) if a > 0 && b > 0 => "both positive",
            (0, _) => "first zero",
            (_, b) if b != 0 => "second nonzero",
            _ => "other",
        };
        prop_assert_eq!(by_row, by_hand);
    }

    #[test]
    fn variant_arms_agree_with_enum_match(value in any::<Result<i32, u8>>()) {
        let result = TaggedResult::<i32, u8>::from(value);
        let by_arms = Match::on(&result)
            .when_variant::<{ tags::OK }>(|v| i64::from(*v))
            .when_variant::<{ tags::ERR }>(|e| -i64::from(*e))
            .otherwise(|_| i64::MIN);
        let by_hand = match value {
            Ok(v) => i64::from(v),
            Err(e) => -i64::from(e),
        };
        prop_assert_eq!(by_arms, by_hand);
    }

    #[test]
    fn option_variant_pattern_is_is_some(value in any::<Option<i32>>()) {
        let optional = TaggedOption::<i32>::from(value);
        prop_assert_eq!(evaluate(&optional, &variant(tags::SOME)), value.is_some());
        prop_assert_eq!(evaluate(&optional, &variant(tags::NONE)), value.is_none());
    }

    #[test]
    fn sizes_agree_with_match(len in any::<usize>()) {
        let by_arms = Match::on(&len)
            .when(0, |_| "empty")
            .when(between(1, 3), |_| "few")
            .otherwise(|_| "many");
        let by_hand = match len {
            0 => "empty",
            1..=3 => "few",
            _ => "many",
        };
        prop_assert_eq!(by_arms, by_hand);
    }
}
