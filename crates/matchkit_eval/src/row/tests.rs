use matchkit_pattern::{between, gt, literal, lt, tags, variant, Pattern, WILDCARD};

use super::{evaluate_row, Matches};

#[test]
fn single_pattern_through_matches() {
    assert!(7_i32.matches_all(&literal(7)));
    assert!(!7_i32.matches_all(&gt(7)));
}

#[test]
fn pair_requires_every_position() {
    assert!((0_i32, 0_i32).matches_all(&[literal(0), literal(0)]));
    assert!(!(0_i32, 1_i32).matches_all(&[literal(0), literal(0)]));
    assert!((5_i32, -3_i32).matches_all(&[gt(0), lt(0)]));
    assert!((5_i32, -3_i32).matches_all(&[WILDCARD, lt(0)]));
}

#[test]
fn mixed_subject_kinds_in_one_row() {
    let ok: Result<i32, &str> = Ok(4);
    let none: Option<u8> = None;
    assert!((ok, none, 'x').matches_all(&[
        variant(tags::OK),
        variant(tags::NONE),
        literal(i64::from(u32::from('x'))),
    ]));
    assert!(!(ok, none, 'x').matches_all(&[variant(tags::OK), variant(tags::SOME), WILDCARD]));
}

#[test]
fn ten_subjects() {
    let row = (1_i32, 2_i32, 3_i32, 4_u8, 5_u8, 6_u16, 7_i64, 8_i64, 9_i8, 10_u32);
    let patterns = [
        literal(1),
        literal(2),
        literal(3),
        literal(4),
        literal(5),
        literal(6),
        literal(7),
        literal(8),
        literal(9),
        between(10, 10),
    ];
    assert!(row.matches_all(&patterns));
    let mut last_fails = [WILDCARD; 10];
    last_fails[9] = gt(10);
    assert!(!row.matches_all(&last_fails));
}

#[test]
fn slices_compare_lengths_first() {
    let xs = [1_i32, 2, 3];
    let ps: [Pattern; 3] = [literal(1), WILDCARD, gt(2)];
    assert!(xs[..].matches_all(&ps[..]));
    assert!(!xs[..].matches_all(&ps[..2]));
    assert!(!xs[..2].matches_all(&ps[..]));
    let empty: [i32; 0] = [];
    let no_patterns: [Pattern; 0] = [];
    assert!(empty[..].matches_all(&no_patterns[..]));
}

#[test]
fn evaluate_row_matches_tuples_and_slices() {
    assert!(evaluate_row(&(3_i32, 4_i32), &[literal(3), literal(4)]));
    assert!(evaluate_row(&[1_u8, 2][..], &[literal(1), literal(2)][..]));
}

mod proptest_rows {
    use matchkit_pattern::{literal, WILDCARD};
    use proptest::prelude::*;

    use crate::row::Matches;

    proptest! {
        #[test]
        fn row_is_conjunction_of_positions(a in any::<i32>(), b in any::<i32>(), x in any::<i32>(), y in any::<i32>()) {
            let (pa, pb) = (literal(i64::from(x)), literal(i64::from(y)));
            prop_assert_eq!(
                (a, b).matches_all(&[pa, pb]),
                a.matches_all(&pa) && b.matches_all(&pb)
            );
        }

        #[test]
        fn wildcard_row_always_matches(a in any::<i64>(), b in any::<u16>(), c in any::<bool>()) {
            prop_assert!((a, b, c).matches_all(&[WILDCARD, WILDCARD, WILDCARD]));
        }
    }
}
