//! End-to-end matches over scalar subjects.

use matchkit::{between, ge, gt, literal, lt, ne, range, Match, WILDCARD};
use pretty_assertions::assert_eq;

fn describe(value: i32) -> &'static str {
    Match::on(&value)
        .when(42, |_| "answer")
        .when(gt(100), |_| "large")
        .when(range(10, 20), |_| "teens")
        .when(between(1, 50), |_| "small")
        .otherwise(|_| "unmatched")
}

#[test]
fn statement_form_with_bare_literals() {
    let got: Vec<_> = [5, 42, 15, 100, 200].into_iter().map(describe).collect();
    assert_eq!(got, ["small", "answer", "teens", "unmatched", "large"]);
}

#[test]
fn expression_form_grades() {
    let grade = |score: i32| {
        Match::on(&score)
            .when(ge(90), |_| 'A')
            .when(ge(80), |_| 'B')
            .when(ge(70), |_| 'C')
            .when(ge(60), |_| 'D')
            .otherwise(|_| 'F')
    };
    let got: String = [95, 85, 75, 65, 45].into_iter().map(grade).collect();
    assert_eq!(got, "ABCDF");
}

#[test]
fn points_on_two_subjects() {
    let classify = |x: i32, y: i32| {
        Match::on(&(x, y))
            .when([literal(0), literal(0)], |_| "origin")
            .when([WILDCARD, gt(100)], |_| "high y")
            .when([range(10, 20), range(10, 20)], |_| "inner square")
            .when([gt(50), gt(50)], |_| "far")
            .otherwise(|_| "regular")
    };
    assert_eq!(classify(0, 0), "origin");
    assert_eq!(classify(5, 10), "regular");
    assert_eq!(classify(15, 15), "inner square");
    assert_eq!(classify(100, 200), "high y");
    assert_eq!(classify(60, 60), "far");
}

#[test]
fn pattern_combinations() {
    let combine = |a: i32, b: i32| {
        Match::on(&(a, b))
            .when([lt(10), lt(15)], |_| "both small")
            .when([between(10, 20), between(15, 25)], |_| "both medium")
            .when([gt(20), gt(25)], |_| "both large")
            .when([ne(100), WILDCARD], |_| "first not 100")
            .finish()
    };
    assert_eq!(combine(5, 10), Some("both small"));
    assert_eq!(combine(15, 20), Some("both medium"));
    assert_eq!(combine(25, 30), Some("both large"));
    assert_eq!(combine(5, 40), Some("first not 100"));
    assert_eq!(combine(100, 10), None);
}

#[test]
fn wildcards_in_either_position() {
    let pair = |a: i32, b: i32| {
        Match::on(&(a, b))
            .when([literal(42), WILDCARD], |_| 1)
            .when([WILDCARD, literal(42)], |_| 2)
            .when([gt(50), ge(200)], |_| 3)
            .when([WILDCARD, WILDCARD], |_| 4)
            .otherwise(|_| unreachable!())
    };
    assert_eq!(
        [(1, 100), (42, 200), (75, 42), (100, 300)].map(|(a, b)| pair(a, b)),
        [4, 1, 2, 3]
    );
}

#[test]
fn nested_matches() {
    let nested = |value: i32| {
        Match::on(&value)
            .when(lt(20), |v| {
                Match::on(v)
                    .when(lt(10), |_| "very small")
                    .when(between(10, 19), |_| "small")
                    .otherwise(|_| unreachable!())
            })
            .when(ge(20), |v| {
                Match::on(v)
                    .when(lt(30), |_| "category 1")
                    .when(lt(40), |_| "category 2")
                    .otherwise(|_| "category 3")
            })
            .otherwise(|_| unreachable!())
    };
    let got: Vec<_> = [5, 15, 25, 35, 45].into_iter().map(nested).collect();
    assert_eq!(got, ["very small", "small", "category 1", "category 2", "category 3"]);
}

#[test]
fn status_codes() {
    let message = |code: u16| {
        Match::on(&code)
            .when(0, |_| "success")
            .when(between(200, 299), |_| "success response")
            .when(between(300, 399), |_| "redirect")
            .when(between(400, 499), |_| "client error")
            .when(between(500, 599), |_| "server error")
            .otherwise(|_| "unknown")
    };
    let got: Vec<_> = [0, 404, 500, 403, 200, 301].into_iter().map(message).collect();
    assert_eq!(
        got,
        ["success", "client error", "server error", "client error", "success response", "redirect"]
    );
}

#[test]
fn arm_bodies_compute_results() {
    let process = |value: i64| {
        Match::on(&value)
            .when(ge(100), |v| {
                let squared = v * v;
                squared + squared / 10
            })
            .when(ge(50), |v| v * 2)
            .otherwise(|v| v + 1)
    };
    assert_eq!([10, 50, 100, 200].map(process), [11, 100, 11_000, 44_000]);
}

#[test]
fn chars_and_bools_are_scalars() {
    let kind = |c: char| {
        Match::on(&c)
            .when(between(i64::from(b'0'), i64::from(b'9')), |_| "digit")
            .when('_', |_| "underscore")
            .otherwise(|_| "other")
    };
    assert_eq!(kind('7'), "digit");
    assert_eq!(kind('_'), "underscore");
    assert_eq!(kind('x'), "other");

    assert_eq!(Match::on(&true).when(1, |_| "yes").finish(), Some("yes"));
}
