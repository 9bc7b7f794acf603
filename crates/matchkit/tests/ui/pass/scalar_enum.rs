//! Fieldless enums matched by discriminant.

use matchkit::{between, evaluate, Scalar};

#[derive(Clone, Copy, Scalar)]
enum Level {
    Low = 1,
    Mid = 5,
    High = 9,
}

fn main() {
    assert_eq!(Level::Mid.to_word(), 5);
    assert!(evaluate(&Level::High, &between(6, 9)));
    assert!(!evaluate(&Level::Low, &between(2, 9)));
}
