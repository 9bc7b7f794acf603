//! Generic parameters and lifetimes pass through to the generated impls.

use matchkit::{evaluate_variant, TaggedRecord};

#[derive(TaggedRecord)]
enum Either<'a, L, R: Clone> {
    Left(L),
    Right(R),
    Borrowed(&'a str),
}

fn main() {
    let e: Either<'_, i32, String> = Either::Right("r".to_owned());
    assert_eq!(
        evaluate_variant::<{ Either::<'static, i32, String>::RIGHT }, _>(&e).map(String::as_str),
        Some("r")
    );
    assert_eq!(Either::<'static, i32, String>::LEFT, 5);
    let _ = Either::<i32, String>::Left(1);
    let _ = Either::<i32, String>::Borrowed("b");
}
