//! Unit and single-field variants with default numbering.

use matchkit::{variant, Match, TaggedRecord};

#[derive(TaggedRecord)]
pub enum Shape {
    Circle(f64),
    Square(f64),
    Empty,
}

fn main() {
    assert_eq!((Shape::CIRCLE, Shape::SQUARE, Shape::EMPTY), (5, 6, 7));

    let area = Match::on(&Shape::Square(3.0))
        .when_variant::<{ Shape::CIRCLE }>(|r| 3.0 * r * r)
        .when_variant::<{ Shape::SQUARE }>(|s| s * s)
        .when(variant(Shape::EMPTY), |_| 0.0)
        .finish();
    assert_eq!(area, Some(9.0));
}
