//! Error: variants hold at most one field.
#![allow(dead_code)]

use matchkit::TaggedRecord;

#[derive(TaggedRecord)]
enum Shape {
    Pair(i32, i32),
}

fn main() {}
