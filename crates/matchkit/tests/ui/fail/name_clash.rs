//! Error: a tag constant would shadow a variant.
#![allow(dead_code)]

use matchkit::TaggedRecord;

#[derive(TaggedRecord)]
enum E {
    A,
}

fn main() {}
