//! Error: tag 0 is reserved.
#![allow(dead_code)]

use matchkit::TaggedRecord;

#[derive(TaggedRecord)]
enum Signal {
    #[tag = 0]
    Zero,
}

fn main() {}
