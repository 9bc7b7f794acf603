//! Error: two variants share a tag.
#![allow(dead_code)]

use matchkit::TaggedRecord;

#[derive(TaggedRecord)]
enum Opcode {
    Load,
    #[tag = 5]
    Store,
}

fn main() {}
