//! Error: tags are integer literals.
#![allow(dead_code)]

use matchkit::TaggedRecord;

#[derive(TaggedRecord)]
enum Level {
    #[tag = "five"]
    High,
}

fn main() {}
