//! Error: tags below 5 belong to Ok, Err, Some and None.
#![allow(dead_code)]

use matchkit::TaggedRecord;

#[derive(TaggedRecord)]
enum Reply {
    #[tag = 2]
    Pong,
}

fn main() {}
