//! Error: an enum needs at least one variant.
#![allow(dead_code)]

use matchkit::TaggedRecord;

#[derive(TaggedRecord)]
enum Never {}

fn main() {}
