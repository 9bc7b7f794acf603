//! Error: only enums can be tagged records.
#![allow(dead_code)]

use matchkit::TaggedRecord;

#[derive(TaggedRecord)]
struct Point(i32);

fn main() {}
