//! Error: two variants generate the same tag constant.
#![allow(dead_code)]

use matchkit::TaggedRecord;

#[derive(TaggedRecord)]
enum Failure {
    HttpError,
    HTTPError,
}

fn main() {}
