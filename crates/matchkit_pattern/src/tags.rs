//! Discriminant values shared by every tagged record.
//!
//! The four sum-family tags are reserved process-wide so that generated
//! `TaggedOption`/`TaggedResult` values and user unions can be mixed in one
//! match without ambiguity. Tag `0` is never assigned.

/// Tag of a successful `TaggedResult`.
pub const OK: u32 = 1;

/// Tag of a failed `TaggedResult`.
pub const ERR: u32 = 2;

/// Tag of a populated `TaggedOption`.
pub const SOME: u32 = 3;

/// Tag of an empty `TaggedOption`.
pub const NONE: u32 = 4;

/// First tag available to user-defined unions.
pub const FIRST_USER: u32 = 5;

/// Whether `tag` is `0` or one of the sum-family tags.
#[inline]
pub const fn is_reserved(tag: u32) -> bool {
    tag < FIRST_USER
}

/// Name of a reserved sum-family tag, if `tag` is one.
pub const fn reserved_name(tag: u32) -> Option<&'static str> {
    match tag {
        OK => Some("Ok"),
        ERR => Some("Err"),
        SOME => Some("Some"),
        NONE => Some("None"),
        _ => None,
    }
}

/// Reserved tag for a sum-family variant name (`Ok`, `Err`, `Some`, `None`).
pub fn from_reserved_name(name: &str) -> Option<u32> {
    match name {
        "Ok" => Some(OK),
        "Err" => Some(ERR),
        "Some" => Some(SOME),
        "None" => Some(NONE),
        _ => None,
    }
}
