//! Errors raised while building, encoding or parsing patterns.
//!
//! All of these are construction-time failures: a pattern that exists is
//! always well-formed, so evaluation itself has no error path.

use thiserror::Error;

use crate::pattern::PatternKind;

/// Failure to construct, encode, decode or parse a [`Pattern`](crate::Pattern).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A comparator or literal operand does not fit the packed operand field.
    #[error("operand {value} of `{kind}` does not fit in a {bits}-bit signed field")]
    OperandOutOfRange {
        kind: PatternKind,
        value: i64,
        bits: u32,
    },

    /// A range bound does not fit the packed 16-bit bound field.
    #[error("range bound {value} of `{kind}` is outside [{}, {}]", i16::MIN, i16::MAX)]
    RangeBoundOutOfRange { kind: PatternKind, value: i64 },

    /// A variant tag is zero (reserved) or wider than 32 bits.
    #[error("invalid variant tag {value}: tags are non-zero 32-bit values")]
    InvalidTag { value: i64 },

    /// `make` was given the wrong number of operands for the kind.
    #[error("`{kind}` takes {expected} operand(s), got {got}")]
    OperandCount {
        kind: PatternKind,
        expected: usize,
        got: usize,
    },

    /// A packed word carries a kind nibble no pattern kind uses.
    #[error("unknown pattern kind nibble {nibble:#x} in word {bits:#018x}")]
    UnknownKind { nibble: u8, bits: u64 },

    /// The textual pattern syntax could not be parsed.
    #[error("invalid pattern `{input}`: {reason}")]
    Syntax { input: String, reason: String },
}

impl PatternError {
    #[cold]
    pub(crate) fn syntax(input: &str, reason: impl Into<String>) -> Self {
        PatternError::Syntax {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}
