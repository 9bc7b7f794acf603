//! Matchkit Patterns - predicate values for structural matching.
//!
//! This crate provides:
//! - `Pattern`, the closed set of predicates one subject position is tested
//!   against (literal, wildcard, comparisons, ranges, variant tags)
//! - `PackedPattern`, a lossless one-word encoding of a `Pattern`
//! - the reserved discriminants shared by every tagged record (`tags`)
//! - a textual syntax (`"gt(30)"`, `"between(1, 9)"`, `"Ok"`)
//!
//! Evaluation lives in `matchkit_eval`; this crate only describes patterns.

mod errors;
mod packed;
mod pattern;
mod syntax;
pub mod tags;

pub use errors::PatternError;
pub use packed::PackedPattern;
pub use pattern::{
    between, ge, gt, le, literal, lt, ne, range, variant, wildcard, Pattern, PatternKind, WILDCARD,
};

/// Build a pattern from a kind and its operands. See [`Pattern::make`].
pub fn make_pattern(kind: PatternKind, operands: &[i64]) -> Result<Pattern, PatternError> {
    Pattern::make(kind, operands)
}
