//! Matchkit Eval - testing subjects against patterns.
//!
//! This crate provides:
//! - the subject shapes: `Scalar` (integral values) and `TaggedRecord`
//!   (values with a discriminant) with per-variant payloads via `Variant`
//! - `evaluate` / `evaluate_variant` for one subject and one pattern
//! - `Matches` for rows of up to ten subjects
//! - `Match`, a first-match-wins arm selector
//!
//! # Evaluation
//!
//! Evaluation is pure and allocation-free. The only side effect is `trace`
//! level logging of each test and of the selected arm.

mod evaluate;
mod matcher;
mod record;
mod row;

pub use evaluate::{evaluate, evaluate_tagged, evaluate_unsigned, evaluate_variant, evaluate_word, Subject};
pub use matcher::Match;
pub use record::{Scalar, TaggedRecord, Variant};
pub use row::{evaluate_row, Matches};

pub use matchkit_pattern::{
    between, ge, gt, le, literal, lt, make_pattern, ne, range, tags, variant, wildcard,
    PackedPattern, Pattern, PatternError, PatternKind, WILDCARD,
};
