//! Matchkit - structural pattern matching as an ordinary library.
//!
//! Patterns are plain values ([`Pattern`]) built right before a match and
//! tested against subjects: integral scalars, std `Option`/`Result`, the
//! tagged sum family ([`TaggedOption`], [`TaggedResult`]) and user enums
//! deriving [`TaggedRecord`](derive@TaggedRecord).
//!
//! ```
//! use matchkit::{between, ge, ok, tags, Match, TaggedResult};
//!
//! let grade = Match::on(&72)
//!     .when(ge(90), |_| 'A')
//!     .when(between(70, 89), |_| 'B')
//!     .otherwise(|_| 'C');
//! assert_eq!(grade, 'B');
//!
//! let parsed: TaggedResult<i32, String> = ok(42);
//! let doubled = Match::on(&parsed)
//!     .when_variant::<{ tags::OK }>(|v| v * 2)
//!     .otherwise(|_| 0);
//! assert_eq!(doubled, 84);
//! ```
//!
//! # Crates
//!
//! - `matchkit_pattern`: pattern values and the packed encoding
//! - `matchkit_eval`: evaluation, multi-subject rows, `Match`
//! - `matchkit_sum`: `TaggedOption` / `TaggedResult`
//! - `matchkit_macros`: `#[derive(TaggedRecord)]`, `#[derive(Scalar)]`

use std::sync::Once;

pub mod commands;

pub use matchkit_eval::{
    evaluate, evaluate_row, evaluate_tagged, evaluate_unsigned, evaluate_variant, evaluate_word,
    Match, Matches, Scalar, Subject, TaggedRecord, Variant,
};
pub use matchkit_macros::{Scalar, TaggedRecord};
pub use matchkit_pattern::{
    between, ge, gt, le, literal, lt, make_pattern, ne, range, tags, variant, wildcard,
    PackedPattern, Pattern, PatternError, PatternKind, WILDCARD,
};
pub use matchkit_sum::{
    err, none, ok, option_to_result, result_to_option, some, SumError, TaggedOption,
    TaggedResult,
};

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber for debug output.
///
/// Respects the `RUST_LOG` environment variable, e.g.
/// `RUST_LOG=matchkit_eval=trace` logs every pattern test and selected arm.
/// Does nothing when `RUST_LOG` is unset; safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
