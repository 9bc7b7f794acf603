//! Matchkit Sum - tagged Option and Result types.
//!
//! `TaggedOption<T>` and `TaggedResult<T, E>` are ordinary generic enums whose
//! discriminants are the reserved tags (`SOME`, `NONE`, `OK`, `ERR`), so they
//! can be tested with variant patterns and mixed freely with user unions in a
//! multi-subject match. Conversions to and from the std types are lossless.
//!
//! ```
//! use matchkit_sum::{ok, option_to_result, some, TaggedResult};
//!
//! let parsed: TaggedResult<i32, &str> = ok(21);
//! assert_eq!(parsed.map(|v| v * 2).unwrap_or(0), 42);
//! assert_eq!(option_to_result(some(3), "missing"), ok(3));
//! ```

mod convert;
mod errors;
mod option;
mod result;

pub use convert::{option_to_result, result_to_option};
pub use errors::SumError;
pub use option::{none, some, TaggedOption};
pub use result::{err, ok, TaggedResult};
