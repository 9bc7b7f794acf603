//! Checked extraction failures.

use std::fmt;

use matchkit_pattern::tags;
use thiserror::Error;

/// Reading an arm other than the active one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum SumError {
    #[error("expected `{}`, found `{}`", tag_name(.expected), tag_name(.found))]
    TagMismatch { expected: u32, found: u32 },
}

impl SumError {
    #[cold]
    pub(crate) fn tag_mismatch(expected: u32, found: u32) -> Self {
        SumError::TagMismatch { expected, found }
    }
}

struct TagName(u32);

#[allow(clippy::trivially_copy_pass_by_ref)]
fn tag_name(tag: &u32) -> TagName {
    TagName(*tag)
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match tags::reserved_name(self.0) {
            Some(name) => f.write_str(name),
            None => write!(f, "variant({})", self.0),
        }
    }
}
