//! Command handlers for the matchkit CLI.
//!
//! Each submodule implements one command. Handlers return their output lines
//! instead of printing, so `main` owns stdout/stderr and the exit code.

use std::fmt;

use matchkit_eval::{evaluate_tagged, evaluate_word, Subject, TaggedRecord};
use matchkit_pattern::{tags, Pattern, PatternError};
use thiserror::Error;

mod classify;
mod codec;
mod eval;

pub use classify::classify;
pub use codec::{decode, encode};
pub use eval::eval;

/// Failure of a CLI command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("invalid value `{input}`: {reason}")]
    Value { input: String, reason: String },

    #[error("invalid packed word `{input}`: {reason}")]
    Word { input: String, reason: String },
}

/// A subject given on the command line.
///
/// Integers and quoted characters are scalars; `Ok`, `Err`, `Some`, `None`
/// and `tag(N)` stand for a tagged record with that discriminant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CliValue {
    Word(i64),
    Tagged(u32),
}

impl CliValue {
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let text = input.trim();
        if let Some(tag) = tags::from_reserved_name(text) {
            return Ok(CliValue::Tagged(tag));
        }

        if let Some(inner) = text.strip_prefix("tag(").and_then(|t| t.strip_suffix(')')) {
            return match inner.trim().parse::<u32>() {
                Ok(0) => Err(value_error(input, "tag 0 is reserved")),
                Ok(tag) => Ok(CliValue::Tagged(tag)),
                Err(err) => Err(value_error(input, err.to_string())),
            };
        }

        // Reuse the pattern literal syntax for integers and chars.
        match text.parse::<Pattern>() {
            Ok(Pattern::Literal(word)) => Ok(CliValue::Word(word)),
            Ok(_) => Err(value_error(input, "expected an integer, a char or a variant name")),
            Err(err) => Err(value_error(input, err.to_string())),
        }
    }
}

#[cold]
fn value_error(input: &str, reason: impl Into<String>) -> CommandError {
    CommandError::Value {
        input: input.to_owned(),
        reason: reason.into(),
    }
}

/// A bare discriminant, standing in for a record whose payload is unknown.
struct Discriminant(u32);

impl TaggedRecord for Discriminant {
    fn tag(&self) -> u32 {
        self.0
    }
}

impl Subject for CliValue {
    fn matches(&self, pattern: &Pattern) -> bool {
        match *self {
            CliValue::Word(word) => evaluate_word(word, pattern),
            CliValue::Tagged(tag) => evaluate_tagged(&Discriminant(tag), pattern),
        }
    }
}

impl fmt::Display for CliValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CliValue::Word(word) => write!(f, "{word}"),
            CliValue::Tagged(tag) => match tags::reserved_name(tag) {
                Some(name) => f.write_str(name),
                None => write!(f, "tag({tag})"),
            },
        }
    }
}
