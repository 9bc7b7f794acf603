//! `TaggedResult<T, E>`: success or failure carrying the `OK` / `ERR` tags.

use matchkit_eval::{evaluate_tagged, Subject, TaggedRecord, Variant};
use matchkit_pattern::{tags, Pattern};

use crate::errors::SumError;

/// Either a success value (`Ok`) or an error (`Err`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TaggedResult<T, E> {
    Ok(T),
    Err(E),
}

/// `TaggedResult::Ok(value)`.
#[inline]
pub fn ok<T, E>(value: T) -> TaggedResult<T, E> {
    TaggedResult::Ok(value)
}

/// `TaggedResult::Err(error)`.
#[inline]
pub fn err<T, E>(error: E) -> TaggedResult<T, E> {
    TaggedResult::Err(error)
}

impl<T, E> TaggedResult<T, E> {
    #[inline]
    pub fn ok(value: T) -> Self {
        TaggedResult::Ok(value)
    }

    #[inline]
    pub fn err(error: E) -> Self {
        TaggedResult::Err(error)
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, TaggedResult::Ok(_))
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The success value, or `default` on error.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            TaggedResult::Ok(value) => value,
            TaggedResult::Err(_) => default,
        }
    }

    /// The success value, or `f(error)` on error.
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            TaggedResult::Ok(value) => value,
            TaggedResult::Err(error) => f(error),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            TaggedResult::Ok(value) => Some(value),
            TaggedResult::Err(_) => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            TaggedResult::Ok(_) => None,
            TaggedResult::Err(error) => Some(error),
        }
    }

    /// The success value, or `TagMismatch` on error.
    pub fn try_value(&self) -> Result<&T, SumError> {
        self.value()
            .ok_or_else(|| SumError::tag_mismatch(tags::OK, self.tag()))
    }

    /// The error, or `TagMismatch` on success.
    pub fn try_error(&self) -> Result<&E, SumError> {
        self.error()
            .ok_or_else(|| SumError::tag_mismatch(tags::ERR, self.tag()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn as_ref(&self) -> TaggedResult<&T, &E> {
        match self {
            TaggedResult::Ok(value) => TaggedResult::Ok(value),
            TaggedResult::Err(error) => TaggedResult::Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> TaggedResult<U, E> {
        match self {
            TaggedResult::Ok(value) => TaggedResult::Ok(f(value)),
            TaggedResult::Err(error) => TaggedResult::Err(error),
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> TaggedResult<T, F> {
        match self {
            TaggedResult::Ok(value) => TaggedResult::Ok(value),
            TaggedResult::Err(error) => TaggedResult::Err(f(error)),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> TaggedResult<U, E>) -> TaggedResult<U, E> {
        match self {
            TaggedResult::Ok(value) => f(value),
            TaggedResult::Err(error) => TaggedResult::Err(error),
        }
    }

    /// The success value as an option, dropping any error.
    pub fn into_option(self) -> crate::TaggedOption<T> {
        crate::result_to_option(self)
    }
}

impl<T: Copy, E> TaggedResult<&T, E> {
    pub fn copied(self) -> TaggedResult<T, E> {
        self.map(|value| *value)
    }
}

impl<T: Clone, E> TaggedResult<&T, E> {
    pub fn cloned(self) -> TaggedResult<T, E> {
        self.map(Clone::clone)
    }
}

impl<T, E> From<Result<T, E>> for TaggedResult<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => TaggedResult::Ok(value),
            Err(error) => TaggedResult::Err(error),
        }
    }
}

impl<T, E> From<TaggedResult<T, E>> for Result<T, E> {
    fn from(value: TaggedResult<T, E>) -> Self {
        match value {
            TaggedResult::Ok(value) => Ok(value),
            TaggedResult::Err(error) => Err(error),
        }
    }
}

impl<T, E> TaggedRecord for TaggedResult<T, E> {
    #[inline]
    fn tag(&self) -> u32 {
        match self {
            TaggedResult::Ok(_) => tags::OK,
            TaggedResult::Err(_) => tags::ERR,
        }
    }
}

impl<T, E> Variant<{ tags::OK }> for TaggedResult<T, E> {
    type Payload = T;

    #[inline]
    fn payload(&self) -> Option<&T> {
        self.value()
    }
}

impl<T, E> Variant<{ tags::ERR }> for TaggedResult<T, E> {
    type Payload = E;

    #[inline]
    fn payload(&self) -> Option<&E> {
        self.error()
    }
}

impl<T, E> Subject for TaggedResult<T, E> {
    #[inline]
    fn matches(&self, pattern: &Pattern) -> bool {
        evaluate_tagged(self, pattern)
    }
}
