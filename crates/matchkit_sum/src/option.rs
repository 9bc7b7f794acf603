//! `TaggedOption<T>`: an optional value carrying the `SOME` / `NONE` tags.

use matchkit_eval::{evaluate_tagged, Subject, TaggedRecord, Variant};
use matchkit_pattern::{tags, Pattern};

use crate::errors::SumError;

/// Either a value (`Some`) or nothing (`None`).
///
/// A reference payload (`TaggedOption<&T>`) stores the reference itself and
/// never owns the referent.
///
/// Ordering agrees with std `Option`: `None` sorts before every `Some`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TaggedOption<T> {
    None,
    Some(T),
}

impl<T> Default for TaggedOption<T> {
    fn default() -> Self {
        TaggedOption::None
    }
}

/// `TaggedOption::Some(value)`.
#[inline]
pub fn some<T>(value: T) -> TaggedOption<T> {
    TaggedOption::Some(value)
}

/// `TaggedOption::None`.
#[inline]
pub fn none<T>() -> TaggedOption<T> {
    TaggedOption::None
}

impl<T> TaggedOption<T> {
    #[inline]
    pub fn some(value: T) -> Self {
        TaggedOption::Some(value)
    }

    #[inline]
    pub fn none() -> Self {
        TaggedOption::None
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, TaggedOption::Some(_))
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// The contained value, or `default` when `None`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            TaggedOption::Some(value) => value,
            TaggedOption::None => default,
        }
    }

    /// Same as [`unwrap_or`](Self::unwrap_or).
    pub fn unwrap_option_or(self, default: T) -> T {
        self.unwrap_or(default)
    }

    /// The contained value, or the result of `f` when `None`.
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            TaggedOption::Some(value) => value,
            TaggedOption::None => f(),
        }
    }

    /// A reference to the value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            TaggedOption::Some(value) => Some(value),
            TaggedOption::None => None,
        }
    }

    /// A reference to the value, or `TagMismatch` when `None`.
    pub fn try_value(&self) -> Result<&T, SumError> {
        self.value()
            .ok_or_else(|| SumError::tag_mismatch(tags::SOME, self.tag()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn as_ref(&self) -> TaggedOption<&T> {
        match self {
            TaggedOption::Some(value) => TaggedOption::Some(value),
            TaggedOption::None => TaggedOption::None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> TaggedOption<U> {
        match self {
            TaggedOption::Some(value) => TaggedOption::Some(f(value)),
            TaggedOption::None => TaggedOption::None,
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> TaggedOption<U>) -> TaggedOption<U> {
        match self {
            TaggedOption::Some(value) => f(value),
            TaggedOption::None => TaggedOption::None,
        }
    }

    /// `Some(v)` if `predicate(&v)` holds, otherwise `None`.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            TaggedOption::Some(value) if predicate(&value) => TaggedOption::Some(value),
            _ => TaggedOption::None,
        }
    }

    /// `Ok(v)` for `Some(v)`, `Err(error)` for `None`.
    pub fn ok_or<E>(self, error: E) -> crate::TaggedResult<T, E> {
        crate::option_to_result(self, error)
    }
}

impl<T: Copy> TaggedOption<&T> {
    pub fn copied(self) -> TaggedOption<T> {
        self.map(|value| *value)
    }
}

impl<T: Clone> TaggedOption<&T> {
    pub fn cloned(self) -> TaggedOption<T> {
        self.map(Clone::clone)
    }
}

impl<T> From<Option<T>> for TaggedOption<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => TaggedOption::Some(value),
            None => TaggedOption::None,
        }
    }
}

impl<T> From<TaggedOption<T>> for Option<T> {
    fn from(value: TaggedOption<T>) -> Self {
        match value {
            TaggedOption::Some(value) => Some(value),
            TaggedOption::None => None,
        }
    }
}

impl<T> TaggedRecord for TaggedOption<T> {
    #[inline]
    fn tag(&self) -> u32 {
        match self {
            TaggedOption::Some(_) => tags::SOME,
            TaggedOption::None => tags::NONE,
        }
    }
}

impl<T> Variant<{ tags::SOME }> for TaggedOption<T> {
    type Payload = T;

    #[inline]
    fn payload(&self) -> Option<&T> {
        self.value()
    }
}

impl<T> Variant<{ tags::NONE }> for TaggedOption<T> {
    type Payload = ();

    #[inline]
    fn payload(&self) -> Option<&()> {
        match self {
            TaggedOption::Some(_) => None,
            TaggedOption::None => Some(&()),
        }
    }
}

impl<T> Subject for TaggedOption<T> {
    #[inline]
    fn matches(&self, pattern: &Pattern) -> bool {
        evaluate_tagged(self, pattern)
    }
}
