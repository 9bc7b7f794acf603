//! Pattern evaluation.
//!
//! How a pattern is tested depends on the subject's static type:
//! scalars compare their signed word, tagged records compare their
//! discriminant. A bare literal tested against a tagged record is a
//! discriminant test, so `Ok` and `variant(Ok)` behave the same there. The
//! choice is made by the [`Subject`] impl at compile time; nothing ever looks
//! at a subject's memory to guess what it is.
//!
//! A successful variant test hands back the payload directly
//! ([`evaluate_variant`]), so several variant subjects can be inspected in one
//! arm and evaluation has no shared state at all.

use matchkit_pattern::{tags, Pattern};
use tracing::trace;

use crate::record::{Scalar, TaggedRecord, Variant};

/// A value that can be tested against a [`Pattern`].
pub trait Subject {
    fn matches(&self, pattern: &Pattern) -> bool;
}

/// Test `subject` against `pattern`.
#[inline]
pub fn evaluate<S: Subject + ?Sized>(subject: &S, pattern: &Pattern) -> bool {
    subject.matches(pattern)
}

/// Test a signed word against `pattern`.
///
/// Variant patterns never match a scalar.
pub fn evaluate_word(word: i64, pattern: &Pattern) -> bool {
    let matched = match *pattern {
        Pattern::Wildcard => true,
        Pattern::Literal(v) => word == v,
        Pattern::GreaterThan(v) => word > v,
        Pattern::GreaterOrEqual(v) => word >= v,
        Pattern::LessThan(v) => word < v,
        Pattern::LessOrEqual(v) => word <= v,
        Pattern::NotEqual(v) => word != v,
        Pattern::RangeExclusive { low, high } => low < word && word < high,
        Pattern::RangeInclusive { low, high } => low <= word && word <= high,
        Pattern::Variant(_) => false,
    };
    trace!(word, %pattern, matched, "scalar test");
    matched
}

/// Test an unsigned word against `pattern`.
///
/// Values up to `i64::MAX` behave like [`evaluate_word`]. Larger values exceed
/// every operand, so only the wildcard, `gt`, `ge` and `ne` match them.
pub fn evaluate_unsigned(word: u64, pattern: &Pattern) -> bool {
    if let Ok(word) = i64::try_from(word) {
        return evaluate_word(word, pattern);
    }
    let matched = matches!(
        pattern,
        Pattern::Wildcard
            | Pattern::GreaterThan(_)
            | Pattern::GreaterOrEqual(_)
            | Pattern::NotEqual(_)
    );
    trace!(word, %pattern, matched, "wide unsigned test");
    matched
}

/// Test a tagged record's discriminant against `pattern`.
///
/// `Variant(t)` and a bare `Literal(t)` both compare the discriminant.
/// Comparison and range patterns never match a tagged record.
pub fn evaluate_tagged<R: TaggedRecord + ?Sized>(record: &R, pattern: &Pattern) -> bool {
    let tag = record.tag();
    let matched = match *pattern {
        Pattern::Wildcard => true,
        Pattern::Variant(expected) => tag == expected,
        Pattern::Literal(v) => i64::from(tag) == v,
        _ => false,
    };
    trace!(
        tag,
        variant = tags::reserved_name(tag).unwrap_or("user"),
        %pattern,
        matched,
        "tagged test"
    );
    matched
}

/// Test `subject` for variant `TAG`, returning its payload on success.
pub fn evaluate_variant<const TAG: u32, R>(subject: &R) -> Option<&R::Payload>
where
    R: Variant<TAG> + ?Sized,
{
    let payload = subject.payload();
    trace!(tag = subject.tag(), expected = TAG, matched = payload.is_some(), "variant test");
    payload
}

macro_rules! impl_scalar_subject {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Subject for $ty {
                #[inline]
                fn matches(&self, pattern: &Pattern) -> bool {
                    evaluate_word(self.to_word(), pattern)
                }
            }
        )*
    };
}

impl_scalar_subject!(i8, i16, i32, i64, isize, u8, u16, u32, bool, char);

impl Subject for u64 {
    #[inline]
    fn matches(&self, pattern: &Pattern) -> bool {
        evaluate_unsigned(*self, pattern)
    }
}

impl Subject for usize {
    #[inline]
    fn matches(&self, pattern: &Pattern) -> bool {
        // usize is at most 64 bits wide on every supported target.
        u64::try_from(*self).is_ok_and(|word| evaluate_unsigned(word, pattern))
    }
}

impl<T: Subject + ?Sized> Subject for &T {
    #[inline]
    fn matches(&self, pattern: &Pattern) -> bool {
        (**self).matches(pattern)
    }
}

impl<T> Subject for Option<T> {
    #[inline]
    fn matches(&self, pattern: &Pattern) -> bool {
        evaluate_tagged(self, pattern)
    }
}

impl<T, E> Subject for Result<T, E> {
    #[inline]
    fn matches(&self, pattern: &Pattern) -> bool {
        evaluate_tagged(self, pattern)
    }
}
