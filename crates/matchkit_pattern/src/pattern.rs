//! The closed set of predicates a single subject position can be tested against.
//!
//! `Pattern` is a plain tagged enum: every kind carries its operands directly,
//! so there is no overflow hazard and no sentinel value for the wildcard. The
//! one-word packed form lives in [`crate::packed`] and is purely a codec.

use std::fmt;

use crate::errors::PatternError;

/// The kind of a [`Pattern`], without operands.
///
/// Each kind owns a fixed 4-bit nibble used by the packed encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternKind {
    Literal,
    Wildcard,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    NotEqual,
    RangeExclusive,
    RangeInclusive,
    Variant,
}

impl PatternKind {
    /// Every kind, in nibble order (wildcard last).
    pub const ALL: [PatternKind; 10] = [
        PatternKind::Literal,
        PatternKind::GreaterThan,
        PatternKind::GreaterOrEqual,
        PatternKind::LessThan,
        PatternKind::LessOrEqual,
        PatternKind::NotEqual,
        PatternKind::RangeExclusive,
        PatternKind::RangeInclusive,
        PatternKind::Variant,
        PatternKind::Wildcard,
    ];

    /// The kind's nibble in the top four bits of a packed word.
    pub const fn nibble(self) -> u8 {
        match self {
            PatternKind::Literal => 0x0,
            PatternKind::GreaterThan => 0x1,
            PatternKind::GreaterOrEqual => 0x2,
            PatternKind::LessThan => 0x3,
            PatternKind::LessOrEqual => 0x4,
            PatternKind::NotEqual => 0x5,
            PatternKind::RangeExclusive => 0x6,
            PatternKind::RangeInclusive => 0x7,
            PatternKind::Variant => 0x8,
            PatternKind::Wildcard => 0xF,
        }
    }

    /// Inverse of [`nibble`](Self::nibble). The wide-literal nibble is not a
    /// kind of its own and is resolved by the decoder.
    pub const fn from_nibble(nibble: u8) -> Option<PatternKind> {
        match nibble {
            0x0 => Some(PatternKind::Literal),
            0x1 => Some(PatternKind::GreaterThan),
            0x2 => Some(PatternKind::GreaterOrEqual),
            0x3 => Some(PatternKind::LessThan),
            0x4 => Some(PatternKind::LessOrEqual),
            0x5 => Some(PatternKind::NotEqual),
            0x6 => Some(PatternKind::RangeExclusive),
            0x7 => Some(PatternKind::RangeInclusive),
            0x8 => Some(PatternKind::Variant),
            0xF => Some(PatternKind::Wildcard),
            _ => None,
        }
    }

    /// Number of operands [`Pattern::make`] expects for this kind.
    pub const fn operand_count(self) -> usize {
        match self {
            PatternKind::Wildcard => 0,
            PatternKind::RangeExclusive | PatternKind::RangeInclusive => 2,
            PatternKind::Literal
            | PatternKind::GreaterThan
            | PatternKind::GreaterOrEqual
            | PatternKind::LessThan
            | PatternKind::LessOrEqual
            | PatternKind::NotEqual
            | PatternKind::Variant => 1,
        }
    }

    /// Constructor name used by the textual syntax.
    pub const fn name(self) -> &'static str {
        match self {
            PatternKind::Literal => "literal",
            PatternKind::Wildcard => "_",
            PatternKind::GreaterThan => "gt",
            PatternKind::GreaterOrEqual => "ge",
            PatternKind::LessThan => "lt",
            PatternKind::LessOrEqual => "le",
            PatternKind::NotEqual => "ne",
            PatternKind::RangeExclusive => "range",
            PatternKind::RangeInclusive => "between",
            PatternKind::Variant => "variant",
        }
    }

    /// Whether the kind compares the subject's integral value.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            PatternKind::GreaterThan
                | PatternKind::GreaterOrEqual
                | PatternKind::LessThan
                | PatternKind::LessOrEqual
                | PatternKind::NotEqual
        )
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A predicate over one subject position.
///
/// Constructed immediately before a match attempt and discarded afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pattern {
    /// Equal to the value.
    Literal(i64),
    /// Matches anything.
    Wildcard,
    GreaterThan(i64),
    GreaterOrEqual(i64),
    LessThan(i64),
    LessOrEqual(i64),
    NotEqual(i64),
    /// `low < subject < high`.
    RangeExclusive { low: i64, high: i64 },
    /// `low <= subject <= high`.
    RangeInclusive { low: i64, high: i64 },
    /// The subject is a tagged record carrying this discriminant.
    Variant(u32),
}

/// The wildcard pattern, written `_` or `__`.
pub const WILDCARD: Pattern = Pattern::Wildcard;

impl Pattern {
    /// Build a pattern of `kind` from a slice of operands.
    ///
    /// Range kinds take `[low, high]`, the wildcard takes none and every other
    /// kind takes exactly one. Variant tags must be non-zero and fit in 32 bits.
    pub fn make(kind: PatternKind, operands: &[i64]) -> Result<Pattern, PatternError> {
        let expected = kind.operand_count();
        if operands.len() != expected {
            return Err(PatternError::OperandCount {
                kind,
                expected,
                got: operands.len(),
            });
        }

        let pattern = match (kind, operands) {
            (PatternKind::Wildcard, []) => Pattern::Wildcard,
            (PatternKind::Literal, &[v]) => Pattern::Literal(v),
            (PatternKind::GreaterThan, &[v]) => Pattern::GreaterThan(v),
            (PatternKind::GreaterOrEqual, &[v]) => Pattern::GreaterOrEqual(v),
            (PatternKind::LessThan, &[v]) => Pattern::LessThan(v),
            (PatternKind::LessOrEqual, &[v]) => Pattern::LessOrEqual(v),
            (PatternKind::NotEqual, &[v]) => Pattern::NotEqual(v),
            (PatternKind::RangeExclusive, &[low, high]) => Pattern::RangeExclusive { low, high },
            (PatternKind::RangeInclusive, &[low, high]) => Pattern::RangeInclusive { low, high },
            (PatternKind::Variant, &[v]) => Pattern::Variant(checked_tag(v)?),
            _ => {
                return Err(PatternError::OperandCount {
                    kind,
                    expected,
                    got: operands.len(),
                })
            }
        };
        Ok(pattern)
    }

    /// The kind of this pattern.
    pub const fn kind(&self) -> PatternKind {
        match self {
            Pattern::Literal(_) => PatternKind::Literal,
            Pattern::Wildcard => PatternKind::Wildcard,
            Pattern::GreaterThan(_) => PatternKind::GreaterThan,
            Pattern::GreaterOrEqual(_) => PatternKind::GreaterOrEqual,
            Pattern::LessThan(_) => PatternKind::LessThan,
            Pattern::LessOrEqual(_) => PatternKind::LessOrEqual,
            Pattern::NotEqual(_) => PatternKind::NotEqual,
            Pattern::RangeExclusive { .. } => PatternKind::RangeExclusive,
            Pattern::RangeInclusive { .. } => PatternKind::RangeInclusive,
            Pattern::Variant(_) => PatternKind::Variant,
        }
    }

    /// The single operand of a literal or comparator pattern.
    pub const fn operand(&self) -> Option<i64> {
        match *self {
            Pattern::Literal(v)
            | Pattern::GreaterThan(v)
            | Pattern::GreaterOrEqual(v)
            | Pattern::LessThan(v)
            | Pattern::LessOrEqual(v)
            | Pattern::NotEqual(v) => Some(v),
            _ => None,
        }
    }

    /// The `(low, high)` bounds of a range pattern.
    pub const fn bounds(&self) -> Option<(i64, i64)> {
        match *self {
            Pattern::RangeExclusive { low, high } | Pattern::RangeInclusive { low, high } => {
                Some((low, high))
            }
            _ => None,
        }
    }

    /// The discriminant of a variant pattern.
    pub const fn tag(&self) -> Option<u32> {
        match *self {
            Pattern::Variant(tag) => Some(tag),
            _ => None,
        }
    }

    /// The operands in the order [`make`](Self::make) accepts them.
    pub fn operands(&self) -> Vec<i64> {
        match *self {
            Pattern::Wildcard => Vec::new(),
            Pattern::RangeExclusive { low, high } | Pattern::RangeInclusive { low, high } => {
                vec![low, high]
            }
            Pattern::Variant(tag) => vec![i64::from(tag)],
            Pattern::Literal(v)
            | Pattern::GreaterThan(v)
            | Pattern::GreaterOrEqual(v)
            | Pattern::LessThan(v)
            | Pattern::LessOrEqual(v)
            | Pattern::NotEqual(v) => vec![v],
        }
    }

    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Pattern::Wildcard)
    }
}

fn checked_tag(value: i64) -> Result<u32, PatternError> {
    match u32::try_from(value) {
        Ok(tag) if tag != 0 => Ok(tag),
        _ => Err(PatternError::InvalidTag { value }),
    }
}

// Constructors

/// Matches a subject equal to `value`.
#[inline]
pub const fn literal(value: i64) -> Pattern {
    Pattern::Literal(value)
}

/// Matches anything.
#[inline]
pub const fn wildcard() -> Pattern {
    Pattern::Wildcard
}

#[inline]
pub const fn gt(value: i64) -> Pattern {
    Pattern::GreaterThan(value)
}

#[inline]
pub const fn ge(value: i64) -> Pattern {
    Pattern::GreaterOrEqual(value)
}

#[inline]
pub const fn lt(value: i64) -> Pattern {
    Pattern::LessThan(value)
}

#[inline]
pub const fn le(value: i64) -> Pattern {
    Pattern::LessOrEqual(value)
}

#[inline]
pub const fn ne(value: i64) -> Pattern {
    Pattern::NotEqual(value)
}

/// Exclusive range: matches `low < subject < high`.
#[inline]
pub const fn range(low: i64, high: i64) -> Pattern {
    Pattern::RangeExclusive { low, high }
}

/// Inclusive range: matches `low <= subject <= high`.
#[inline]
pub const fn between(low: i64, high: i64) -> Pattern {
    Pattern::RangeInclusive { low, high }
}

/// Matches a tagged record whose discriminant is `tag`.
///
/// Tags are never `0`, so `variant(0)` matches nothing. [`Pattern::make`],
/// the packed codec and the textual syntax all reject it.
#[inline]
pub const fn variant(tag: u32) -> Pattern {
    Pattern::Variant(tag)
}

// Literal conversions

macro_rules! impl_literal_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Pattern {
                #[inline]
                fn from(value: $ty) -> Self {
                    Pattern::Literal(i64::from(value))
                }
            }
        )*
    };
}

impl_literal_from!(i8, i16, i32, i64, u8, u16, u32, bool);

impl From<char> for Pattern {
    #[inline]
    fn from(value: char) -> Self {
        Pattern::Literal(i64::from(u32::from(value)))
    }
}
