//! One-word packed encoding of a [`Pattern`].
//!
//! Layout of the 64-bit word:
//!
//! ```text
//!  63    60 59                                                   0
//! +--------+------------------------------------------------------+
//! | nibble | payload                                              |
//! +--------+------------------------------------------------------+
//! ```
//!
//! | nibble | kind             | payload                                          |
//! |--------|------------------|--------------------------------------------------|
//! | `0x0`  | literal          | the value itself (`0 <= v < 2^60`)               |
//! | `0x1`–`0x5` | gt ge lt le ne | 60-bit two's complement operand            |
//! | `0x6`  | range (excl.)    | `low: i16` at bits 32..48, `high: i16` at 0..16  |
//! | `0x7`  | between (incl.)  | same as range                                    |
//! | `0x8`  | variant          | tag at bits 0..32, extract flag at bit 32        |
//! | `0x9`  | literal (wide)   | 60-bit two's complement value                    |
//! | `0xF`  | wildcard         | zero                                             |
//!
//! Ordinary non-negative literals never set the top nibble, which is what lets
//! a decoder tell a plain value from a tagged pattern. Operands that do not fit
//! their field are rejected at encode time instead of being truncated.

use std::fmt;

use crate::errors::PatternError;
use crate::pattern::{Pattern, PatternKind};

const NIBBLE_SHIFT: u32 = 60;
const PAYLOAD_MASK: u64 = 0x0FFF_FFFF_FFFF_FFFF;
const OPERAND_BITS: u32 = 60;
const OPERAND_MIN: i64 = -(1 << 59);
const OPERAND_MAX: i64 = (1 << 59) - 1;
const LOW_SHIFT: u32 = 32;
const BOUND_MASK: u64 = 0xFFFF;
const TAG_MASK: u64 = 0xFFFF_FFFF;
const EXTRACT_FLAG: u64 = 1 << 32;
const WIDE_LITERAL_NIBBLE: u8 = 0x9;
const WILDCARD_BITS: u64 = 0xF << NIBBLE_SHIFT;

/// A [`Pattern`] packed into a single machine word.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PackedPattern(u64);

impl PackedPattern {
    /// The packed wildcard sentinel.
    pub const WILDCARD: PackedPattern = PackedPattern(WILDCARD_BITS);

    /// Encode `pattern`, failing if an operand does not fit its field.
    pub fn encode(pattern: &Pattern) -> Result<PackedPattern, PatternError> {
        let bits = match *pattern {
            Pattern::Wildcard => WILDCARD_BITS,
            Pattern::Literal(v) => encode_literal(v)?,
            Pattern::GreaterThan(v)
            | Pattern::GreaterOrEqual(v)
            | Pattern::LessThan(v)
            | Pattern::LessOrEqual(v)
            | Pattern::NotEqual(v) => {
                let kind = pattern.kind();
                with_nibble(kind.nibble(), checked_operand(kind, v)?)
            }
            Pattern::RangeExclusive { low, high } | Pattern::RangeInclusive { low, high } => {
                let kind = pattern.kind();
                let low = checked_bound(kind, low)?;
                let high = checked_bound(kind, high)?;
                with_nibble(
                    kind.nibble(),
                    (u64::from(low) << LOW_SHIFT) | u64::from(high),
                )
            }
            Pattern::Variant(tag) => {
                if tag == 0 {
                    return Err(PatternError::InvalidTag { value: 0 });
                }
                with_nibble(
                    PatternKind::Variant.nibble(),
                    EXTRACT_FLAG | u64::from(tag),
                )
            }
        };
        Ok(PackedPattern(bits))
    }

    /// Wrap a raw word. Nothing is validated until it is decoded.
    #[inline]
    pub const fn from_bits(bits: u64) -> PackedPattern {
        PackedPattern(bits)
    }

    /// The raw word.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// The kind nibble stored in the top four bits.
    #[inline]
    pub fn nibble(self) -> u8 {
        let [top, ..] = self.0.to_be_bytes();
        top >> 4
    }

    /// The kind of the packed pattern.
    pub fn kind(self) -> Result<PatternKind, PatternError> {
        match self.nibble() {
            WIDE_LITERAL_NIBBLE => Ok(PatternKind::Literal),
            nibble => PatternKind::from_nibble(nibble).ok_or(PatternError::UnknownKind {
                nibble,
                bits: self.0,
            }),
        }
    }

    /// Recover the pattern this word encodes.
    pub fn decode(self) -> Result<Pattern, PatternError> {
        let payload = self.0 & PAYLOAD_MASK;
        let pattern = match self.kind()? {
            PatternKind::Literal if self.nibble() == WIDE_LITERAL_NIBBLE => {
                Pattern::Literal(sign_extend(payload))
            }
            // Top nibble is zero, so the word is the value.
            PatternKind::Literal => Pattern::Literal(word_to_i64(payload)),
            PatternKind::GreaterThan => Pattern::GreaterThan(sign_extend(payload)),
            PatternKind::GreaterOrEqual => Pattern::GreaterOrEqual(sign_extend(payload)),
            PatternKind::LessThan => Pattern::LessThan(sign_extend(payload)),
            PatternKind::LessOrEqual => Pattern::LessOrEqual(sign_extend(payload)),
            PatternKind::NotEqual => Pattern::NotEqual(sign_extend(payload)),
            PatternKind::RangeExclusive => {
                let (low, high) = unpack_bounds(payload);
                Pattern::RangeExclusive { low, high }
            }
            PatternKind::RangeInclusive => {
                let (low, high) = unpack_bounds(payload);
                Pattern::RangeInclusive { low, high }
            }
            PatternKind::Variant => {
                let tag = low_u32(payload);
                if tag == 0 {
                    return Err(PatternError::InvalidTag { value: 0 });
                }
                Pattern::Variant(tag)
            }
            PatternKind::Wildcard => {
                if self.0 != WILDCARD_BITS {
                    return Err(PatternError::UnknownKind {
                        nibble: self.nibble(),
                        bits: self.0,
                    });
                }
                Pattern::Wildcard
            }
        };
        Ok(pattern)
    }

    /// The operand of a packed literal or comparator.
    pub fn operand(self) -> Option<i64> {
        self.decode().ok().and_then(|p| p.operand())
    }

    /// The bounds of a packed range.
    pub fn bounds(self) -> Option<(i64, i64)> {
        self.decode().ok().and_then(|p| p.bounds())
    }

    /// The tag of a packed variant pattern.
    pub fn tag(self) -> Option<u32> {
        self.decode().ok().and_then(|p| p.tag())
    }

    /// Whether a packed variant requests payload extraction. Always set by
    /// [`encode`](Self::encode).
    pub fn extracts_payload(self) -> bool {
        self.nibble() == PatternKind::Variant.nibble() && self.0 & EXTRACT_FLAG != 0
    }
}

impl TryFrom<Pattern> for PackedPattern {
    type Error = PatternError;

    fn try_from(pattern: Pattern) -> Result<Self, Self::Error> {
        PackedPattern::encode(&pattern)
    }
}

impl TryFrom<PackedPattern> for Pattern {
    type Error = PatternError;

    fn try_from(packed: PackedPattern) -> Result<Self, Self::Error> {
        packed.decode()
    }
}

impl fmt::Debug for PackedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedPattern({:#018x})", self.0)
    }
}

impl fmt::LowerHex for PackedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

// Bit helpers

#[inline]
fn with_nibble(nibble: u8, payload: u64) -> u64 {
    (u64::from(nibble) << NIBBLE_SHIFT) | (payload & PAYLOAD_MASK)
}

#[inline]
fn i64_to_word(value: i64) -> u64 {
    u64::from_ne_bytes(value.to_ne_bytes())
}

#[inline]
fn word_to_i64(word: u64) -> i64 {
    i64::from_ne_bytes(word.to_ne_bytes())
}

/// Sign-extend a 60-bit two's complement payload.
#[inline]
fn sign_extend(payload: u64) -> i64 {
    word_to_i64(payload << (64 - OPERAND_BITS)) >> (64 - OPERAND_BITS)
}

#[inline]
fn low_u32(word: u64) -> u32 {
    let [.., a, b, c, d] = (word & TAG_MASK).to_be_bytes();
    u32::from_be_bytes([a, b, c, d])
}

#[inline]
fn low_i16(word: u64) -> i16 {
    let [.., a, b] = (word & BOUND_MASK).to_be_bytes();
    i16::from_be_bytes([a, b])
}

fn unpack_bounds(payload: u64) -> (i64, i64) {
    let low = low_i16(payload >> LOW_SHIFT);
    let high = low_i16(payload);
    (i64::from(low), i64::from(high))
}

fn encode_literal(value: i64) -> Result<u64, PatternError> {
    let word = i64_to_word(value);
    if word & !PAYLOAD_MASK == 0 {
        return Ok(word);
    }
    let operand = checked_operand(PatternKind::Literal, value)?;
    Ok(with_nibble(WIDE_LITERAL_NIBBLE, operand))
}

fn checked_operand(kind: PatternKind, value: i64) -> Result<u64, PatternError> {
    if (OPERAND_MIN..=OPERAND_MAX).contains(&value) {
        Ok(i64_to_word(value) & PAYLOAD_MASK)
    } else {
        Err(PatternError::OperandOutOfRange {
            kind,
            value,
            bits: OPERAND_BITS,
        })
    }
}

fn checked_bound(kind: PatternKind, value: i64) -> Result<u16, PatternError> {
    let bound =
        i16::try_from(value).map_err(|_| PatternError::RangeBoundOutOfRange { kind, value })?;
    Ok(u16::from_ne_bytes(bound.to_ne_bytes()))
}
